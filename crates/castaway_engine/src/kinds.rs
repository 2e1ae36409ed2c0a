//! Kind tags the standard services are bound to, and the effect names
//! they look for.

use castaway_world::EntityKind;

/// A fillable well holding something at the bottom.
pub const WELL: EntityKind = EntityKind::new("well");
/// A water source.
pub const RIVER: EntityKind = EntityKind::new("river");
/// A water-carrying vessel.
pub const BUCKET: EntityKind = EntityKind::new("bucket");
/// A fuel-carrying vessel.
pub const FUEL_CAN: EntityKind = EntityKind::new("fuel can");
/// Mends a damaged hull.
pub const REPAIR_KIT: EntityKind = EntityKind::new("repair kit");

/// The airlock door between the cockpit and the void.
pub const HEAVY_DOOR: EntityKind = EntityKind::new("heavy door");
/// The wheel that locks the heavy door.
pub const HEAVY_DOOR_WHEEL: EntityKind = EntityKind::new("heavy door wheel");
/// A door that sticks until hit.
pub const STUCK_DOOR: EntityKind = EntityKind::new("stuck door");
/// An ordinary door leading somewhere.
pub const DOOR: EntityKind = EntityKind::new("door");

/// A breakable case holding items.
pub const GLASS_CASE: EntityKind = EntityKind::new("glass case");
/// The ship's hull.
pub const HULL: EntityKind = EntityKind::new("hull");
/// The ship's engine.
pub const ENGINE: EntityKind = EntityKind::new("engine");
/// Starts the engine and flies the ship.
pub const CONTROL_PANEL: EntityKind = EntityKind::new("control panel");
/// The extinguisher button under the control panel.
pub const RED_BUTTON: EntityKind = EntityKind::new("red button");
/// Relieves a full bladder.
pub const URINAL: EntityKind = EntityKind::new("urinal");

/// Lets the player search the bottom of the well.
pub const WATER_BREATHING: &str = "water breathing";
/// Lets the player survive the void.
pub const VACUUM_RESISTANCE: &str = "vacuum resistance";
/// Removed by the urinal.
pub const FULL_BLADDER: &str = "full bladder";
