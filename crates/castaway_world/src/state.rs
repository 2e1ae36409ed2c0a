//! State enums for stateful entities.
//!
//! Each stateful family gets its own small enum so a handler can only ever
//! move an entity between states that exist for it.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Current state of a stateful entity.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum State {
    /// A container that fills up over several pours (a well).
    Fill(FillLevel),
    /// A portable vessel that carries a liquid (a bucket, a fuel can).
    Vessel(Contents),
    /// Something that opens and closes (doors, wheels).
    Hatch(Hatch),
    /// A machine with a linear start-up sequence (an engine).
    Device(DeviceState),
    /// Something that can be broken or mended (a glass case, a hull).
    Integrity(Integrity),
}

/// Fill progress of a fillable container.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FillLevel {
    /// Still needs `remaining` pours.
    Filling {
        /// Pours left before the container is full.
        remaining: u32,
    },
    /// Full; further pours are rejected.
    Full,
}

/// What a vessel holds.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Contents {
    /// Nothing
    Empty,
    /// Water from a river or well
    Water,
    /// Engine fuel
    Fuel,
}

/// Position of a door or wheel.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Hatch {
    /// Open
    Open,
    /// Closed
    Closed,
    /// Jammed shut until forced.
    Stuck,
}

/// Start-up stage of a device.
///
/// Progress is `Empty -> Fueled -> Working`. `Broken` is reachable from any
/// stage and is terminal.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DeviceState {
    /// No fuel
    Empty,
    /// Fuel loaded, not yet started
    Fueled,
    /// Running
    Working,
    /// Permanently broken
    Broken,
}

/// Whether something is whole.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Integrity {
    /// Whole
    Intact,
    /// Broken or damaged
    Broken,
}
