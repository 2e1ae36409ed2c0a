//! Castaway - interpreter core for a turn-based text adventure
//!
//! This crate re-exports all layers of the Castaway system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: castaway_runtime    - REPL, session, configuration, CLI
//!          castaway_content    - Demo world registries
//! Layer 3: castaway_engine     - Services, dispatch, entity state machines
//! Layer 2: castaway_parser     - Tokenizer, grammar, resolvers, validator
//! Layer 1: castaway_world      - Entities, environments, player, registry
//! Layer 0: castaway_foundation - Vocabularies, ids, effects, errors
//! ```

pub use castaway_content as content;
pub use castaway_engine as engine;
pub use castaway_foundation as foundation;
pub use castaway_parser as parser;
pub use castaway_runtime as runtime;
pub use castaway_world as world;
