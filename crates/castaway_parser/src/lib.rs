//! Command parsing for Castaway.
//!
//! This crate turns player input like "fill bucket with river" into a
//! validated command whose phrases are bound to world entities.
//!
//! # Architecture
//!
//! ```text
//! "fill bucket with river"
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   TOKENIZER     │  → ["FILL", "BUCKET", "WITH", "RIVER"]
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   SPLITTER      │  → action FILL, object BUCKET, WITH, object RIVER
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   VALIDATOR     │  → usage FILL <object|item> WITH <object|item>
//! │ (grammar +      │     or "Object not found: RIVER"
//! │  resolvers)     │
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   RESOLVER      │  → bucket-entity, river-entity
//! └─────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`tokenizer`] - Convert raw input to uppercase word tokens
//! - [`command`] - Command record and the splitter
//! - [`grammar`] - Usage rules per action and derived lookups
//! - [`resolve`] - Phrase and type resolution over the world registries
//! - [`validator`] - The five validation checks
//! - [`parser`] - Main pipeline orchestration

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod command;
pub mod grammar;
pub mod parser;
pub mod resolve;
pub mod tokenizer;
pub mod validator;

// Re-export main types for convenience
pub use command::{Command, CommandSplitter, Target};
pub use grammar::{UsageGrammar, UsageRule};
pub use parser::CommandParser;
pub use resolve::{CommandObjectResolver, ItemResolver, ObjectResolver, Query, Resolver};
pub use tokenizer::InputTokenizer;
pub use validator::CommandValidator;
