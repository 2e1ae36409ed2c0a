//! Integration tests for the castaway_parser crate.
//!
//! Tests for the command pipeline against the bundled worlds:
//! - Tokenization and splitting
//! - Phrase resolution
//! - Validation order and messages

mod resolution_tests;
mod splitting_tests;
mod validation_tests;
