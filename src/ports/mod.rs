//! Ports Layer - Trait definitions for external dependencies
//!
//! Following hexagonal architecture, these traits abstract:
//! - Bulk token listing feeds (pump.fun, DexScreener)
//! - Per-token contract-safety lookups (RugCheck)
//!
//! `mocks` holds recording test doubles shared by unit and integration tests.

pub mod source;
pub mod mocks;

pub use source::{RugCheckPort, SourceError, TokenSource};
