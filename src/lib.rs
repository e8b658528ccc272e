//! Upside Scout - Token Discovery and Scoring Pipeline Library
//!
//! Aggregates freshly listed tokens from pump.fun and DexScreener, normalizes
//! the heterogeneous provider payloads into one canonical shape, filters out
//! suspicious entries, attaches RugCheck safety scores and ranks everything by
//! a weighted upside score.
//!
//! # Modules
//!
//! - `domain`: Core business logic (CanonicalToken, standardizer, suspicion
//!   heuristics, upside scorer, rug risk reports)
//! - `ports`: Trait abstractions (TokenSource, RugCheckPort)
//! - `adapters`: External implementations (pump.fun, DexScreener, RugCheck, CLI)
//! - `config`: Configuration loading and validation
//! - `application`: Aggregation pipeline and run reports

pub mod domain;
pub mod ports;
pub mod adapters;
pub mod config;
pub mod application;
