//! Domain Layer - Core business logic for the aggregation pipeline
//!
//! This module contains pure domain types and logic with no network
//! dependencies. All external interactions happen through the ports layer.
//!
//! - `token`: raw and canonical token records, metric shape normalization
//! - `standardize`: per-provider mapping into the canonical shape
//! - `suspicion`: fake-volume / wash-trading heuristics
//! - `scoring`: feature extraction and the swappable upside scorer
//! - `risk`: RugCheck risk report types

pub mod token;
pub mod standardize;
pub mod suspicion;
pub mod scoring;
pub mod risk;

pub use token::{CanonicalToken, Metric, RawToken, ScoredToken};
pub use standardize::{standardize, SOURCE_DEXSCREENER, SOURCE_PUMP_FUN};
pub use suspicion::is_suspicious;
pub use scoring::{extract_features, FeatureVector, LinearScorer, UpsideScorer};
pub use risk::{RiskAssessment, RiskReport, RugReport};
