//! RugCheck Risk Reports
//!
//! Typed view over the RugCheck token report: the overall contract-safety
//! score plus the per-risk breakdown. Informational only, never persisted.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// One named risk from a RugCheck report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    /// Severity score contributed by this risk
    pub score: f64,
    /// Human-readable explanation
    pub description: String,
    /// Provider-assigned level, e.g. "warn" or "danger"
    pub level: String,
}

/// Risk name -> assessment mapping
pub type RiskReport = HashMap<String, RiskAssessment>;

/// Full RugCheck lookup result for one token
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RugReport {
    /// Overall contract-safety score; higher is presumed safer. Absent when
    /// the provider returns no score.
    pub score: Option<f64>,
    /// Per-risk breakdown
    #[serde(default)]
    pub risks: RiskReport,
}

impl RugReport {
    /// Report with no score and no risks, used when a lookup degrades
    pub fn empty() -> Self {
        Self {
            score: None,
            risks: RiskReport::new(),
        }
    }
}
