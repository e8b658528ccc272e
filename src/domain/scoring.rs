//! Upside Scorer
//!
//! Extracts flat numeric features from a canonical token and computes a
//! weighted upside score. The shipped [`LinearScorer`] is an explicit
//! placeholder heuristic, not a trained model; the [`UpsideScorer`] trait
//! keeps the extract -> score contract stable so a real predictive model can
//! replace it without touching callers.

use serde::{Deserialize, Serialize};

use crate::domain::token::CanonicalToken;

/// Flat numeric features feeding the scorer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    /// 24-hour trading volume
    pub volume_h24: f64,
    /// 1-hour price change in percentage points
    pub price_change_h1: f64,
    /// Pool liquidity in USD
    pub liquidity_usd: f64,
}

/// Extract scoring features from a canonical token.
///
/// Tolerant of both flat and per-window metric shapes; missing sub-keys
/// default to zero.
pub fn extract_features(token: &CanonicalToken) -> FeatureVector {
    FeatureVector {
        volume_h24: token.volume.at("h24"),
        price_change_h1: token.price_change.at("h1"),
        liquidity_usd: token.liquidity.at("usd"),
    }
}

/// Scoring model behind the pipeline's score stage
pub trait UpsideScorer: Send + Sync {
    /// Compute the upside score for one feature vector
    fn score(&self, features: &FeatureVector) -> f64;
}

/// Weighted linear placeholder scorer
#[derive(Debug, Clone)]
pub struct LinearScorer {
    /// Weight on 1-hour price change
    pub price_change_weight: f64,
    /// Weight on 24-hour volume
    pub volume_weight: f64,
    /// Weight on USD liquidity
    pub liquidity_weight: f64,
}

impl Default for LinearScorer {
    fn default() -> Self {
        // The weights and 2-decimal rounding are load-bearing: downstream
        // consumers compare scores across runs
        Self {
            price_change_weight: 0.6,
            volume_weight: 0.3,
            liquidity_weight: 0.1,
        }
    }
}

impl UpsideScorer for LinearScorer {
    fn score(&self, features: &FeatureVector) -> f64 {
        let raw = features.price_change_h1 * self.price_change_weight
            + features.volume_h24 * self.volume_weight
            + features.liquidity_usd * self.liquidity_weight;
        (raw * 100.0).round() / 100.0
    }
}
