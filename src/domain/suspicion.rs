//! Suspicious Token Heuristics
//!
//! Flags tokens that look like fake-volume, bot-driven or wash-trading
//! listings using ratio checks over volume, liquidity and price change.
//! This is a heuristic gate, not a proof: no false-negative guarantee.

use tracing::debug;

use crate::domain::scoring::extract_features;
use crate::domain::token::CanonicalToken;

/// Volume-to-liquidity ratio above which volume looks fake
pub const MAX_VOLUME_LIQUIDITY_RATIO: f64 = 1000.0;

/// Absolute price-change (percentage points) above which movement looks
/// bot-driven
pub const MAX_ABS_PRICE_CHANGE: f64 = 200.0;

/// Liquidity floor below which high volume looks like wash trading
pub const DUST_LIQUIDITY_USD: f64 = 1.0;

/// Volume considered "high" against near-zero liquidity
pub const HIGH_VOLUME_USD: f64 = 1000.0;

/// Check a token against the three suspicion heuristics; any one flags it.
pub fn is_suspicious(token: &CanonicalToken) -> bool {
    let features = extract_features(token);
    let volume = features.volume_h24;
    let liquidity = features.liquidity_usd;
    let price_change = features.price_change_h1;

    // Fake volume: volume dwarfs liquidity. Ratio is only evaluated when
    // liquidity is positive, guarding the division.
    if liquidity > 0.0 && volume / liquidity > MAX_VOLUME_LIQUIDITY_RATIO {
        debug!(
            name = %token.name,
            ratio = volume / liquidity,
            "token flagged: volume/liquidity ratio"
        );
        return true;
    }

    // Bot transactions: extreme short-term volatility
    if price_change.abs() > MAX_ABS_PRICE_CHANGE {
        debug!(name = %token.name, price_change, "token flagged: extreme price change");
        return true;
    }

    // Wash trading: near-zero liquidity but high reported volume
    if liquidity < DUST_LIQUIDITY_USD && volume > HIGH_VOLUME_USD {
        debug!(name = %token.name, liquidity, volume, "token flagged: dust liquidity, high volume");
        return true;
    }

    false
}
