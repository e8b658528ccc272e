//! Token Records
//!
//! Raw provider payloads, the canonical provider-agnostic token shape and the
//! scored record returned by the pipeline. Providers disagree on how they
//! report volume, price change and liquidity (pump.fun sends flat numbers,
//! DexScreener nests them per time window), so those three fields are modeled
//! as a [`Metric`] that normalizes both shapes behind one accessor.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Placeholder icon URL used when a provider omits the token image
pub const PLACEHOLDER_ICON: &str = "img.png";

/// Default value for missing textual fields
pub const MISSING_FIELD: &str = "N/A";

/// Raw per-provider token record: an opaque JSON object tagged with the
/// provider that produced it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawToken {
    /// Provider tag, e.g. "pump.fun" or "dexscreener"
    pub source: String,
    /// Provider-specific fields, schema varies by source
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl RawToken {
    /// Create a raw token tagged with its provider
    pub fn new(source: impl Into<String>, fields: Map<String, Value>) -> Self {
        Self {
            source: source.into(),
            fields,
        }
    }

    /// Get a field value by key
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// String field with a default for missing or non-string values
    pub fn str_or(&self, key: &str, default: &str) -> String {
        match self.fields.get(key) {
            Some(Value::String(s)) => s.clone(),
            _ => default.to_string(),
        }
    }

    /// Numeric field with a zero default; accepts JSON numbers and
    /// numeric strings (DexScreener reports `priceUsd` as a string)
    pub fn num_or_zero(&self, key: &str) -> f64 {
        self.fields.get(key).map(value_as_f64).unwrap_or(0.0)
    }
}

/// Coerce a JSON value into a float, defaulting to zero
pub(crate) fn value_as_f64(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => s.parse().unwrap_or(0.0),
        _ => 0.0,
    }
}

/// A volume/price-change/liquidity figure in either provider shape
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Metric {
    /// Single flat number (pump.fun)
    Flat(f64),
    /// Per-window breakdown, e.g. {"h1": .., "h24": ..} or {"usd": ..}
    /// (DexScreener)
    Windowed(HashMap<String, f64>),
}

impl Metric {
    /// Read the figure for a given window key. Flat metrics ignore the key;
    /// windowed metrics default to zero when the sub-key is missing.
    pub fn at(&self, window: &str) -> f64 {
        match self {
            Metric::Flat(v) => *v,
            Metric::Windowed(map) => map.get(window).copied().unwrap_or(0.0),
        }
    }

    /// Build a metric from a raw JSON value, tolerating flat numbers,
    /// numeric strings, nested window objects and absent values
    pub fn from_value(value: Option<&Value>) -> Self {
        match value {
            Some(Value::Object(map)) => Metric::Windowed(
                map.iter()
                    .map(|(k, v)| (k.clone(), value_as_f64(v)))
                    .collect(),
            ),
            Some(v) => Metric::Flat(value_as_f64(v)),
            None => Metric::Flat(0.0),
        }
    }
}

impl Default for Metric {
    fn default() -> Self {
        Metric::Flat(0.0)
    }
}

/// The standardized, provider-agnostic token record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanonicalToken {
    /// Token name
    pub name: String,
    /// Ticker symbol
    pub symbol: String,
    /// Contract/mint address
    pub address: String,
    /// Chain identifier, always lower-cased by the standardizer
    pub chain: String,
    /// Current price in USD
    pub price_usd: f64,
    /// Market capitalization in USD
    pub market_cap: f64,
    /// Trading volume
    pub volume: Metric,
    /// Recent price change in percentage points
    pub price_change: Metric,
    /// Pool liquidity
    pub liquidity: Metric,
    /// Token image URL
    pub icon: String,
    /// Token description
    pub description: String,
}

impl CanonicalToken {
    /// Whether the record carries a usable contract address
    pub fn has_address(&self) -> bool {
        !self.address.is_empty() && self.address != MISSING_FIELD
    }

    /// Whether the token lives on Solana (chain is lower-cased at
    /// standardization, so this match is case-insensitive by construction)
    pub fn is_solana(&self) -> bool {
        matches!(self.chain.as_str(), "solana" | "sol")
    }
}

/// Canonical token annotated with pipeline scores
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredToken {
    /// The underlying canonical record
    #[serde(flatten)]
    pub token: CanonicalToken,
    /// Weighted upside score, rounded to 2 decimals
    pub upside_score: f64,
    /// RugCheck contract-safety score; `None` when the token has no address
    /// or the lookup failed
    pub rug_score: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn obj(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_metric_flat_ignores_window() {
        let metric = Metric::Flat(123.0);
        assert_eq!(metric.at("h24"), 123.0);
        assert_eq!(metric.at("usd"), 123.0);
    }

    #[test]
    fn test_metric_windowed_lookup() {
        let metric = Metric::from_value(Some(&json!({"h1": 2.5, "h24": 40.0})));
        assert_eq!(metric.at("h1"), 2.5);
        assert_eq!(metric.at("h24"), 40.0);
        // Missing sub-key defaults to zero
        assert_eq!(metric.at("h6"), 0.0);
    }

    #[test]
    fn test_metric_from_numeric_string() {
        let metric = Metric::from_value(Some(&json!("0.0042")));
        assert_eq!(metric.at("h24"), 0.0042);
    }

    #[test]
    fn test_metric_from_absent_value() {
        assert_eq!(Metric::from_value(None), Metric::Flat(0.0));
        assert_eq!(Metric::from_value(Some(&Value::Null)), Metric::Flat(0.0));
    }

    #[test]
    fn test_raw_token_accessors() {
        let raw = RawToken::new(
            "pump.fun",
            obj(json!({"name": "Bonk", "priceUsd": "1.5", "marketCap": 42})),
        );
        assert_eq!(raw.str_or("name", "Unknown"), "Bonk");
        assert_eq!(raw.str_or("symbol", "N/A"), "N/A");
        assert_eq!(raw.num_or_zero("priceUsd"), 1.5);
        assert_eq!(raw.num_or_zero("marketCap"), 42.0);
        assert_eq!(raw.num_or_zero("volume"), 0.0);
    }

    #[test]
    fn test_has_address() {
        let mut token = CanonicalToken {
            name: "Test".into(),
            symbol: "TST".into(),
            address: "So11111111111111111111111111111111111111112".into(),
            chain: "solana".into(),
            price_usd: 0.0,
            market_cap: 0.0,
            volume: Metric::default(),
            price_change: Metric::default(),
            liquidity: Metric::default(),
            icon: PLACEHOLDER_ICON.into(),
            description: MISSING_FIELD.into(),
        };
        assert!(token.has_address());
        assert!(token.is_solana());

        token.address = MISSING_FIELD.into();
        assert!(!token.has_address());
        token.address = String::new();
        assert!(!token.has_address());
    }

    #[test]
    fn test_scored_token_serializes_flat() {
        let token = CanonicalToken {
            name: "Test".into(),
            symbol: "TST".into(),
            address: "addr".into(),
            chain: "sol".into(),
            price_usd: 1.0,
            market_cap: 10.0,
            volume: Metric::Flat(100.0),
            price_change: Metric::Flat(5.0),
            liquidity: Metric::Flat(50.0),
            icon: PLACEHOLDER_ICON.into(),
            description: MISSING_FIELD.into(),
        };
        let scored = ScoredToken {
            token,
            upside_score: 41.0,
            rug_score: None,
        };

        let json = serde_json::to_value(&scored).unwrap();
        // Flattened: canonical fields sit next to the scores
        assert_eq!(json["symbol"], "TST");
        assert_eq!(json["upside_score"], 41.0);
        assert_eq!(json["rug_score"], Value::Null);
    }
}
