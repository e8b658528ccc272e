//! Token Standardizer
//!
//! Maps raw per-provider records into the canonical token shape. Extraction
//! uses default-on-missing-key semantics throughout: partial input degrades to
//! documented defaults, it never fails. Records from unrecognized providers
//! yield `None` and are treated by callers as degenerate, not as errors.

use crate::domain::token::{CanonicalToken, Metric, RawToken, MISSING_FIELD, PLACEHOLDER_ICON};

/// Source tag applied by the pump.fun adapter
pub const SOURCE_PUMP_FUN: &str = "pump.fun";

/// Source tag applied by the DexScreener adapter
pub const SOURCE_DEXSCREENER: &str = "dexscreener";

/// Default token name when the provider omits one
pub const UNKNOWN_NAME: &str = "Unknown";

/// Convert a raw provider record into the canonical shape.
///
/// Recognizes exactly `"pump.fun"` and `"dexscreener"`; any other source tag
/// yields `None`. The `chain` field is lower-cased here so downstream chain
/// filtering is case-insensitive by construction.
pub fn standardize(raw: &RawToken) -> Option<CanonicalToken> {
    match raw.source.as_str() {
        SOURCE_PUMP_FUN => Some(standardize_pump_fun(raw)),
        SOURCE_DEXSCREENER => Some(standardize_dexscreener(raw)),
        _ => None,
    }
}

/// pump.fun reports flat numbers for volume/priceChange/liquidity
fn standardize_pump_fun(raw: &RawToken) -> CanonicalToken {
    CanonicalToken {
        name: raw.str_or("name", UNKNOWN_NAME),
        icon: raw.str_or("icon", PLACEHOLDER_ICON),
        description: raw.str_or("description", MISSING_FIELD),
        address: raw.str_or("address", MISSING_FIELD),
        symbol: raw.str_or("symbol", MISSING_FIELD),
        chain: raw.str_or("chain", "").to_lowercase(),
        price_usd: raw.num_or_zero("priceUsd"),
        market_cap: raw.num_or_zero("marketCap"),
        volume: Metric::from_value(raw.get("volume")),
        price_change: Metric::from_value(raw.get("priceChange")),
        liquidity: Metric::from_value(raw.get("liquidity")),
    }
}

/// DexScreener nests volume/priceChange under time windows and liquidity
/// under {"usd": ..}; the address lives in `tokenAddress` and the chain in
/// `chainId`
fn standardize_dexscreener(raw: &RawToken) -> CanonicalToken {
    CanonicalToken {
        name: raw.str_or("name", UNKNOWN_NAME),
        icon: raw.str_or("icon", PLACEHOLDER_ICON),
        description: raw.str_or("description", MISSING_FIELD),
        symbol: raw.str_or("symbol", MISSING_FIELD),
        address: raw.str_or("tokenAddress", MISSING_FIELD),
        chain: raw.str_or("chainId", "").to_lowercase(),
        price_usd: raw.num_or_zero("priceUsd"),
        market_cap: raw.num_or_zero("marketCap"),
        volume: Metric::from_value(raw.get("volume")),
        price_change: Metric::from_value(raw.get("priceChange")),
        liquidity: Metric::from_value(raw.get("liquidity")),
    }
}
