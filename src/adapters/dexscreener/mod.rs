//! DexScreener Adapter
//!
//! Two-stage fetch: the latest token-profiles listing gives addresses, icons
//! and descriptions; a per-token pair-details call enriches each entry with
//! price, volume, liquidity, market cap and price change. A failed detail
//! lookup degrades that single token to its bare profile fields and never
//! aborts the bulk fetch.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::{Map, Value};
use tracing::{info, warn};

use crate::adapters::client::{build_client, ensure_success, DEFAULT_TIMEOUT_SECS};
use crate::domain::standardize::SOURCE_DEXSCREENER;
use crate::domain::token::RawToken;
use crate::ports::source::{SourceError, TokenSource};

/// Pair-detail fields merged into each bulk-listing record
const ENRICHMENT_KEYS: [&str; 5] = ["priceUsd", "volume", "liquidity", "marketCap", "priceChange"];

/// DexScreener listing + pair-detail client
#[derive(Debug, Clone)]
pub struct DexScreenerClient {
    base_url: String,
    http: Client,
}

impl DexScreenerClient {
    /// Create a client against the given API base URL
    pub fn new(base_url: impl Into<String>) -> Result<Self, SourceError> {
        Self::with_timeout(base_url, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Create a client with a custom request timeout
    pub fn with_timeout(
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, SourceError> {
        Ok(Self {
            base_url: base_url.into(),
            http: build_client(timeout)?,
        })
    }

    async fn fetch(&self) -> Result<Vec<RawToken>, SourceError> {
        let url = format!("{}/token-profiles/latest/v1", self.base_url);
        let response = self.http.get(&url).send().await?;
        ensure_success(&response)?;

        let profiles: Vec<Value> = response.json().await?;
        let mut tokens = Vec::with_capacity(profiles.len());

        for profile in profiles {
            let Some(mut fields) = profile.as_object().cloned() else {
                continue;
            };

            let chain_id = string_field(&fields, "chainId");
            let address = string_field(&fields, "tokenAddress");

            if !chain_id.is_empty() && !address.is_empty() {
                match self.fetch_pair_details(&chain_id, &address).await {
                    Ok(details) => merge_pair_details(&mut fields, details),
                    Err(e) => {
                        // Partial enrichment: the profile still flows through
                        warn!(address = %address, error = %e, "pair-detail lookup failed");
                    }
                }
            }

            tokens.push(RawToken::new(SOURCE_DEXSCREENER, fields));
        }

        info!(count = tokens.len(), "fetched tokens from dexscreener");
        Ok(tokens)
    }

    /// Fetch pair details for one token and reduce them to the enrichment
    /// field set taken from the first listed pair
    pub async fn fetch_pair_details(
        &self,
        chain_id: &str,
        token_address: &str,
    ) -> Result<Map<String, Value>, SourceError> {
        let url = format!(
            "{}/token-pairs/v1/{}/{}",
            self.base_url, chain_id, token_address
        );
        let response = self.http.get(&url).send().await?;
        ensure_success(&response)?;

        let pairs: Vec<Value> = response.json().await?;
        Ok(extract_pair_fields(pairs.first()))
    }
}

fn string_field(fields: &Map<String, Value>, key: &str) -> String {
    fields
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

/// Reduce one pair object to the fields the standardizer consumes: base-token
/// name/symbol plus price, volume, liquidity, market cap and price change.
/// `None` (an empty pair listing) yields an empty map.
fn extract_pair_fields(pair: Option<&Value>) -> Map<String, Value> {
    let mut out = Map::new();
    let Some(pair) = pair else {
        return out;
    };

    if let Some(base) = pair.get("baseToken") {
        for key in ["name", "symbol"] {
            if let Some(value) = base.get(key) {
                out.insert(key.to_string(), value.clone());
            }
        }
    }

    for key in ENRICHMENT_KEYS {
        if let Some(value) = pair.get(key) {
            out.insert(key.to_string(), value.clone());
        }
    }

    out
}

/// Overlay pair-detail fields onto the bulk-listing record
fn merge_pair_details(fields: &mut Map<String, Value>, details: Map<String, Value>) {
    for (key, value) in details {
        fields.insert(key, value);
    }
}

#[async_trait]
impl TokenSource for DexScreenerClient {
    fn name(&self) -> &str {
        SOURCE_DEXSCREENER
    }

    async fn fetch_tokens(&self) -> Result<Vec<RawToken>, SourceError> {
        self.fetch().await
    }
}
