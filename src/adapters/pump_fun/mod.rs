//! pump.fun Adapter
//!
//! HTTP client for the pump.fun token-listing endpoint. The listing lives
//! under a top-level `data` key; every record is tagged with its source
//! before being handed to the pipeline.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::info;

use crate::adapters::client::{build_client, ensure_success, DEFAULT_TIMEOUT_SECS};
use crate::domain::standardize::SOURCE_PUMP_FUN;
use crate::domain::token::RawToken;
use crate::ports::source::{SourceError, TokenSource};

/// pump.fun token-listing client
#[derive(Debug, Clone)]
pub struct PumpFunClient {
    base_url: String,
    http: Client,
}

impl PumpFunClient {
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
        let url = format!("{}/tokens", self.base_url);
        let response = self.http.get(&url).send().await?;
        ensure_success(&response)?;

        let body: Value = response.json().await?;
        let tokens = parse_token_list(&body);
        info!(count = tokens.len(), "fetched tokens from pump.fun");
        Ok(tokens)
    }
}

/// Pull the token array out of the listing body and tag each record.
/// A missing or malformed `data` key yields an empty batch.
fn parse_token_list(body: &Value) -> Vec<RawToken> {
    body.get("data")
        .and_then(Value::as_array)
        .map(|entries| {
            entries
                .iter()
                .filter_map(Value::as_object)
                .map(|fields| RawToken::new(SOURCE_PUMP_FUN, fields.clone()))
                .collect()
        })
        .unwrap_or_default()
}

#[async_trait]
impl TokenSource for PumpFunClient {
    fn name(&self) -> &str {
        SOURCE_PUMP_FUN
    }

    async fn fetch_tokens(&self) -> Result<Vec<RawToken>, SourceError> {
        self.fetch().await
    }
}
