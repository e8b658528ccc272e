//! Source Ports
//!
//! Traits implemented by the provider HTTP adapters. Adapters surface their
//! failures as [`SourceError`]; the pipeline is what degrades a failure into
//! an empty contribution, so one dead provider never aborts a batch.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::risk::RugReport;
use crate::domain::token::RawToken;

/// Errors surfaced by provider adapters
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected status {status} from {url}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },

    #[error("parse error: {0}")]
    Parse(String),
}

/// Bulk token-listing provider
#[async_trait]
pub trait TokenSource: Send + Sync {
    /// Provider name used for logging and run reports
    fn name(&self) -> &str;

    /// Fetch the provider's current token listing, each record tagged with
    /// this provider's source name
    async fn fetch_tokens(&self) -> Result<Vec<RawToken>, SourceError>;
}

/// Per-token contract-safety lookup
#[async_trait]
pub trait RugCheckPort: Send + Sync {
    /// Fetch the safety report for one contract address
    async fn fetch_report(&self, address: &str) -> Result<RugReport, SourceError>;
}
