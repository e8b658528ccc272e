//! RugCheck Adapter
//!
//! HTTP client for the RugCheck token-report endpoint. Returns the overall
//! contract-safety score plus a per-risk breakdown keyed by risk name.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::adapters::client::{build_client, ensure_success, DEFAULT_TIMEOUT_SECS};
use crate::domain::risk::{RiskAssessment, RiskReport, RugReport};
use crate::ports::source::{RugCheckPort, SourceError};

/// RugCheck token-report client
#[derive(Debug, Clone)]
pub struct RugCheckClient {
    base_url: String,
    http: Client,
}

/// Wire shape of the report endpoint
#[derive(Debug, Deserialize)]
struct ReportResponse {
    score: Option<f64>,
    #[serde(default)]
    risks: Vec<RiskEntry>,
}

#[derive(Debug, Deserialize)]
struct RiskEntry {
    name: String,
    #[serde(default)]
    score: f64,
    #[serde(default)]
    description: String,
    #[serde(default)]
    level: String,
}

impl RugCheckClient {
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

    async fn fetch(&self, address: &str) -> Result<RugReport, SourceError> {
        let url = format!("{}/tokens/{}/report", self.base_url, address);
        let response = self.http.get(&url).send().await?;
        ensure_success(&response)?;

        let report: ReportResponse = response.json().await?;
        Ok(report.into())
    }
}

impl From<ReportResponse> for RugReport {
    fn from(response: ReportResponse) -> Self {
        let risks: RiskReport = response
            .risks
            .into_iter()
            .map(|r| {
                (
                    r.name,
                    RiskAssessment {
                        score: r.score,
                        description: r.description,
                        level: r.level,
                    },
                )
            })
            .collect();
        RugReport {
            score: response.score,
            risks,
        }
    }
}

#[async_trait]
impl RugCheckPort for RugCheckClient {
    async fn fetch_report(&self, address: &str) -> Result<RugReport, SourceError> {
        self.fetch(address).await
    }
}
