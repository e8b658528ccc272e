//! Recording test doubles for the source ports.
//!
//! Used by unit tests and the integration suite; deterministic, no network.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::domain::risk::RugReport;
use crate::domain::token::RawToken;
use crate::ports::source::{RugCheckPort, SourceError, TokenSource};

/// Token source serving a fixed batch, or failing on demand
pub struct StaticSource {
    name: String,
    tokens: Vec<RawToken>,
    fail: bool,
    calls: Arc<Mutex<u32>>,
}

impl StaticSource {
    /// Source that returns the given tokens on every fetch
    pub fn new(name: &str, tokens: Vec<RawToken>) -> Self {
        Self {
            name: name.to_string(),
            tokens,
            fail: false,
            calls: Arc::new(Mutex::new(0)),
        }
    }

    /// Source whose every fetch fails
    pub fn failing(name: &str) -> Self {
        Self {
            name: name.to_string(),
            tokens: Vec::new(),
            fail: true,
            calls: Arc::new(Mutex::new(0)),
        }
    }

    /// Number of fetches made against this source
    pub fn call_count(&self) -> u32 {
        *self.calls.lock().unwrap()
    }
}

#[async_trait]
impl TokenSource for StaticSource {
    fn name(&self) -> &str {
        &self.name
    }

    async fn fetch_tokens(&self) -> Result<Vec<RawToken>, SourceError> {
        *self.calls.lock().unwrap() += 1;
        if self.fail {
            return Err(SourceError::Parse(format!(
                "{}: simulated fetch failure",
                self.name
            )));
        }
        Ok(self.tokens.clone())
    }
}

/// RugCheck double that records looked-up addresses and serves canned reports
#[derive(Default)]
pub struct StaticRugCheck {
    reports: HashMap<String, RugReport>,
    fail: bool,
    lookups: Arc<Mutex<Vec<String>>>,
}

impl StaticRugCheck {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to register a report for an address
    pub fn with_report(mut self, address: &str, report: RugReport) -> Self {
        self.reports.insert(address.to_string(), report);
        self
    }

    /// Double whose every lookup fails
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// Addresses that were looked up, in order
    pub fn lookups(&self) -> Vec<String> {
        self.lookups.lock().unwrap().clone()
    }

    /// Live handle to the lookup log, usable after the mock is moved into a
    /// pipeline
    pub fn lookup_log(&self) -> Arc<Mutex<Vec<String>>> {
        Arc::clone(&self.lookups)
    }
}

#[async_trait]
impl RugCheckPort for StaticRugCheck {
    async fn fetch_report(&self, address: &str) -> Result<RugReport, SourceError> {
        self.lookups.lock().unwrap().push(address.to_string());
        if self.fail {
            return Err(SourceError::Parse("simulated rugcheck failure".into()));
        }
        Ok(self
            .reports
            .get(address)
            .cloned()
            .unwrap_or_else(RugReport::empty))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Map;

    #[tokio::test]
    async fn test_static_source_serves_and_counts() {
        let source = StaticSource::new("pump.fun", vec![RawToken::new("pump.fun", Map::new())]);
        let batch = source.fetch_tokens().await.unwrap();
        assert_eq!(batch.len(), 1);
        assert_eq!(source.call_count(), 1);
    }

    #[tokio::test]
    async fn test_failing_source_errors() {
        let source = StaticSource::failing("dexscreener");
        assert!(source.fetch_tokens().await.is_err());
        assert_eq!(source.call_count(), 1);
    }

    #[tokio::test]
    async fn test_static_rugcheck_records_lookups() {
        let rugcheck = StaticRugCheck::new().with_report(
            "addr1",
            RugReport {
                score: Some(80.0),
                risks: Default::default(),
            },
        );

        let report = rugcheck.fetch_report("addr1").await.unwrap();
        assert_eq!(report.score, Some(80.0));

        // Unknown address degrades to an empty report
        let report = rugcheck.fetch_report("addr2").await.unwrap();
        assert!(report.score.is_none());

        assert_eq!(rugcheck.lookups(), vec!["addr1", "addr2"]);
    }
}
