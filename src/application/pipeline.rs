//! Aggregation Pipeline
//!
//! One linear pass per invocation, no state survives between runs:
//! fetch every source -> standardize -> filter -> score & enrich -> rank.
//! Partial failures degrade the affected token or source and are counted in
//! the run report; the pipeline always returns a (possibly empty) ranked
//! list, never an error.

use std::cmp::Ordering;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{info, warn};

use crate::adapters::{DexScreenerClient, PumpFunClient, RugCheckClient};
use crate::config::{Config, ConfigError};
use crate::domain::scoring::{extract_features, LinearScorer, UpsideScorer};
use crate::domain::standardize::standardize;
use crate::domain::suspicion::is_suspicious;
use crate::domain::token::{CanonicalToken, ScoredToken};
use crate::ports::source::{RugCheckPort, SourceError, TokenSource};

/// Independently toggleable filter stage rules
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FilterRule {
    /// Keep only tokens whose chain is "solana" or "sol"
    Chain,
    /// Drop tokens flagged by the suspicion heuristics
    Suspicion,
    /// Drop tokens whose RugCheck score is absent or below the threshold
    RugThreshold(f64),
}

/// Degradation counters for one pipeline run
#[derive(Debug, Clone, Default, Serialize)]
pub struct PipelineReport {
    /// Tokens fetched per source, in registration order
    pub fetched: Vec<(String, usize)>,
    /// Sources whose bulk fetch failed entirely
    pub failed_sources: Vec<String>,
    /// Records from unrecognized providers, dropped at standardization
    pub degenerate_records: usize,
    /// Tokens dropped by the chain rule
    pub chain_filtered: usize,
    /// Tokens dropped by the suspicion rule
    pub suspicion_filtered: usize,
    /// Tokens dropped by the rug-score gate
    pub rug_gated: usize,
    /// Per-token RugCheck lookups that failed (token kept, score absent)
    pub rug_lookup_failures: usize,
}

/// Result of one aggregation pass
#[derive(Debug, Clone, Serialize)]
pub struct PipelineRun {
    /// Ranked tokens, descending by upside score, ties in input order
    pub tokens: Vec<ScoredToken>,
    /// Degradation counters
    pub report: PipelineReport,
    /// When the pass finished
    pub completed_at: DateTime<Utc>,
}

/// Errors raised while assembling a pipeline, before any network call
#[derive(Debug, thiserror::Error)]
pub enum PipelineBuildError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("failed to build provider client: {0}")]
    Client(#[from] SourceError),
}

/// The fetch -> standardize -> filter -> score -> rank orchestrator
pub struct AggregationPipeline {
    sources: Vec<Box<dyn TokenSource>>,
    rugcheck: Box<dyn RugCheckPort>,
    scorer: Box<dyn UpsideScorer>,
    filters: Vec<FilterRule>,
}

impl AggregationPipeline {
    /// Build the full pipeline from validated configuration. Registration
    /// order (pump.fun first, then DexScreener) fixes the concatenation
    /// order of raw batches.
    pub fn from_config(config: &Config) -> Result<Self, PipelineBuildError> {
        config.validate()?;

        let timeout = Duration::from_secs(config.sources.timeout_secs);
        let pump_fun = PumpFunClient::with_timeout(config.sources.get_pump_fun_url(), timeout)?;
        let dexscreener =
            DexScreenerClient::with_timeout(config.sources.get_dexscreener_url(), timeout)?;
        let rugcheck = RugCheckClient::with_timeout(config.sources.get_rugcheck_url(), timeout)?;

        let mut filters = Vec::new();
        if config.filters.solana_only {
            filters.push(FilterRule::Chain);
        }
        if config.filters.drop_suspicious {
            filters.push(FilterRule::Suspicion);
        }
        if config.filters.rug_score_gate {
            filters.push(FilterRule::RugThreshold(config.filters.rug_score_threshold));
        }

        Ok(Self::new(
            vec![Box::new(pump_fun), Box::new(dexscreener)],
            Box::new(rugcheck),
            Box::new(LinearScorer::default()),
            filters,
        ))
    }

    /// Assemble a pipeline from parts; used directly by tests and by
    /// callers that swap in a different scoring model
    pub fn new(
        sources: Vec<Box<dyn TokenSource>>,
        rugcheck: Box<dyn RugCheckPort>,
        scorer: Box<dyn UpsideScorer>,
        filters: Vec<FilterRule>,
    ) -> Self {
        Self {
            sources,
            rugcheck,
            scorer,
            filters,
        }
    }

    /// Run one aggregation pass. Never fails: adapter and enrichment
    /// failures degrade into report counters.
    pub async fn run(&self) -> PipelineRun {
        let mut report = PipelineReport::default();

        // Fetch: concatenate raw batches in registration order, no
        // cross-source dedup
        let mut raw = Vec::new();
        for source in &self.sources {
            match source.fetch_tokens().await {
                Ok(batch) => {
                    report.fetched.push((source.name().to_string(), batch.len()));
                    raw.extend(batch);
                }
                Err(e) => {
                    warn!(source = source.name(), error = %e, "source fetch failed");
                    report.failed_sources.push(source.name().to_string());
                }
            }
        }

        // Standardize, preserving input order
        let mut canonical: Vec<CanonicalToken> = Vec::with_capacity(raw.len());
        for token in &raw {
            match standardize(token) {
                Some(t) => canonical.push(t),
                None => {
                    warn!(source = %token.source, "unrecognized source, dropping record");
                    report.degenerate_records += 1;
                }
            }
        }

        // Filter: chain and suspicion rules run pre-enrichment
        if self.filters.contains(&FilterRule::Chain) {
            let before = canonical.len();
            canonical.retain(|t| t.is_solana());
            report.chain_filtered = before - canonical.len();
        }

        if self.filters.contains(&FilterRule::Suspicion) {
            let before = canonical.len();
            canonical.retain(|t| !is_suspicious(t));
            report.suspicion_filtered = before - canonical.len();
        }

        // Score & enrich
        let mut scored = Vec::with_capacity(canonical.len());
        for token in canonical {
            let upside_score = self.scorer.score(&extract_features(&token));
            let rug_score = self.lookup_rug_score(&token, &mut report).await;
            scored.push(ScoredToken {
                token,
                upside_score,
                rug_score,
            });
        }

        // Rug-score gate runs after enrichment, once scores are known
        if let Some(threshold) = self.rug_threshold() {
            let before = scored.len();
            scored.retain(|t| t.rug_score.is_some_and(|s| s >= threshold));
            report.rug_gated = before - scored.len();
        }

        // Rank: stable descending sort preserves input order on ties
        scored.sort_by(|a, b| {
            b.upside_score
                .partial_cmp(&a.upside_score)
                .unwrap_or(Ordering::Equal)
        });

        info!(
            ranked = scored.len(),
            degenerate = report.degenerate_records,
            failed_sources = report.failed_sources.len(),
            "aggregation pass complete"
        );

        PipelineRun {
            tokens: scored,
            report,
            completed_at: Utc::now(),
        }
    }

    /// Attach the RugCheck score for one token. Tokens without an address
    /// never trigger a lookup; a failed lookup degrades to an absent score.
    async fn lookup_rug_score(
        &self,
        token: &CanonicalToken,
        report: &mut PipelineReport,
    ) -> Option<f64> {
        if !token.has_address() {
            return None;
        }
        match self.rugcheck.fetch_report(&token.address).await {
            Ok(rug) => rug.score,
            Err(e) => {
                warn!(address = %token.address, error = %e, "rugcheck lookup failed");
                report.rug_lookup_failures += 1;
                None
            }
        }
    }

    fn rug_threshold(&self) -> Option<f64> {
        self.filters.iter().find_map(|rule| match rule {
            FilterRule::RugThreshold(t) => Some(*t),
            _ => None,
        })
    }
}
