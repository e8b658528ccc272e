//! Aggregation Pipeline Integration Tests
//!
//! End-to-end runs over the full fetch -> standardize -> filter -> score ->
//! rank pass, wired with recording test doubles instead of live providers.
//! All tests are deterministic (no real network calls).

use serde_json::{json, Map, Value};

use upside_scout::application::{AggregationPipeline, FilterRule};
use upside_scout::domain::risk::RugReport;
use upside_scout::domain::scoring::LinearScorer;
use upside_scout::domain::standardize::{SOURCE_DEXSCREENER, SOURCE_PUMP_FUN};
use upside_scout::domain::token::RawToken;
use upside_scout::ports::mocks::{StaticRugCheck, StaticSource};
use upside_scout::ports::source::TokenSource;

// ============================================================================
// Test Fixtures
// ============================================================================

fn raw(source: &str, value: Value) -> RawToken {
    RawToken::new(source, value.as_object().cloned().unwrap_or_else(Map::new))
}

fn build_pipeline(
    sources: Vec<Box<dyn TokenSource>>,
    rugcheck: StaticRugCheck,
    filters: Vec<FilterRule>,
) -> AggregationPipeline {
    AggregationPipeline::new(
        sources,
        Box::new(rugcheck),
        Box::new(LinearScorer::default()),
        filters,
    )
}

/// A pump.fun listing entry with flat metrics, as the provider reports them
fn pump_fun_listing() -> RawToken {
    raw(
        SOURCE_PUMP_FUN,
        json!({
            "name": "Dogwifhat",
            "symbol": "WIF",
            "address": "wif-mint",
            "chain": "Solana",
            "volume": 100.0,
            "priceChange": 10.0,
            "liquidity": 50.0
        }),
    )
}

/// A DexScreener profile already enriched with nested pair-detail metrics
fn dexscreener_listing() -> RawToken {
    raw(
        SOURCE_DEXSCREENER,
        json!({
            "tokenAddress": "pepe-addr",
            "chainId": "solana",
            "name": "Pepe",
            "symbol": "PEPE",
            "priceUsd": "0.0012",
            "marketCap": 500000.0,
            "volume": {"h1": 10.0, "h24": 240.0},
            "priceChange": {"h1": 20.0, "h24": 45.0},
            "liquidity": {"usd": 80.0}
        }),
    )
}

// ============================================================================
// Scenarios
// ============================================================================

#[tokio::test]
async fn scan_standardizes_scores_and_ranks_across_sources() {
    let pump = StaticSource::new("pump.fun", vec![pump_fun_listing()]);
    let dex = StaticSource::new("dexscreener", vec![dexscreener_listing()]);

    let run = build_pipeline(
        vec![Box::new(pump), Box::new(dex)],
        StaticRugCheck::new(),
        vec![],
    )
    .run()
    .await;

    assert_eq!(run.tokens.len(), 2);

    // Pepe: 20*0.6 + 240*0.3 + 80*0.1 = 92.0 ranks above
    // Wif:  10*0.6 + 100*0.3 + 50*0.1 = 41.0
    assert_eq!(run.tokens[0].token.symbol, "PEPE");
    assert_eq!(run.tokens[0].upside_score, 92.0);
    assert_eq!(run.tokens[1].token.symbol, "WIF");
    assert_eq!(run.tokens[1].upside_score, 41.0);

    // Chain is lower-cased at standardization
    assert_eq!(run.tokens[1].token.chain, "solana");

    assert_eq!(
        run.report.fetched,
        vec![("pump.fun".to_string(), 1), ("dexscreener".to_string(), 1)]
    );
}

#[tokio::test]
async fn token_without_address_never_hits_rugcheck() {
    let no_address = raw(
        SOURCE_PUMP_FUN,
        json!({"name": "Ghost", "chain": "solana", "volume": 5.0}),
    );
    let source = StaticSource::new("pump.fun", vec![no_address]);
    let rugcheck = StaticRugCheck::new();
    let lookup_log = rugcheck.lookup_log();

    let run = build_pipeline(vec![Box::new(source)], rugcheck, vec![])
        .run()
        .await;

    assert_eq!(run.tokens.len(), 1);
    assert_eq!(run.tokens[0].rug_score, None);
    assert!(lookup_log.lock().unwrap().is_empty());
}

#[tokio::test]
async fn rugcheck_outage_degrades_scores_not_the_batch() {
    let source = StaticSource::new(
        "pump.fun",
        vec![pump_fun_listing(), dexscreener_listing_as_pump()],
    );

    let run = build_pipeline(vec![Box::new(source)], StaticRugCheck::failing(), vec![])
        .run()
        .await;

    assert_eq!(run.tokens.len(), 2);
    assert!(run.tokens.iter().all(|t| t.rug_score.is_none()));
    assert_eq!(run.report.rug_lookup_failures, 2);
}

fn dexscreener_listing_as_pump() -> RawToken {
    raw(
        SOURCE_PUMP_FUN,
        json!({"name": "Other", "symbol": "OTH", "address": "oth-mint", "chain": "solana"}),
    )
}

#[tokio::test]
async fn unenriched_dexscreener_profile_still_ranks() {
    // Simulates a failed pair-detail lookup: the profile carries no price,
    // volume or liquidity fields but must flow through with defaults
    let bare_profile = raw(
        SOURCE_DEXSCREENER,
        json!({
            "tokenAddress": "bare-addr",
            "chainId": "solana",
            "icon": "https://cdn.example/icon.png",
            "description": "profile only"
        }),
    );
    let source = StaticSource::new("dexscreener", vec![bare_profile]);

    let run = build_pipeline(vec![Box::new(source)], StaticRugCheck::new(), vec![])
        .run()
        .await;

    assert_eq!(run.tokens.len(), 1);
    let token = &run.tokens[0];
    assert_eq!(token.token.name, "Unknown");
    assert_eq!(token.token.price_usd, 0.0);
    assert_eq!(token.upside_score, 0.0);
}

#[tokio::test]
async fn full_policy_stack_chain_suspicion_and_rug_gate() {
    let keeper = raw(
        SOURCE_PUMP_FUN,
        json!({
            "name": "Keeper", "symbol": "KEEP", "address": "keep-addr",
            "chain": "solana", "volume": 500.0, "priceChange": 5.0, "liquidity": 1000.0
        }),
    );
    let wrong_chain = raw(
        SOURCE_DEXSCREENER,
        json!({"name": "EthThing", "tokenAddress": "eth-addr", "chainId": "ethereum"}),
    );
    let wash_trader = raw(
        SOURCE_PUMP_FUN,
        json!({
            "name": "Wash", "symbol": "WASH", "address": "wash-addr",
            "chain": "sol", "volume": 5000.0, "priceChange": 0.0, "liquidity": 0.5
        }),
    );
    let low_rug = raw(
        SOURCE_PUMP_FUN,
        json!({
            "name": "Rugged", "symbol": "RUG", "address": "rug-addr",
            "chain": "solana", "volume": 10.0, "priceChange": 1.0, "liquidity": 100.0
        }),
    );

    let rugcheck = StaticRugCheck::new()
        .with_report(
            "keep-addr",
            RugReport {
                score: Some(90.0),
                risks: Default::default(),
            },
        )
        .with_report(
            "rug-addr",
            RugReport {
                score: Some(10.0),
                risks: Default::default(),
            },
        );

    let source = StaticSource::new(
        "pump.fun",
        vec![keeper, wrong_chain, wash_trader, low_rug],
    );
    let run = build_pipeline(
        vec![Box::new(source)],
        rugcheck,
        vec![
            FilterRule::Chain,
            FilterRule::Suspicion,
            FilterRule::RugThreshold(50.0),
        ],
    )
    .run()
    .await;

    assert_eq!(run.tokens.len(), 1);
    assert_eq!(run.tokens[0].token.symbol, "KEEP");
    assert_eq!(run.report.chain_filtered, 1);
    assert_eq!(run.report.suspicion_filtered, 1);
    assert_eq!(run.report.rug_gated, 1);
}

#[tokio::test]
async fn empty_world_produces_empty_ranked_list() {
    let run = build_pipeline(
        vec![
            Box::new(StaticSource::failing("pump.fun")),
            Box::new(StaticSource::failing("dexscreener")),
        ],
        StaticRugCheck::new(),
        vec![],
    )
    .run()
    .await;

    assert!(run.tokens.is_empty());
    assert_eq!(
        run.report.failed_sources,
        vec!["pump.fun".to_string(), "dexscreener".to_string()]
    );
}
