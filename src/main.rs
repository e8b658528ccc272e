//! Upside Scout - Token Discovery and Scoring Pipeline
//!
//! Polls pump.fun and DexScreener for fresh token listings, scores them and
//! prints a ranked overview with RugCheck safety annotations.

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use upside_scout::adapters::cli::{CheckCmd, Command, ScanCmd, ScoutApp};
use upside_scout::adapters::RugCheckClient;
use upside_scout::application::AggregationPipeline;
use upside_scout::config::load_config;
use upside_scout::domain::token::ScoredToken;
use upside_scout::ports::source::RugCheckPort;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (URL overrides go here, not in the TOML)
    dotenvy::dotenv().ok();

    let app = ScoutApp::parse();
    init_logging(app.verbose, app.debug);

    match app.command {
        Command::Scan(cmd) => scan_command(cmd).await,
        Command::Check(cmd) => check_command(cmd).await,
    }
}

fn init_logging(verbose: bool, debug: bool) {
    let filter = if debug {
        EnvFilter::new("debug")
    } else if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::new("warn")
    };

    fmt().with_env_filter(filter).init();
}

async fn scan_command(cmd: ScanCmd) -> Result<()> {
    let config = load_config(&cmd.config).context("Failed to load configuration")?;

    let pipeline =
        AggregationPipeline::from_config(&config).context("Failed to build pipeline")?;

    tracing::info!("starting aggregation pass");
    let mut run = pipeline.run().await;

    if let Some(limit) = cmd.limit {
        run.tokens.truncate(limit);
    }

    if cmd.json {
        println!("{}", serde_json::to_string_pretty(&run)?);
    } else {
        print_ranked_table(&run.tokens);
        let report = &run.report;
        if !report.failed_sources.is_empty() {
            eprintln!("warning: sources failed: {}", report.failed_sources.join(", "));
        }
        if report.rug_lookup_failures > 0 {
            eprintln!(
                "warning: {} rugcheck lookups failed",
                report.rug_lookup_failures
            );
        }
    }

    Ok(())
}

fn print_ranked_table(tokens: &[ScoredToken]) {
    if tokens.is_empty() {
        println!("No tokens found.");
        return;
    }

    println!(
        "{:<4} {:<24} {:<10} {:<10} {:>12} {:>10}",
        "#", "Name", "Symbol", "Chain", "Upside", "Rug"
    );
    for (rank, scored) in tokens.iter().enumerate() {
        let rug = scored
            .rug_score
            .map(|s| format!("{s:.0}"))
            .unwrap_or_else(|| "N/A".to_string());
        println!(
            "{:<4} {:<24} {:<10} {:<10} {:>12.2} {:>10}",
            rank + 1,
            truncate(&scored.token.name, 24),
            truncate(&scored.token.symbol, 10),
            truncate(&scored.token.chain, 10),
            scored.upside_score,
            rug
        );
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        s.chars().take(max.saturating_sub(1)).collect::<String>() + "…"
    }
}

async fn check_command(cmd: CheckCmd) -> Result<()> {
    let config = load_config(&cmd.config).context("Failed to load configuration")?;

    let rugcheck = RugCheckClient::new(config.sources.get_rugcheck_url())
        .context("Failed to create RugCheck client")?;

    let report = rugcheck
        .fetch_report(&cmd.address)
        .await
        .context("RugCheck lookup failed")?;

    match report.score {
        Some(score) => println!("Rug score for {}: {:.1}", cmd.address, score),
        None => println!("No rug score available for {}", cmd.address),
    }

    if report.risks.is_empty() {
        println!("No risks reported.");
    } else {
        println!("\nRisks:");
        for (name, risk) in &report.risks {
            println!(
                "  [{:<6}] {} (score {:.0}): {}",
                risk.level, name, risk.score, risk.description
            );
        }
    }

    Ok(())
}
