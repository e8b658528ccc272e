//! CLI Command Definitions
//!
//! Argument structures for the scout CLI.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Upside Scout - token discovery and upside-scoring pipeline
#[derive(Parser, Debug)]
#[command(
    name = "upside-scout",
    version = env!("CARGO_PKG_VERSION"),
    author = env!("CARGO_PKG_AUTHORS"),
    about = "Aggregate, filter and rank fresh token listings by upside score",
    long_about = "Upside Scout polls pump.fun and DexScreener for fresh token listings, \
                  normalizes the provider payloads, drops suspicious entries, attaches \
                  RugCheck safety scores and prints a ranked list."
)]
pub struct ScoutApp {
    /// The command to execute
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run one aggregation pass and print the ranked tokens
    Scan(ScanCmd),

    /// Fetch the RugCheck report for a single token address
    Check(CheckCmd),
}

/// Run one aggregation pass
#[derive(Parser, Debug)]
pub struct ScanCmd {
    /// Path to configuration file
    #[arg(short, long, value_name = "FILE", default_value = "config/default.toml")]
    pub config: PathBuf,

    /// Print machine-readable JSON instead of the table
    #[arg(long)]
    pub json: bool,

    /// Only print the top N ranked tokens
    #[arg(short, long, value_name = "N")]
    pub limit: Option<usize>,
}

/// Inspect one token's RugCheck report
#[derive(Parser, Debug)]
pub struct CheckCmd {
    /// Path to configuration file
    #[arg(short, long, value_name = "FILE", default_value = "config/default.toml")]
    pub config: PathBuf,

    /// Token contract/mint address
    pub address: String,
}
