//! Adapters Layer - External System Implementations
//!
//! Implementations of the port traits:
//! - pump.fun: token-listing API client
//! - DexScreener: token-profile listing + per-token pair-detail enrichment
//! - RugCheck: contract-safety report client
//! - CLI: command-line interface handlers

pub mod client;
pub mod pump_fun;
pub mod dexscreener;
pub mod rugcheck;
pub mod cli;

pub use cli::ScoutApp;
pub use dexscreener::DexScreenerClient;
pub use pump_fun::PumpFunClient;
pub use rugcheck::RugCheckClient;
