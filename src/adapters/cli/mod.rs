//! CLI Adapter
//!
//! Command-line interface for the scout pipeline.
//! Uses clap derive macros for argument parsing.

mod commands;

pub use commands::{CheckCmd, Command, ScanCmd, ScoutApp};
