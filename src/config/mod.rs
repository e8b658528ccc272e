//! Configuration Layer
//!
//! TOML-backed configuration with validation and environment overrides.

pub mod loader;

pub use loader::{
    load_config, Config, ConfigError, FiltersSection, LoggingSection, SourcesSection,
};
