//! Application Layer - Pipeline orchestration
//!
//! Wires the source adapters, standardizer, filter policy, scorer and
//! RugCheck enrichment into a single linear aggregation pass.

pub mod pipeline;

pub use pipeline::{
    AggregationPipeline, FilterRule, PipelineBuildError, PipelineReport, PipelineRun,
};
