//! Configuration loading and management for the reconciliation engine.
//!
//! This module provides functionality to load comparison thresholds,
//! supplementation limits and column keyword tables from YAML files.
//! [`ReconConfig::default`] carries the same values as `config/default`.
//!
//! # Example
//!
//! ```no_run
//! use benefits_recon::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap().into_config();
//! println!("Tolerance: ${}", config.comparison.tolerance);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    ComparisonConfig, FallbackConfig, KeywordTables, KeywordsFile, ReconConfig, ReconcileFile,
    ReportConfig, SupplementConfig,
};
