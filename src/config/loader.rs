//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading reconciliation
//! configuration from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{ReconError, ReconResult};

use super::types::{KeywordTables, KeywordsFile, ReconConfig, ReconcileFile};

/// Loads and validates reconciliation configuration.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// ├── reconcile.yaml   # Thresholds, limits and report settings
/// └── keywords.yaml    # Column classification keyword tables
/// ```
///
/// # Example
///
/// ```no_run
/// use benefits_recon::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default")?;
/// println!("Tolerance: ${}", loader.config().comparison.tolerance);
/// # Ok::<(), benefits_recon::error::ReconError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: ReconConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Returns an error if either file is missing, contains invalid YAML,
    /// or holds values the engine cannot use.
    pub fn load<P: AsRef<Path>>(path: P) -> ReconResult<Self> {
        let path = path.as_ref();

        let reconcile = Self::load_yaml::<ReconcileFile>(&path.join("reconcile.yaml"))?;
        let keywords = Self::load_yaml::<KeywordsFile>(&path.join("keywords.yaml"))?;

        let config = ReconConfig::new(reconcile, keywords.keywords);
        Self::validate(&config)?;

        Ok(Self { config })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> ReconResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| ReconError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| ReconError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    fn validate(config: &ReconConfig) -> ReconResult<()> {
        if config.comparison.tolerance.is_sign_negative() {
            return Err(invalid("comparison.tolerance", "must not be negative"));
        }
        if config.comparison.high_mismatch_threshold < config.comparison.tolerance {
            return Err(invalid(
                "comparison.high_mismatch_threshold",
                "must not be below the tolerance",
            ));
        }
        if config.supplement.max_discrepancies == 0 {
            return Err(invalid("supplement.max_discrepancies", "must be positive"));
        }
        if config.fallback.roster_size == 0 {
            return Err(invalid("fallback.roster_size", "must be positive"));
        }
        Self::validate_keywords(&config.keywords)
    }

    fn validate_keywords(keywords: &KeywordTables) -> ReconResult<()> {
        let tables = [
            ("keywords.identity", &keywords.identity),
            ("keywords.preferred_identity", &keywords.preferred_identity),
            ("keywords.name", &keywords.name),
            ("keywords.pay_amount", &keywords.pay_amount),
            ("keywords.deduction_items", &keywords.deduction_items),
            ("keywords.deduction_total", &keywords.deduction_total),
            ("keywords.carrier_premium", &keywords.carrier_premium),
        ];

        for (field, table) in tables {
            if table.is_empty() {
                return Err(invalid(field, "must list at least one keyword"));
            }
            if table.iter().any(|w| w.trim().is_empty()) {
                return Err(invalid(field, "keywords must not be blank"));
            }
            if table.iter().any(|w| *w != w.to_lowercase()) {
                return Err(invalid(field, "keywords must be lower-case"));
            }
        }
        Ok(())
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &ReconConfig {
        &self.config
    }

    /// Consumes the loader and returns the configuration.
    pub fn into_config(self) -> ReconConfig {
        self.config
    }

    /// Returns the keyword tables.
    pub fn keywords(&self) -> &KeywordTables {
        &self.config.keywords
    }
}

fn invalid(field: &str, message: &str) -> ReconError {
    ReconError::InvalidConfig {
        field: field.to_string(),
        message: message.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::path::PathBuf;

    fn config_path() -> &'static str {
        "./config/default"
    }

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "benefits-recon-{}-{}",
            name,
            uuid::Uuid::new_v4()
        ));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn copy_defaults_into(dir: &Path) {
        for file in ["reconcile.yaml", "keywords.yaml"] {
            fs::copy(Path::new(config_path()).join(file), dir.join(file)).unwrap();
        }
    }

    #[test]
    fn test_load_shipped_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.config().comparison.tolerance, Decimal::new(500, 2));
        assert_eq!(loader.config().supplement.max_discrepancies, 50);
    }

    #[test]
    fn test_shipped_configuration_matches_defaults() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        assert_eq!(loader.config(), &ReconConfig::default());
        assert_eq!(loader.keywords(), &KeywordTables::default());
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = ConfigLoader::load("/nonexistent/path");

        match result {
            Err(ReconError::ConfigNotFound { path }) => {
                assert!(path.contains("reconcile.yaml"));
            }
            other => panic!("Expected ConfigNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_malformed_yaml_returns_parse_error() {
        let dir = scratch_dir("malformed");
        copy_defaults_into(&dir);
        fs::write(dir.join("keywords.yaml"), "keywords: [unclosed").unwrap();

        match ConfigLoader::load(&dir) {
            Err(ReconError::ConfigParseError { path, .. }) => {
                assert!(path.contains("keywords.yaml"));
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_negative_tolerance_is_rejected() {
        let dir = scratch_dir("negative");
        copy_defaults_into(&dir);
        let reconcile = fs::read_to_string(dir.join("reconcile.yaml"))
            .unwrap()
            .replace("tolerance: \"5.00\"", "tolerance: \"-1.00\"");
        fs::write(dir.join("reconcile.yaml"), reconcile).unwrap();

        match ConfigLoader::load(&dir) {
            Err(ReconError::InvalidConfig { field, .. }) => {
                assert_eq!(field, "comparison.tolerance");
            }
            other => panic!("Expected InvalidConfig, got {:?}", other),
        }

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_empty_keyword_table_is_rejected() {
        let mut keywords = KeywordTables::default();
        keywords.name.clear();

        match ConfigLoader::validate_keywords(&keywords) {
            Err(ReconError::InvalidConfig { field, .. }) => assert_eq!(field, "keywords.name"),
            other => panic!("Expected InvalidConfig, got {:?}", other),
        }
    }

    #[test]
    fn test_upper_case_keyword_is_rejected() {
        let mut keywords = KeywordTables::default();
        keywords.carrier_premium.push("Premium".to_string());

        assert!(ConfigLoader::validate_keywords(&keywords).is_err());
    }
}
