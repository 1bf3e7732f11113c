//! Error types for the benefits reconciliation engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! None of these ever reach a caller of [`crate::pipeline::Reconciler::process`]:
//! source failures degrade to empty inputs and configuration errors surface
//! only from [`crate::config::ConfigLoader`] and the caller-side helpers.

use thiserror::Error;

/// The main error type for the reconciliation engine.
///
/// # Example
///
/// ```
/// use benefits_recon::error::ReconError;
///
/// let error = ReconError::ConfigNotFound {
///     path: "/missing/reconcile.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/reconcile.yaml");
/// ```
#[derive(Debug, Error)]
pub enum ReconError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Configuration parsed but holds a value the engine cannot use.
    #[error("Invalid configuration field '{field}': {message}")]
    InvalidConfig {
        /// The offending field.
        field: String,
        /// Why the value was rejected.
        message: String,
    },

    /// The source stream could not be rewound or read.
    #[error("Failed to read {source_label} file: {message}")]
    SourceRead {
        /// The source slot (payroll, benadmin, carrier).
        source_label: String,
        /// The underlying I/O error.
        message: String,
    },

    /// The source bytes were not valid UTF-8.
    #[error("Failed to decode {source_label} file as UTF-8: {message}")]
    SourceDecode {
        /// The source slot (payroll, benadmin, carrier).
        source_label: String,
        /// The underlying decode error.
        message: String,
    },

    /// The source text was not well-formed delimited data.
    #[error("Failed to parse {source_label} file: {message}")]
    SourceParse {
        /// The source slot (payroll, benadmin, carrier).
        source_label: String,
        /// The underlying parse error.
        message: String,
    },

    /// The caller supplied fewer source files than it requires.
    #[error("Please upload at least {required} files for reconciliation ({provided} provided)")]
    InsufficientSources {
        /// The number of slots that were bound.
        provided: usize,
        /// The minimum the caller requires.
        required: usize,
    },
}

/// A type alias for Results that return ReconError.
pub type ReconResult<T> = Result<T, ReconError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = ReconError::ConfigNotFound {
            path: "/missing/reconcile.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/reconcile.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = ReconError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_invalid_config_displays_field_and_message() {
        let error = ReconError::InvalidConfig {
            field: "tolerance".to_string(),
            message: "must not be negative".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid configuration field 'tolerance': must not be negative"
        );
    }

    #[test]
    fn test_source_errors_display_label() {
        let decode = ReconError::SourceDecode {
            source_label: "carrier".to_string(),
            message: "invalid utf-8 sequence".to_string(),
        };
        assert_eq!(
            decode.to_string(),
            "Failed to decode carrier file as UTF-8: invalid utf-8 sequence"
        );

        let parse = ReconError::SourceParse {
            source_label: "payroll".to_string(),
            message: "unequal lengths".to_string(),
        };
        assert_eq!(parse.to_string(), "Failed to parse payroll file: unequal lengths");
    }

    #[test]
    fn test_insufficient_sources_message() {
        let error = ReconError::InsufficientSources {
            provided: 1,
            required: 2,
        };
        assert_eq!(
            error.to_string(),
            "Please upload at least 2 files for reconciliation (1 provided)"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<ReconError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_config_not_found() -> ReconResult<()> {
            Err(ReconError::ConfigNotFound {
                path: "/test".to_string(),
            })
        }

        fn propagates_error() -> ReconResult<()> {
            returns_config_not_found()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
