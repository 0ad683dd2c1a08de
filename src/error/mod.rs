//! # Error Module
//!
//! User-friendly error types for the plate similarity scorer.
//!
//! ## Design Principles
//! - **Scoring never fails** - degenerate input gets a fallback score, not an error
//! - **Include context** - paths, line numbers, offending values
//! - **Recovery hints** - suggest how to fix when possible

use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error
#[derive(Error, Debug)]
pub enum SimilarityError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Batch error: {0}")]
    Batch(#[from] BatchError),

    #[error("Report generation error: {0}")]
    Report(#[from] ReportError),
}

/// Errors in scorer configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid {name} weight: {value} (must be a finite number >= 0)")]
    InvalidWeight { name: &'static str, value: f64 },

    #[error("Score weights sum to zero. Give at least one measure a positive weight.")]
    ZeroWeights,

    #[error("Invalid threshold: {value} (must be 0.0-1.0)")]
    InvalidThreshold { value: f64 },

    #[error("Failed to read config file {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {reason}")]
    ParseFailed { path: PathBuf, reason: String },
}

/// Errors that occur while reading string pairs for batch comparison
#[derive(Error, Debug)]
pub enum BatchError {
    #[error("Failed to read pairs from {source_name}: {source}")]
    ReadInput {
        source_name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Line {line} is not a pair: '{content}'. Expected two values separated by a comma, tab or space.")]
    MalformedLine { line: usize, content: String },

    #[error("No pairs to compare")]
    NoPairs,
}

/// Errors that occur during report generation
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Failed to serialize report: {0}")]
    SerializationFailed(String),
}

impl From<serde_json::Error> for ReportError {
    fn from(error: serde_json::Error) -> Self {
        ReportError::SerializationFailed(error.to_string())
    }
}

/// Convenience Result type alias
pub type Result<T> = std::result::Result<T, SimilarityError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weight_error_includes_value() {
        let error = ConfigError::InvalidWeight {
            name: "sequence",
            value: -0.5,
        };
        let message = error.to_string();
        assert!(message.contains("sequence"));
        assert!(message.contains("-0.5"));
    }

    #[test]
    fn malformed_line_includes_line_number() {
        let error = BatchError::MalformedLine {
            line: 7,
            content: "ONLYONE".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("Line 7"));
        assert!(message.contains("ONLYONE"));
    }

    #[test]
    fn zero_weights_suggests_recovery() {
        let message = ConfigError::ZeroWeights.to_string();
        assert!(message.contains("positive weight"));
    }

    #[test]
    fn config_error_converts_to_top_level() {
        let error: SimilarityError = ConfigError::InvalidThreshold { value: 1.5 }.into();
        assert!(error.to_string().starts_with("Configuration error"));
    }
}
