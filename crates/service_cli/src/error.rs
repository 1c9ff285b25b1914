//! CLI error types.

use thiserror::Error;

/// Failures raised while loading and validating a run file.
#[derive(Debug, Error)]
pub enum CliError {
    /// Run file does not exist.
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Run file could not be read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Run file is not valid TOML for a run.
    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// Environment override holds an unparsable value.
    #[error("Invalid value '{value}' for environment variable {name}")]
    InvalidEnv {
        /// Variable name
        name: &'static str,
        /// Offending value
        value: String,
    },

    /// Run settings failed validation.
    #[error("Validation errors: {}", .0.join("; "))]
    Validation(Vec<String>),
}

/// Result alias for CLI configuration handling.
pub type Result<T> = std::result::Result<T, CliError>;
