//! Error types for configuration loading and validation.

use std::path::PathBuf;
use thiserror::Error;

use crate::validator::FieldError;

/// Result type alias for spec operations.
pub type SpecResult<T> = Result<T, SpecError>;

/// Errors that can occur while loading a configuration.
#[derive(Error, Debug)]
pub enum SpecError {
    #[error("Config file not found: {0}")]
    NotFound(PathBuf),

    #[error("Configuration validation failed with {} error(s)", .0.len())]
    Invalid(Vec<FieldError>),

    #[error("Invalid validation pattern {pattern}: {message}")]
    InvalidPattern { pattern: String, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl SpecError {
    /// Field-level errors, when this is a validation failure.
    pub fn field_errors(&self) -> &[FieldError] {
        match self {
            SpecError::Invalid(errors) => errors,
            _ => &[],
        }
    }
}
