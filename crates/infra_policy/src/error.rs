//! Error types for policy module.

use thiserror::Error;

/// Result type alias for policy operations.
pub type PolicyResult<T> = Result<T, PolicyError>;

/// Errors that can occur during policy operations.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum PolicyError {
    #[error("Unknown role: {0} (expected developer, team_lead, or platform_admin)")]
    UnknownRole(String),
}
