//! Error types for IaC module.

use thiserror::Error;

use infra_policy::GateResult;

/// Result type alias for IaC operations.
pub type IacResult<T> = Result<T, IacError>;

/// Errors that can occur while generating infrastructure variables.
#[derive(Error, Debug)]
pub enum IacError {
    #[error("Policy gate failed with {} violation(s)", .0.violations.len())]
    PolicyBlocked(GateResult),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
