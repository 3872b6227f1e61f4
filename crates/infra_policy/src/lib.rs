//! # infra_policy
//!
//! Role-based policy types for infra-config.
//!
//! This crate provides:
//! - **Roles**: the acting user's privilege level ([`UserRole`])
//! - **Violations**: human-readable policy findings ([`PolicyViolation`])
//! - **Gate**: the aggregated pass/fail outcome that blocks output ([`GateResult`])
//!
//! The policy checks themselves live next to the resource transformers in
//! `infra_iac`; they are fixed and enumerated, not user-scriptable.
//!
//! ## Example
//!
//! ```rust
//! use infra_policy::{GateResult, PolicyViolation};
//!
//! let mut gate = GateResult::new();
//! gate.add_violations(vec![PolicyViolation::error(
//!     "db-enterprise-role",
//!     "postgresql",
//!     "Enterprise tier requires 'team_lead' or 'platform_admin' role",
//! )]);
//!
//! assert!(!gate.passed);
//! println!("{}", gate.report());
//! ```

pub mod error;
pub mod gate;
pub mod role;
pub mod rules;

pub use error::{PolicyError, PolicyResult};
pub use gate::GateResult;
pub use role::UserRole;
pub use rules::{PolicyViolation, RuleSeverity};
