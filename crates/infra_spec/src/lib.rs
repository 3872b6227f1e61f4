//! # infra_spec
//!
//! Configuration model, loading, and structural validation for infra-config.
//!
//! This crate owns the user-facing description of desired infrastructure.
//! Everything downstream (policy evaluation, Terraform variable generation)
//! consumes an [`InfraConfig`] that has already passed through
//! [`ConfigValidator`], so it never re-checks ranges or patterns.
//!
//! ## Example
//!
//! ```rust,no_run
//! use infra_spec::ConfigLoader;
//!
//! let config = ConfigLoader::from_path("./config.yaml").unwrap();
//! println!("{} in {}", config.project, config.region);
//! ```

pub mod error;
pub mod models;
pub mod reader;
pub mod region;
pub mod validator;

pub use error::{SpecError, SpecResult};
pub use models::*;
pub use reader::ConfigLoader;
pub use region::{is_valid_region, AZURE_REGIONS, DEFAULT_REGION};
pub use validator::{ConfigValidator, FieldError, ValidationResult};
