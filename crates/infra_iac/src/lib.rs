//! # infra_iac
//!
//! Policy evaluation and Terraform variable generation for infra-config.
//!
//! This crate turns a validated [`InfraConfig`](infra_spec::InfraConfig) and
//! the acting [`UserRole`](infra_policy::UserRole) into Azure `*.tfvars.json`
//! documents. Every transformer and policy check is a pure function of the
//! [`TransformContext`]; the only I/O lives in [`TfVarsWriter`].
//!
//! ## Features
//!
//! - PostgreSQL Flexible Server variables (`postgresql`)
//! - Storage Account variables with containers (`storage`)
//! - Role and environment policy gates evaluated before any output
//! - Azure naming rules for server and account names
//!
//! ## Example
//!
//! ```rust,no_run
//! use infra_iac::{Pipeline, TfVarsWriter, TransformContext};
//! use infra_policy::UserRole;
//! use infra_spec::ConfigLoader;
//!
//! let config = ConfigLoader::from_path("config.yaml").unwrap();
//! let ctx = TransformContext::new(&config, UserRole::TeamLead);
//!
//! let outputs = Pipeline::generate(&ctx).unwrap();
//! TfVarsWriter::new("./output").write_all(&outputs).unwrap();
//! ```

pub mod context;
pub mod database;
pub mod error;
pub mod naming;
pub mod pipeline;
pub mod storage;
pub mod tfvars;
pub mod transformer;
pub mod writer;

pub use context::TransformContext;
pub use database::DatabaseTransformer;
pub use error::{IacError, IacResult};
pub use pipeline::{GeneratedVars, Pipeline};
pub use storage::StorageTransformer;
pub use tfvars::{PostgresqlTfVars, StorageAccountTfVars, StorageContainerTfVars, TfVars};
pub use transformer::{ResourceKind, ResourceTransformer};
pub use writer::TfVarsWriter;
