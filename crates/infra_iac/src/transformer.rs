//! Resource transformer capability and the closed set of resource kinds.

use serde::Serialize;

use infra_policy::PolicyViolation;

use crate::context::TransformContext;
use crate::database::DatabaseTransformer;
use crate::storage::StorageTransformer;
use crate::tfvars::TfVars;

/// Resource kinds with a Terraform module behind them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Postgresql,
    Storage,
}

impl ResourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::Postgresql => "postgresql",
            ResourceKind::Storage => "storage",
        }
    }

    pub fn all() -> Vec<Self> {
        vec![ResourceKind::Postgresql, ResourceKind::Storage]
    }

    /// File the kind's variables are written to.
    pub fn file_name(&self) -> String {
        format!("{}.tfvars.json", self.as_str())
    }

    /// The transformer responsible for this kind.
    pub fn transformer(&self) -> &'static dyn ResourceTransformer {
        match self {
            ResourceKind::Postgresql => &DatabaseTransformer,
            ResourceKind::Storage => &StorageTransformer,
        }
    }
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Pure mapping from a context to one resource kind's variables and policy findings.
pub trait ResourceTransformer: Send + Sync {
    /// The kind this transformer produces.
    fn kind(&self) -> ResourceKind;

    /// Transform the configuration, or `None` when the resource is not configured.
    fn transform(&self, ctx: &TransformContext<'_>) -> Option<TfVars>;

    /// Evaluate every policy; empty when all pass or the resource is not configured.
    fn validate_policies(&self, ctx: &TransformContext<'_>) -> Vec<PolicyViolation>;
}
