//! Policy-gated generation across all resource kinds.
//!
//! Policies for every kind are evaluated before any transformer runs, and a
//! single violation anywhere blocks all output.

use std::collections::BTreeMap;

use tracing::{debug, info};

use infra_policy::GateResult;

use crate::context::TransformContext;
use crate::error::{IacError, IacResult};
use crate::tfvars::TfVars;
use crate::transformer::ResourceKind;

/// Generated documents keyed by resource kind; unconfigured kinds are absent.
pub type GeneratedVars = BTreeMap<ResourceKind, TfVars>;

/// Orchestrates policy evaluation and transformation.
pub struct Pipeline;

impl Pipeline {
    /// Run every policy evaluator.
    pub fn evaluate(ctx: &TransformContext<'_>) -> GateResult {
        let mut gate = GateResult::new();

        for kind in ResourceKind::all() {
            let violations = kind.transformer().validate_policies(ctx);
            debug!(resource = %kind, count = violations.len(), "Evaluated policies");
            gate.add_violations(violations);
        }

        gate
    }

    /// Evaluate policies and, when they all pass, transform every configured kind.
    pub fn generate(ctx: &TransformContext<'_>) -> IacResult<GeneratedVars> {
        let gate = Self::evaluate(ctx);
        if !gate.passed {
            return Err(IacError::PolicyBlocked(gate));
        }

        let outputs = Self::transform_all(ctx);
        info!(
            project = ctx.project(),
            environment = %ctx.environment(),
            resources = outputs.len(),
            "Generated Terraform variables"
        );
        Ok(outputs)
    }

    fn transform_all(ctx: &TransformContext<'_>) -> GeneratedVars {
        ResourceKind::all()
            .into_iter()
            .filter_map(|kind| kind.transformer().transform(ctx).map(|vars| (kind, vars)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use infra_policy::UserRole;
    use infra_spec::{DatabaseConfig, DatabaseTier, Environment, InfraConfig, StorageConfig, StorageTier};

    #[test]
    fn test_generate_both_kinds() {
        let config = InfraConfig::new("myapp", Environment::Dev)
            .with_database(DatabaseConfig::new(DatabaseTier::Standard))
            .with_storage(StorageConfig::new(StorageTier::Standard));
        let ctx = TransformContext::new(&config, UserRole::Developer);

        let outputs = Pipeline::generate(&ctx).unwrap();
        assert_eq!(
            outputs.keys().copied().collect::<Vec<_>>(),
            vec![ResourceKind::Postgresql, ResourceKind::Storage]
        );
    }

    #[test]
    fn test_nothing_configured() {
        let config = InfraConfig::new("myapp", Environment::Production);
        let ctx = TransformContext::new(&config, UserRole::Developer);

        assert!(Pipeline::evaluate(&ctx).passed);
        assert!(Pipeline::generate(&ctx).unwrap().is_empty());
    }

    #[test]
    fn test_violation_in_one_kind_blocks_all() {
        let config = InfraConfig::new("myapp", Environment::Dev)
            .with_database(DatabaseConfig::new(DatabaseTier::Standard))
            .with_storage(StorageConfig::new(StorageTier::Premium));
        let ctx = TransformContext::new(&config, UserRole::Developer);

        match Pipeline::generate(&ctx) {
            Err(IacError::PolicyBlocked(gate)) => {
                assert_eq!(gate.violations.len(), 1);
                assert_eq!(gate.violations[0].resource, "storage");
            }
            other => panic!("expected policy block, got {:?}", other),
        }
    }
}
