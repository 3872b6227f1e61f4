//! Azure Storage Account transformer.

use tracing::debug;

use infra_policy::PolicyViolation;
use infra_spec::{Environment, StorageConfig, StorageTier};

use crate::context::TransformContext;
use crate::naming::storage_account_name;
use crate::tfvars::{StorageAccountTfVars, StorageContainerTfVars, TfVars};
use crate::transformer::{ResourceKind, ResourceTransformer};

const ACCESS_TIER: &str = "Hot";
const MIN_TLS_VERSION: &str = "TLS1_2";

/// Storage account performance tier for a storage tier.
pub fn account_tier(tier: StorageTier) -> &'static str {
    match tier {
        StorageTier::Basic | StorageTier::Standard => "Standard",
        StorageTier::Premium => "Premium",
    }
}

/// Account kind; premium accounts are block-blob only.
pub fn account_kind(tier: StorageTier) -> &'static str {
    match tier {
        StorageTier::Basic | StorageTier::Standard => "StorageV2",
        StorageTier::Premium => "BlockBlobStorage",
    }
}

/// Replication type by tier and environment.
pub fn replication_type(tier: StorageTier, environment: Environment) -> &'static str {
    use Environment::*;
    use StorageTier::*;

    match (tier, environment) {
        (Basic, Dev | Staging | Production) => "LRS",
        (Standard, Dev) => "LRS",
        (Standard, Staging) => "GRS",
        (Standard, Production) => "RAGRS",
        (Premium, Dev) => "LRS",
        (Premium, Staging | Production) => "ZRS",
    }
}

/// Transforms storage settings into Storage Account variables.
#[derive(Debug, Clone, Copy, Default)]
pub struct StorageTransformer;

impl StorageTransformer {
    /// Typed variables, or `None` when no storage is configured.
    pub fn transform_vars(&self, ctx: &TransformContext<'_>) -> Option<StorageAccountTfVars> {
        let storage = ctx.config.storage.as_ref()?;

        let name = storage_account_name(ctx.project(), ctx.environment().as_str());
        let replication = replication_type(storage.tier, ctx.environment());
        debug!(%name, replication, containers = storage.containers.len(), "Transforming storage");

        let containers = storage
            .containers
            .iter()
            .map(|c| StorageContainerTfVars {
                name: c.name.clone(),
                container_access_type: c.access.as_str().to_string(),
            })
            .collect();

        Some(StorageAccountTfVars {
            name,
            resource_group_name: ctx.resource_group_name(),
            location: ctx.region().to_string(),
            account_tier: account_tier(storage.tier).to_string(),
            account_replication_type: replication.to_string(),
            account_kind: account_kind(storage.tier).to_string(),
            access_tier: ACCESS_TIER.to_string(),
            enable_https_traffic_only: true,
            min_tls_version: MIN_TLS_VERSION.to_string(),
            containers,
            tags: ctx.tags(),
        })
    }

    fn check(storage: &StorageConfig, ctx: &TransformContext<'_>) -> Vec<PolicyViolation> {
        let resource = ResourceKind::Storage.as_str();
        let mut violations = Vec::new();

        if ctx.is_production() && storage.tier == StorageTier::Basic {
            violations.push(PolicyViolation::warning(
                "st-production-tier",
                resource,
                "Production environment recommends 'standard' tier or higher for storage",
            ));
        }

        if storage.tier == StorageTier::Premium && !ctx.role.is_elevated() {
            violations.push(PolicyViolation::error(
                "st-premium-role",
                resource,
                "Premium storage tier requires 'team_lead' or 'platform_admin' role",
            ));
        }

        if ctx.is_production() && !ctx.role.is_elevated() {
            for container in storage.containers.iter().filter(|c| c.access.is_public()) {
                violations.push(PolicyViolation::error(
                    "st-public-container",
                    resource,
                    format!(
                        "Public container '{}' in production requires 'team_lead' or 'platform_admin' role",
                        container.name
                    ),
                ));
            }
        }

        violations
    }
}

impl ResourceTransformer for StorageTransformer {
    fn kind(&self) -> ResourceKind {
        ResourceKind::Storage
    }

    fn transform(&self, ctx: &TransformContext<'_>) -> Option<TfVars> {
        self.transform_vars(ctx).map(TfVars::Storage)
    }

    fn validate_policies(&self, ctx: &TransformContext<'_>) -> Vec<PolicyViolation> {
        match &ctx.config.storage {
            Some(storage) => Self::check(storage, ctx),
            None => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use infra_policy::UserRole;
    use infra_policy::RuleSeverity;
    use infra_spec::{ContainerAccess, ContainerConfig, InfraConfig};

    fn storage_config(project: &str, env: Environment, storage: StorageConfig) -> InfraConfig {
        InfraConfig::new(project, env).with_storage(storage)
    }

    #[test]
    fn test_standard_production_naming_and_replication() {
        let config = storage_config(
            "my-app",
            Environment::Production,
            StorageConfig::new(StorageTier::Standard),
        );
        let ctx = TransformContext::new(&config, UserRole::Developer);
        let vars = StorageTransformer.transform_vars(&ctx).unwrap();

        assert_eq!(vars.name, "stmyappproduction");
        assert_eq!(vars.account_replication_type, "RAGRS");
        assert_eq!(vars.account_tier, "Standard");
        assert_eq!(vars.account_kind, "StorageV2");
        assert_eq!(vars.access_tier, "Hot");
        assert!(vars.enable_https_traffic_only);
        assert_eq!(vars.min_tls_version, "TLS1_2");
        assert_eq!(vars.resource_group_name, "rg-my-app-production");
    }

    #[test]
    fn test_replication_table() {
        use Environment::*;
        use StorageTier::*;

        let expected = [
            (Basic, Dev, "LRS"),
            (Basic, Staging, "LRS"),
            (Basic, Production, "LRS"),
            (Standard, Dev, "LRS"),
            (Standard, Staging, "GRS"),
            (Standard, Production, "RAGRS"),
            (Premium, Dev, "LRS"),
            (Premium, Staging, "ZRS"),
            (Premium, Production, "ZRS"),
        ];
        for (tier, env, replication) in expected {
            assert_eq!(replication_type(tier, env), replication, "{} / {}", tier, env);
        }
    }

    #[test]
    fn test_premium_uses_block_blob_storage() {
        let config = storage_config("myapp", Environment::Production, StorageConfig::new(StorageTier::Premium));
        let ctx = TransformContext::new(&config, UserRole::PlatformAdmin);
        let vars = StorageTransformer.transform_vars(&ctx).unwrap();

        assert_eq!(vars.account_kind, "BlockBlobStorage");
        assert_eq!(vars.account_tier, "Premium");
    }

    #[test]
    fn test_containers_preserve_order() {
        let config = storage_config(
            "myapp",
            Environment::Dev,
            StorageConfig::new(StorageTier::Standard)
                .with_container(ContainerConfig::private("uploads"))
                .with_container(ContainerConfig::new("public-assets", ContainerAccess::Blob))
                .with_container(ContainerConfig::new("site", ContainerAccess::Container)),
        );
        let ctx = TransformContext::new(&config, UserRole::Developer);
        let vars = StorageTransformer.transform_vars(&ctx).unwrap();

        let pairs: Vec<_> = vars
            .containers
            .iter()
            .map(|c| (c.name.as_str(), c.container_access_type.as_str()))
            .collect();
        assert_eq!(
            pairs,
            vec![("uploads", "private"), ("public-assets", "blob"), ("site", "container")]
        );
    }

    #[test]
    fn test_absent_storage() {
        let config = InfraConfig::new("myapp", Environment::Production);
        let ctx = TransformContext::new(&config, UserRole::Developer);

        assert!(StorageTransformer.transform(&ctx).is_none());
        assert!(StorageTransformer.validate_policies(&ctx).is_empty());
    }

    #[test]
    fn test_basic_in_production_is_a_recommendation() {
        let config = storage_config("myapp", Environment::Production, StorageConfig::new(StorageTier::Basic));
        let ctx = TransformContext::new(&config, UserRole::PlatformAdmin);
        let violations = StorageTransformer.validate_policies(&ctx);

        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].severity, RuleSeverity::Warning);
        assert!(violations[0].message.contains("recommends"));
    }

    #[test]
    fn test_premium_requires_elevated_role() {
        let config = storage_config("myapp", Environment::Dev, StorageConfig::new(StorageTier::Premium));

        let ctx = TransformContext::new(&config, UserRole::Developer);
        assert_eq!(StorageTransformer.validate_policies(&ctx).len(), 1);

        let ctx = TransformContext::new(&config, UserRole::TeamLead);
        assert!(StorageTransformer.validate_policies(&ctx).is_empty());
    }

    #[test]
    fn test_one_violation_per_public_container() {
        let config = storage_config(
            "myapp",
            Environment::Production,
            StorageConfig::new(StorageTier::Standard)
                .with_container(ContainerConfig::new("public-assets", ContainerAccess::Blob))
                .with_container(ContainerConfig::private("uploads"))
                .with_container(ContainerConfig::new("site", ContainerAccess::Container)),
        );

        let ctx = TransformContext::new(&config, UserRole::Developer);
        let violations = StorageTransformer.validate_policies(&ctx);
        assert_eq!(violations.len(), 2);
        assert!(violations[0].message.contains("'public-assets'"));
        assert!(violations[1].message.contains("'site'"));

        let ctx = TransformContext::new(&config, UserRole::TeamLead);
        assert!(StorageTransformer.validate_policies(&ctx).is_empty());
    }

    #[test]
    fn test_public_container_outside_production_allowed() {
        let config = storage_config(
            "myapp",
            Environment::Staging,
            StorageConfig::new(StorageTier::Standard)
                .with_container(ContainerConfig::new("public-assets", ContainerAccess::Blob)),
        );
        let ctx = TransformContext::new(&config, UserRole::Developer);
        assert!(StorageTransformer.validate_policies(&ctx).is_empty());
    }
}
