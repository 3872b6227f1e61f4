//! PostgreSQL Flexible Server transformer.

use tracing::debug;

use infra_policy::PolicyViolation;
use infra_spec::{DatabaseConfig, DatabaseTier};

use crate::context::TransformContext;
use crate::naming::database_server_name;
use crate::tfvars::{PostgresqlTfVars, TfVars};
use crate::transformer::{ResourceKind, ResourceTransformer};

const ADMINISTRATOR_LOGIN: &str = "pgadmin";
const DATABASE_NAME: &str = "app";
const HA_ZONE: &str = "1";
const MIN_PRODUCTION_RETENTION_DAYS: u32 = 14;

/// Azure PostgreSQL SKU for a tier.
pub fn sku_for_tier(tier: DatabaseTier) -> &'static str {
    match tier {
        DatabaseTier::Starter => "B_Standard_B1ms",
        DatabaseTier::Standard => "GP_Standard_D2s_v3",
        DatabaseTier::Premium => "GP_Standard_D4s_v3",
        DatabaseTier::Enterprise => "MO_Standard_E4s_v3",
    }
}

/// Transforms database settings into PostgreSQL variables.
#[derive(Debug, Clone, Copy, Default)]
pub struct DatabaseTransformer;

impl DatabaseTransformer {
    /// Typed variables, or `None` when no database is configured.
    pub fn transform_vars(&self, ctx: &TransformContext<'_>) -> Option<PostgresqlTfVars> {
        let db = ctx.config.database.as_ref()?;

        let sku_name = sku_for_tier(db.tier);
        // production gets geo-redundant backups unless on the burstable tier
        let geo_redundant = ctx.is_production() && db.tier != DatabaseTier::Starter;
        let high_availability_mode = if db.high_availability {
            "ZoneRedundant"
        } else {
            "Disabled"
        };

        let name = database_server_name(ctx.project(), ctx.environment().as_str());
        debug!(%name, sku_name, geo_redundant, "Transforming database");

        Some(PostgresqlTfVars {
            name,
            resource_group_name: ctx.resource_group_name(),
            location: ctx.region().to_string(),
            sku_name: sku_name.to_string(),
            storage_mb: u64::from(db.storage_gb) * 1024,
            postgresql_version: db.version.clone(),
            administrator_login: ADMINISTRATOR_LOGIN.to_string(),
            backup_retention_days: db.backup_retention_days,
            geo_redundant_backup_enabled: geo_redundant,
            high_availability_mode: high_availability_mode.to_string(),
            zone: db.high_availability.then(|| HA_ZONE.to_string()),
            database_name: DATABASE_NAME.to_string(),
            tags: ctx.tags(),
        })
    }

    fn check(db: &DatabaseConfig, ctx: &TransformContext<'_>) -> Vec<PolicyViolation> {
        let resource = ResourceKind::Postgresql.as_str();
        let mut violations = Vec::new();

        if ctx.is_production() && db.tier == DatabaseTier::Starter {
            violations.push(PolicyViolation::error(
                "db-production-tier",
                resource,
                "Production environment requires 'standard' tier or higher for database",
            ));
        }

        if db.tier == DatabaseTier::Enterprise && !ctx.role.is_elevated() {
            violations.push(PolicyViolation::error(
                "db-enterprise-role",
                resource,
                "Enterprise tier requires 'team_lead' or 'platform_admin' role",
            ));
        }

        if db.high_availability && db.tier == DatabaseTier::Starter {
            violations.push(PolicyViolation::error(
                "db-ha-tier",
                resource,
                "High availability requires 'standard' tier or higher",
            ));
        }

        if ctx.is_production() && db.backup_retention_days < MIN_PRODUCTION_RETENTION_DAYS {
            violations.push(PolicyViolation::error(
                "db-production-retention",
                resource,
                format!(
                    "Production environment requires minimum {} days backup retention",
                    MIN_PRODUCTION_RETENTION_DAYS
                ),
            ));
        }

        violations
    }
}

impl ResourceTransformer for DatabaseTransformer {
    fn kind(&self) -> ResourceKind {
        ResourceKind::Postgresql
    }

    fn transform(&self, ctx: &TransformContext<'_>) -> Option<TfVars> {
        self.transform_vars(ctx).map(TfVars::Postgresql)
    }

    fn validate_policies(&self, ctx: &TransformContext<'_>) -> Vec<PolicyViolation> {
        match &ctx.config.database {
            Some(db) => Self::check(db, ctx),
            None => Vec::new(),
        }
    }
}
