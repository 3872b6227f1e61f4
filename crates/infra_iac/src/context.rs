//! Transform context shared by every resource transformer.

use std::collections::BTreeMap;

use infra_policy::UserRole;
use infra_spec::{Environment, InfraConfig};

/// Value of the `managed_by` tag on every resource.
pub const MANAGED_BY: &str = "infra-config";

/// Read-only view over a configuration and the acting role.
///
/// All derived values are recomputed from the borrowed configuration.
#[derive(Debug, Clone, Copy)]
pub struct TransformContext<'a> {
    pub config: &'a InfraConfig,
    pub role: UserRole,
}

impl<'a> TransformContext<'a> {
    pub fn new(config: &'a InfraConfig, role: UserRole) -> Self {
        Self { config, role }
    }

    pub fn project(&self) -> &'a str {
        &self.config.project
    }

    pub fn environment(&self) -> Environment {
        self.config.environment
    }

    pub fn region(&self) -> &'a str {
        &self.config.region
    }

    pub fn is_production(&self) -> bool {
        self.environment() == Environment::Production
    }

    /// Consistent resource group name, `rg-{project}-{environment}`.
    pub fn resource_group_name(&self) -> String {
        format!("rg-{}-{}", self.project(), self.environment())
    }

    /// Standard tags overlaid by the user's tags.
    ///
    /// A user tag whose key matches a standard tag replaces the standard value.
    pub fn tags(&self) -> BTreeMap<String, String> {
        let mut tags = BTreeMap::new();
        tags.insert("project".to_string(), self.project().to_string());
        tags.insert("environment".to_string(), self.environment().to_string());
        tags.insert("managed_by".to_string(), MANAGED_BY.to_string());

        // Empty owner or cost center is treated as unset.
        if let Some(owner) = self.config.owner.as_deref().filter(|o| !o.is_empty()) {
            tags.insert("owner".to_string(), owner.to_string());
        }
        if let Some(cost_center) = self.config.cost_center.as_deref().filter(|c| !c.is_empty()) {
            tags.insert("cost_center".to_string(), cost_center.to_string());
        }

        tags.extend(self.config.tags.clone());
        tags
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_values() {
        let config = InfraConfig::new("myapp", Environment::Production);
        let ctx = TransformContext::new(&config, UserRole::Developer);

        assert!(ctx.is_production());
        assert_eq!(ctx.resource_group_name(), "rg-myapp-production");
        assert_eq!(ctx.region(), "eastus");
    }

    #[test]
    fn test_standard_tags() {
        let config = InfraConfig::new("myapp", Environment::Staging)
            .with_owner("platform-team")
            .with_cost_center("engineering");
        let tags = TransformContext::new(&config, UserRole::Developer).tags();

        assert_eq!(tags["project"], "myapp");
        assert_eq!(tags["environment"], "staging");
        assert_eq!(tags["managed_by"], "infra-config");
        assert_eq!(tags["owner"], "platform-team");
        assert_eq!(tags["cost_center"], "engineering");
    }

    #[test]
    fn test_optional_tags_omitted() {
        let config = InfraConfig::new("myapp", Environment::Dev);
        let tags = TransformContext::new(&config, UserRole::Developer).tags();

        assert_eq!(tags.len(), 3);
        assert!(!tags.contains_key("owner"));
        assert!(!tags.contains_key("cost_center"));
    }

    #[test]
    fn test_empty_owner_and_cost_center_omitted() {
        let config = InfraConfig::new("myapp", Environment::Dev)
            .with_owner("")
            .with_cost_center("");
        let tags = TransformContext::new(&config, UserRole::Developer).tags();

        assert_eq!(tags.len(), 3);
        assert!(!tags.contains_key("owner"));
        assert!(!tags.contains_key("cost_center"));
    }

    #[test]
    fn test_user_tags_merged_and_override() {
        let config = InfraConfig::new("myapp", Environment::Dev)
            .with_tag("service", "api")
            .with_tag("project", "renamed");
        let tags = TransformContext::new(&config, UserRole::Developer).tags();

        assert_eq!(tags["service"], "api");
        assert_eq!(tags["project"], "renamed");
        assert_eq!(tags["managed_by"], "infra-config");
    }
}
