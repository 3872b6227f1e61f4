//! Data models for infrastructure configuration.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::region::DEFAULT_REGION;

/// Deployment environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Environment {
    Dev,
    Staging,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Dev => "dev",
            Environment::Staging => "staging",
            Environment::Production => "production",
        }
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Database performance tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DatabaseTier {
    Starter,
    #[default]
    Standard,
    Premium,
    Enterprise,
}

impl DatabaseTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            DatabaseTier::Starter => "starter",
            DatabaseTier::Standard => "standard",
            DatabaseTier::Premium => "premium",
            DatabaseTier::Enterprise => "enterprise",
        }
    }
}

impl std::fmt::Display for DatabaseTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Storage performance tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageTier {
    Basic,
    #[default]
    Standard,
    Premium,
}

impl StorageTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            StorageTier::Basic => "basic",
            StorageTier::Standard => "standard",
            StorageTier::Premium => "premium",
        }
    }
}

impl std::fmt::Display for StorageTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Storage container access level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContainerAccess {
    #[default]
    Private,
    Blob,
    Container,
}

impl ContainerAccess {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContainerAccess::Private => "private",
            ContainerAccess::Blob => "blob",
            ContainerAccess::Container => "container",
        }
    }

    /// Whether anonymous reads are possible.
    pub fn is_public(&self) -> bool {
        !matches!(self, ContainerAccess::Private)
    }
}

/// A storage container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerConfig {
    pub name: String,
    #[serde(default)]
    pub access: ContainerAccess,
}

impl ContainerConfig {
    pub fn new(name: impl Into<String>, access: ContainerAccess) -> Self {
        Self {
            name: name.into(),
            access,
        }
    }

    pub fn private(name: impl Into<String>) -> Self {
        Self::new(name, ContainerAccess::Private)
    }
}

/// PostgreSQL database settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default)]
    pub tier: DatabaseTier,
    #[serde(default = "default_storage_gb")]
    pub storage_gb: u32,
    #[serde(default = "default_postgres_version")]
    pub version: String,
    #[serde(default)]
    pub high_availability: bool,
    #[serde(default = "default_backup_retention_days")]
    pub backup_retention_days: u32,
}

fn default_storage_gb() -> u32 {
    64
}

fn default_postgres_version() -> String {
    "16".to_string()
}

fn default_backup_retention_days() -> u32 {
    7
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            tier: DatabaseTier::default(),
            storage_gb: default_storage_gb(),
            version: default_postgres_version(),
            high_availability: false,
            backup_retention_days: default_backup_retention_days(),
        }
    }
}

impl DatabaseConfig {
    pub fn new(tier: DatabaseTier) -> Self {
        Self {
            tier,
            ..Self::default()
        }
    }

    pub fn with_storage_gb(mut self, storage_gb: u32) -> Self {
        self.storage_gb = storage_gb;
        self
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    pub fn with_high_availability(mut self, enabled: bool) -> Self {
        self.high_availability = enabled;
        self
    }

    pub fn with_backup_retention_days(mut self, days: u32) -> Self {
        self.backup_retention_days = days;
        self
    }
}

/// Blob storage settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default)]
    pub tier: StorageTier,
    #[serde(default)]
    pub containers: Vec<ContainerConfig>,
}

impl StorageConfig {
    pub fn new(tier: StorageTier) -> Self {
        Self {
            tier,
            containers: Vec::new(),
        }
    }

    pub fn with_container(mut self, container: ContainerConfig) -> Self {
        self.containers.push(container);
        self
    }
}

/// Root infrastructure configuration.
///
/// Instances handed to the transform engine have passed
/// [`ConfigValidator`](crate::ConfigValidator); nothing downstream mutates them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InfraConfig {
    pub project: String,
    pub environment: Environment,
    #[serde(default = "default_region")]
    pub region: String,
    #[serde(default)]
    pub database: Option<DatabaseConfig>,
    #[serde(default)]
    pub storage: Option<StorageConfig>,
    #[serde(default)]
    pub owner: Option<String>,
    #[serde(default)]
    pub cost_center: Option<String>,
    #[serde(default)]
    pub tags: BTreeMap<String, String>,
}

fn default_region() -> String {
    DEFAULT_REGION.to_string()
}

impl InfraConfig {
    pub fn new(project: impl Into<String>, environment: Environment) -> Self {
        Self {
            project: project.into(),
            environment,
            region: default_region(),
            database: None,
            storage: None,
            owner: None,
            cost_center: None,
            tags: BTreeMap::new(),
        }
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = region.into();
        self
    }

    pub fn with_database(mut self, database: DatabaseConfig) -> Self {
        self.database = Some(database);
        self
    }

    pub fn with_storage(mut self, storage: StorageConfig) -> Self {
        self.storage = Some(storage);
        self
    }

    pub fn with_owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = Some(owner.into());
        self
    }

    pub fn with_cost_center(mut self, cost_center: impl Into<String>) -> Self {
        self.cost_center = Some(cost_center.into());
        self
    }

    pub fn with_tag(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.tags.insert(key.into(), value.into());
        self
    }

    /// True when at least one resource kind is configured.
    pub fn has_resources(&self) -> bool {
        self.database.is_some() || self.storage.is_some()
    }
}
