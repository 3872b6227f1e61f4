//! Terraform variable documents for Azure resources.
//!
//! Field names match the variables of the Terraform modules that consume
//! them; field order in the serialized JSON carries no meaning.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Variables for `azurerm_postgresql_flexible_server`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostgresqlTfVars {
    pub name: String,
    pub resource_group_name: String,
    pub location: String,
    pub sku_name: String,
    pub storage_mb: u64,
    pub postgresql_version: String,
    pub administrator_login: String,
    pub backup_retention_days: u32,
    pub geo_redundant_backup_enabled: bool,
    /// `ZoneRedundant` or `Disabled`.
    pub high_availability_mode: String,
    /// Serialized as `null` when high availability is off.
    pub zone: Option<String>,
    pub database_name: String,
    pub tags: BTreeMap<String, String>,
}

/// Variables for one `azurerm_storage_container`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageContainerTfVars {
    pub name: String,
    /// `private`, `blob`, or `container`.
    pub container_access_type: String,
}

/// Variables for `azurerm_storage_account` and its containers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageAccountTfVars {
    pub name: String,
    pub resource_group_name: String,
    pub location: String,
    /// `Standard` or `Premium`.
    pub account_tier: String,
    /// `LRS`, `GRS`, `RAGRS`, or `ZRS`.
    pub account_replication_type: String,
    pub account_kind: String,
    pub access_tier: String,
    pub enable_https_traffic_only: bool,
    pub min_tls_version: String,
    pub containers: Vec<StorageContainerTfVars>,
    pub tags: BTreeMap<String, String>,
}

/// A generated variable document for one resource kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum TfVars {
    Postgresql(PostgresqlTfVars),
    Storage(StorageAccountTfVars),
}

impl TfVars {
    pub fn as_postgresql(&self) -> Option<&PostgresqlTfVars> {
        match self {
            TfVars::Postgresql(vars) => Some(vars),
            TfVars::Storage(_) => None,
        }
    }

    /// Pretty-printed JSON document.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
