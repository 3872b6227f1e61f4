//! Configuration file loading.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{SpecError, SpecResult};
use crate::models::InfraConfig;
use crate::validator::ConfigValidator;

/// Loader for `config.yaml` files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Read, parse, and validate a configuration file.
    pub fn from_path(path: impl AsRef<Path>) -> SpecResult<InfraConfig> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(SpecError::NotFound(path.to_path_buf()));
        }

        debug!("Reading configuration from {:?}", path);
        let content = fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Parse and validate configuration text.
    pub fn from_yaml_str(content: &str) -> SpecResult<InfraConfig> {
        let config: InfraConfig = serde_yaml::from_str(content)?;
        let config = ConfigValidator::validated(config)?;
        debug!(
            project = %config.project,
            environment = %config.environment,
            "Configuration validated"
        );
        Ok(config)
    }
}
