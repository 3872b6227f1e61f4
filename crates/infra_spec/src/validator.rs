//! Structural validation of configurations.
//!
//! Every constraint is checked and every failure collected, so a user sees
//! the whole list in one pass. Errors carry the location of the offending
//! field, e.g. `storage -> containers -> 1 -> name`.

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{SpecError, SpecResult};
use crate::models::{ContainerConfig, DatabaseConfig, InfraConfig, StorageConfig};
use crate::region::{is_valid_region, AZURE_REGIONS};

const PROJECT_PATTERN: &str = r"^[a-z][a-z0-9-]*$";
const CONTAINER_NAME_PATTERN: &str = r"^[a-z0-9-]+$";
const POSTGRES_VERSION_PATTERN: &str = r"^(11|12|13|14|15|16)$";

const PROJECT_MAX_LEN: usize = 20;
const CONTAINER_NAME_MIN_LEN: usize = 3;
const CONTAINER_NAME_MAX_LEN: usize = 63;
const STORAGE_GB_RANGE: (u32, u32) = (32, 16384);
const BACKUP_RETENTION_RANGE: (u32, u32) = (7, 35);

/// A single failed constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// Location of the field, segments joined with ` -> `.
    pub path: String,
    pub message: String,
}

impl FieldError {
    pub fn new(path: &[&str], message: impl Into<String>) -> Self {
        Self {
            path: path.join(" -> "),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

/// Validation result with details.
#[derive(Debug, Default)]
pub struct ValidationResult {
    pub valid: bool,
    pub errors: Vec<FieldError>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self {
            valid: true,
            errors: Vec::new(),
        }
    }

    pub fn add_error(&mut self, error: FieldError) {
        self.valid = false;
        self.errors.push(error);
    }

    pub fn merge(&mut self, other: ValidationResult) {
        if !other.valid {
            self.valid = false;
        }
        self.errors.extend(other.errors);
    }

    /// Convert into a `SpecResult`, failing when any error was recorded.
    pub fn into_result(self) -> SpecResult<()> {
        if self.valid {
            Ok(())
        } else {
            Err(SpecError::Invalid(self.errors))
        }
    }
}

/// Validator for infrastructure configurations.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate an entire configuration.
    pub fn validate(config: &InfraConfig) -> SpecResult<ValidationResult> {
        let mut result = ValidationResult::new();

        result.merge(Self::validate_project(&config.project)?);

        if !is_valid_region(&config.region) {
            result.add_error(FieldError::new(
                &["region"],
                format!(
                    "Invalid region: {}. Valid regions: {}",
                    config.region,
                    AZURE_REGIONS.join(", ")
                ),
            ));
        }

        if let Some(database) = &config.database {
            result.merge(Self::validate_database(database)?);
        }

        if let Some(storage) = &config.storage {
            result.merge(Self::validate_storage(storage)?);
        }

        Ok(result)
    }

    /// Validate a configuration and normalize it for the transform engine.
    pub fn validated(config: InfraConfig) -> SpecResult<InfraConfig> {
        Self::validate(&config)?.into_result()?;
        Ok(InfraConfig {
            region: config.region.to_lowercase(),
            ..config
        })
    }

    fn validate_project(project: &str) -> SpecResult<ValidationResult> {
        let mut result = ValidationResult::new();

        if project.is_empty() || project.len() > PROJECT_MAX_LEN {
            result.add_error(FieldError::new(
                &["project"],
                format!("must be between 1 and {} characters", PROJECT_MAX_LEN),
            ));
        }

        if !project.is_empty() && !matches_pattern(PROJECT_PATTERN, project)? {
            result.add_error(FieldError::new(
                &["project"],
                "must start with a letter and contain only lowercase letters, digits, and hyphens",
            ));
        }

        Ok(result)
    }

    /// Validate database settings.
    pub fn validate_database(database: &DatabaseConfig) -> SpecResult<ValidationResult> {
        let mut result = ValidationResult::new();

        let (min_gb, max_gb) = STORAGE_GB_RANGE;
        if !(min_gb..=max_gb).contains(&database.storage_gb) {
            result.add_error(FieldError::new(
                &["database", "storage_gb"],
                format!("must be between {} and {}", min_gb, max_gb),
            ));
        }

        if !matches_pattern(POSTGRES_VERSION_PATTERN, &database.version)? {
            result.add_error(FieldError::new(
                &["database", "version"],
                format!("unsupported PostgreSQL version '{}' (11-16)", database.version),
            ));
        }

        let (min_days, max_days) = BACKUP_RETENTION_RANGE;
        if !(min_days..=max_days).contains(&database.backup_retention_days) {
            result.add_error(FieldError::new(
                &["database", "backup_retention_days"],
                format!("must be between {} and {}", min_days, max_days),
            ));
        }

        Ok(result)
    }

    /// Validate storage settings.
    pub fn validate_storage(storage: &StorageConfig) -> SpecResult<ValidationResult> {
        let mut result = ValidationResult::new();

        for (index, container) in storage.containers.iter().enumerate() {
            result.merge(Self::validate_container(index, container)?);
        }

        Ok(result)
    }

    fn validate_container(index: usize, container: &ContainerConfig) -> SpecResult<ValidationResult> {
        let mut result = ValidationResult::new();
        let index = index.to_string();
        let path = ["storage", "containers", index.as_str(), "name"];

        let len = container.name.len();
        if !(CONTAINER_NAME_MIN_LEN..=CONTAINER_NAME_MAX_LEN).contains(&len) {
            result.add_error(FieldError::new(
                &path,
                format!(
                    "must be between {} and {} characters",
                    CONTAINER_NAME_MIN_LEN, CONTAINER_NAME_MAX_LEN
                ),
            ));
        }

        if !matches_pattern(CONTAINER_NAME_PATTERN, &container.name)? {
            result.add_error(FieldError::new(
                &path,
                "must contain only lowercase letters, digits, and hyphens",
            ));
        }

        Ok(result)
    }
}

fn matches_pattern(pattern: &str, value: &str) -> SpecResult<bool> {
    let regex = Regex::new(pattern).map_err(|e| SpecError::InvalidPattern {
        pattern: pattern.to_string(),
        message: e.to_string(),
    })?;
    Ok(regex.is_match(value))
}
