//! Integration tests for configuration loading.

use std::fs;
use tempfile::tempdir;

use infra_spec::{
    ConfigLoader, ContainerAccess, DatabaseTier, Environment, SpecError, StorageTier,
};

const FULL_CONFIG: &str = r#"
project: fullapp
environment: production
region: WestUS2
owner: backend-team
cost_center: engineering
tags:
  service: api
database:
  tier: standard
  storage_gb: 128
  high_availability: true
  backup_retention_days: 14
storage:
  tier: standard
  containers:
    - name: uploads
      access: private
    - name: public-assets
      access: blob
"#;

/// Test loading a complete configuration from disk.
#[test]
fn test_load_full_config_from_file() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("config.yaml");
    fs::write(&path, FULL_CONFIG).unwrap();

    let config = ConfigLoader::from_path(&path).unwrap();

    assert_eq!(config.project, "fullapp");
    assert_eq!(config.environment, Environment::Production);
    assert_eq!(config.region, "westus2");
    assert_eq!(config.owner.as_deref(), Some("backend-team"));
    assert_eq!(config.tags.get("service").map(String::as_str), Some("api"));

    let db = config.database.as_ref().unwrap();
    assert_eq!(db.tier, DatabaseTier::Standard);
    assert_eq!(db.storage_gb, 128);
    assert!(db.high_availability);

    let storage = config.storage.as_ref().unwrap();
    assert_eq!(storage.tier, StorageTier::Standard);
    let names: Vec<_> = storage.containers.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["uploads", "public-assets"]);
    assert_eq!(storage.containers[1].access, ContainerAccess::Blob);
}

/// Every structural problem is reported at once with its location.
#[test]
fn test_all_field_errors_reported() {
    let yaml = r#"
project: 9lives
environment: dev
region: moon
database:
  storage_gb: 20000
storage:
  containers:
    - name: ab
"#;

    let err = ConfigLoader::from_yaml_str(yaml).unwrap_err();
    let rendered: Vec<String> = err.field_errors().iter().map(|e| e.to_string()).collect();

    assert!(matches!(err, SpecError::Invalid(_)));
    assert!(rendered.iter().any(|e| e.starts_with("project: ")));
    assert!(rendered.iter().any(|e| e.starts_with("region: Invalid region: moon")));
    assert!(rendered.iter().any(|e| e.starts_with("database -> storage_gb: ")));
    assert!(rendered.iter().any(|e| e.starts_with("storage -> containers -> 0 -> name: ")));
}

#[test]
fn test_bad_enum_is_parse_error() {
    let err = ConfigLoader::from_yaml_str("project: myapp\nenvironment: dev\ndatabase:\n  tier: gold\n")
        .unwrap_err();
    assert!(matches!(err, SpecError::Yaml(_)));
}

#[test]
fn test_no_resources() {
    let config = ConfigLoader::from_yaml_str("project: myapp\nenvironment: staging\n").unwrap();
    assert!(!config.has_resources());
    assert_eq!(config.region, "eastus");
}
