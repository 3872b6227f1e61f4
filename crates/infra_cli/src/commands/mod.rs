//! CLI command definitions.
//!
//! This module defines the command structure for the infra-config CLI and the
//! reporting helpers shared by its subcommands.

use std::path::Path;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};

use infra_policy::{GateResult, RuleSeverity};
use infra_spec::{ConfigLoader, InfraConfig, SpecError};

pub mod transform;
pub mod validate;

/// infra-config - Config-to-Terraform infrastructure platform
#[derive(Parser)]
#[command(name = "infra-config")]
#[command(version, about = "Config-to-Terraform infrastructure platform")]
#[command(long_about = r#"
infra-config validates a YAML infrastructure description, enforces role-based
policies, and generates Azure Terraform variable files.

WORKFLOWS:
  validate   → Validate configuration and policies without writing output
  transform  → Validate, then write <resource>.tfvars.json files

EXIT CODES:
  0 - Success
  1 - General error
  2 - Invalid arguments or config file not found
  3 - Configuration validation failure
  4 - Policy violation
"#)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate a configuration file without generating output
    Validate(validate::ValidateArgs),

    /// Transform a configuration file into Terraform variables
    Transform(transform::TransformArgs),
}

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Load a configuration, printing field-level errors on validation failure.
pub fn load_config(path: &Path) -> Result<InfraConfig> {
    match ConfigLoader::from_path(path) {
        Ok(config) => Ok(config),
        Err(err) => {
            // Parse errors are reported once, through the error chain in main.
            if let SpecError::Invalid(errors) = &err {
                eprintln!("Validation errors:");
                for error in errors {
                    eprintln!("  • {}", error);
                }
            }
            Err(err).with_context(|| format!("Failed to load configuration from {:?}", path))
        }
    }
}

/// Print policy violations as a bulleted list.
pub fn print_violations(gate: &GateResult) {
    eprintln!("Policy violations:");
    for violation in &gate.violations {
        match violation.severity {
            RuleSeverity::Error => eprintln!("  • {}", violation.message),
            RuleSeverity::Warning => eprintln!("  • {} (recommendation)", violation.message),
        }
    }
}
