//! Validate command - Check a configuration and its policies.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use serde_json::json;
use tracing::info;

use infra_iac::{IacError, Pipeline, TransformContext};
use infra_policy::UserRole;
use infra_spec::InfraConfig;

use super::{load_config, print_violations, OutputFormat};

#[derive(Args)]
pub struct ValidateArgs {
    /// Path to config.yaml file
    config: PathBuf,

    /// User role for policy validation
    #[arg(short, long, env = "INFRA_CONFIG_ROLE", default_value = "developer")]
    role: UserRole,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

pub fn execute(args: ValidateArgs) -> Result<()> {
    info!("Validating {:?} as {}", args.config, args.role);

    let config = load_config(&args.config)?;
    let ctx = TransformContext::new(&config, args.role);
    let gate = Pipeline::evaluate(&ctx);

    if args.format == OutputFormat::Json {
        let report = json!({
            "valid": gate.passed,
            "role": args.role,
            "violations": gate.violations,
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else if gate.passed {
        print_summary(&config);
    } else {
        print_violations(&gate);
    }

    if !gate.passed {
        return Err(IacError::PolicyBlocked(gate).into());
    }

    Ok(())
}

fn configured(present: bool) -> &'static str {
    if present {
        "Configured"
    } else {
        "Not configured"
    }
}

fn print_summary(config: &InfraConfig) {
    println!("✅ Configuration is valid");
    println!();
    println!("Configuration Summary");
    println!("  Project:     {}", config.project);
    println!("  Environment: {}", config.environment);
    println!("  Region:      {}", config.region);
    println!("  Database:    {}", configured(config.database.is_some()));
    println!("  Storage:     {}", configured(config.storage.is_some()));
}
