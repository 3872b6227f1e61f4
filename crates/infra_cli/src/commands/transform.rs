//! Transform command - Generate Terraform variable files.
//!
//! Policies for every resource kind are checked first; nothing is written
//! unless all of them pass.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use serde_json::json;
use tracing::info;

use infra_iac::{IacError, Pipeline, TfVarsWriter, TransformContext};
use infra_policy::UserRole;

use super::{load_config, print_violations, OutputFormat};

#[derive(Args)]
pub struct TransformArgs {
    /// Path to config.yaml file
    config: PathBuf,

    /// Output directory for tfvars files
    #[arg(short, long, default_value = "./output")]
    output: PathBuf,

    /// User role for policy validation
    #[arg(short, long, env = "INFRA_CONFIG_ROLE", default_value = "developer")]
    role: UserRole,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

pub fn execute(args: TransformArgs) -> Result<()> {
    info!("Transforming {:?} as {}", args.config, args.role);

    let config = load_config(&args.config)?;
    let ctx = TransformContext::new(&config, args.role);

    let outputs = match Pipeline::generate(&ctx) {
        Ok(outputs) => outputs,
        Err(IacError::PolicyBlocked(gate)) => {
            print_violations(&gate);
            return Err(IacError::PolicyBlocked(gate).into());
        }
        Err(e) => return Err(e.into()),
    };

    if outputs.is_empty() {
        if args.format == OutputFormat::Json {
            println!("{}", json!({ "files": [] }));
        } else {
            println!("No resources configured to transform");
        }
        return Ok(());
    }

    let writer = TfVarsWriter::new(&args.output);
    let written = writer
        .write_all(&outputs)
        .with_context(|| format!("Failed to write tfvars to {:?}", args.output))?;

    if args.format == OutputFormat::Json {
        let files: Vec<String> = written.iter().map(|p| p.display().to_string()).collect();
        println!("{}", serde_json::to_string_pretty(&json!({ "files": files }))?);
    } else {
        println!("✅ Transformation complete");
        println!();
        println!("Generated Files");
        for path in &written {
            println!("  ✓ {}", path.display());
        }
    }

    Ok(())
}
