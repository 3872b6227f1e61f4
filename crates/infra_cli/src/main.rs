//! infra-config CLI - Main entry point.
//!
//! Exit codes:
//! - 0: Success (including "nothing to transform")
//! - 1: General error
//! - 2: Invalid arguments or missing config file
//! - 3: Configuration validation failure
//! - 4: Policy violation

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use infra_iac::IacError;
use infra_spec::SpecError;

mod commands;

use commands::{Cli, Commands};

/// CI-friendly exit codes
pub struct ExitCodes;

impl ExitCodes {
    pub const SUCCESS: u8 = 0;
    pub const GENERAL_ERROR: u8 = 1;
    pub const INVALID_ARGS: u8 = 2;
    pub const VALIDATION_FAILURE: u8 = 3;
    pub const POLICY_VIOLATION: u8 = 4;
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let result = match cli.command {
        Commands::Validate(args) => commands::validate::execute(args),
        Commands::Transform(args) => commands::transform::execute(args),
    };

    match result {
        Ok(()) => ExitCode::from(ExitCodes::SUCCESS),
        Err(e) => {
            eprintln!("❌ Error: {:#}", e);
            ExitCode::from(categorize_error(&e))
        }
    }
}

fn init_logging(verbose: bool, quiet: bool) {
    let default_filter = if verbose {
        "infra=debug,warn"
    } else if quiet {
        "error"
    } else {
        "infra=info,warn"
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    // Already initialized when embedded in tests; keep going either way.
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .try_init();
}

/// Categorize error to determine exit code
fn categorize_error(e: &anyhow::Error) -> u8 {
    for cause in e.chain() {
        if let Some(spec) = cause.downcast_ref::<SpecError>() {
            return match spec {
                SpecError::NotFound(_) => ExitCodes::INVALID_ARGS,
                SpecError::Invalid(_) | SpecError::Yaml(_) => ExitCodes::VALIDATION_FAILURE,
                _ => ExitCodes::GENERAL_ERROR,
            };
        }
        if let Some(IacError::PolicyBlocked(_)) = cause.downcast_ref::<IacError>() {
            return ExitCodes::POLICY_VIOLATION;
        }
    }
    ExitCodes::GENERAL_ERROR
}
