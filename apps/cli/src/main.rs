//! # fhirkit CLI entry point
//!
//! Parses command-line arguments, loads configuration, sets up logging and
//! dispatches to the subcommand handlers.

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use fhirkit_cli::commands::{
    run_example, run_format, run_validate, ExampleArgs, FormatArgs, ValidateArgs,
};
use fhirkit_cli::{logging, CliConfig};

/// Validate, format and generate example FHIR resources.
#[derive(Parser, Debug)]
#[command(name = "fhirkit", version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a YAML configuration file.
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate FHIR JSON resources against the built-in rules.
    Validate(ValidateArgs),

    /// Reorder a resource's keys canonically and pretty-print it.
    Format(FormatArgs),

    /// Print a canned example resource.
    Example(ExampleArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match CliConfig::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::from(1);
        }
    };

    if let Err(e) = logging::init_logging(&config.logging, cli.verbose) {
        eprintln!("error: failed to initialize logging: {e}");
        return ExitCode::from(1);
    }

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "fhirkit starting");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let mut err = std::io::stderr();

    let result = match &cli.command {
        Commands::Validate(args) => run_validate(args, &config, &mut out, &mut err),
        Commands::Format(args) => run_format(args, &config, &mut out),
        Commands::Example(args) => run_example(args, &config, &mut out, &mut err),
    };

    let code = match result {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("{e:#}");
            eprintln!("error: {e:#}");
            1
        }
    };

    if let Err(e) = out.flush() {
        tracing::error!(error = %e, "failed to flush stdout");
        return ExitCode::from(1);
    }

    ExitCode::from(code)
}
