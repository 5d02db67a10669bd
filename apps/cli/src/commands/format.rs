//! # Format Subcommand
//!
//! Rewrites a FHIR JSON file with canonical key order and indentation.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use fhirkit_format::{format_resource, load_resource, write_resource};

use crate::config::CliConfig;

/// Arguments for the `fhirkit format` subcommand.
#[derive(Args, Debug)]
pub struct FormatArgs {
    /// FHIR JSON resource file to format.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Write the formatted resource to PATH instead of stdout.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Spaces per indentation level (default: 2, or the configured value).
    #[arg(long, value_name = "N")]
    pub indent: Option<usize>,
}

/// Execute the format subcommand.
pub fn run_format(args: &FormatArgs, config: &CliConfig, out: &mut dyn Write) -> Result<u8> {
    let options = config.format_options(args.indent)?;
    let resource = load_resource(&args.file)
        .with_context(|| format!("failed to load {}", args.file.display()))?;

    match &args.output {
        Some(path) => {
            write_resource(path, &resource, &options)?;
            tracing::info!(input = %args.file.display(), output = %path.display(), "formatted resource");
            writeln!(out, "Formatted resource written to {}", path.display())?;
        }
        None => {
            let text = format_resource(&resource, &options)?;
            writeln!(out, "{}", text)?;
        }
    }

    Ok(0)
}
