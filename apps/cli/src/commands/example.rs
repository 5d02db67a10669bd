//! # Example Subcommand
//!
//! Prints the canned example resource for a resource type.

use std::io::Write;

use anyhow::Result;
use clap::Args;

use fhirkit_format::format_resource;
use fhirkit_models::{example_resource_types, generate_example};

use crate::config::CliConfig;

/// Arguments for the `fhirkit example` subcommand.
#[derive(Args, Debug)]
pub struct ExampleArgs {
    /// Resource type to print an example for (e.g. Patient).
    #[arg(value_name = "RESOURCE_TYPE", required_unless_present = "list")]
    pub resource_type: Option<String>,

    /// List the resource types that have an example.
    #[arg(long, conflicts_with = "resource_type")]
    pub list: bool,

    /// Spaces per indentation level (default: 2, or the configured value).
    #[arg(long, value_name = "N")]
    pub indent: Option<usize>,
}

/// Execute the example subcommand.
///
/// Returns exit code 1, with a diagnostic on `err`, when the resource type
/// has no example.
pub fn run_example(
    args: &ExampleArgs,
    config: &CliConfig,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<u8> {
    if args.list {
        for resource_type in example_resource_types() {
            writeln!(out, "{}", resource_type)?;
        }
        return Ok(0);
    }

    let resource_type = args.resource_type.as_deref().unwrap_or_default();
    let Some(example) = generate_example(resource_type) else {
        tracing::debug!(resource_type, "no canned example");
        writeln!(err, "No example available for resource type: {}", resource_type)?;
        writeln!(err, "Available: {}", example_resource_types().join(", "))?;
        return Ok(1);
    };

    let text = format_resource(&example, &config.format_options(args.indent)?)?;
    writeln!(out, "{}", text)?;
    Ok(0)
}
