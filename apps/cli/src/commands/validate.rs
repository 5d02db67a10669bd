//! # Validate Subcommand
//!
//! Loads one or more FHIR JSON files and reports rule-based validation
//! results. Exit code is 0 only when every file loads and validates.
//!
//! With `operation-outcome` output a single file yields a bare
//! OperationOutcome; several files yield one `collection` Bundle whose
//! entries carry the file in `fullUrl`.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use serde_json::{json, Value};

use fhirkit_format::{format_resource, load_resource};
use fhirkit_validator::{validate, ValidationOutcome, ValidationResult};

use crate::config::{CliConfig, OutputFormat};

/// Arguments for the `fhirkit validate` subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// FHIR JSON resource file(s) to validate.
    #[arg(value_name = "FILE", required = true)]
    pub files: Vec<PathBuf>,

    /// Report format (defaults to the configured format, `text` otherwise).
    #[arg(long, value_enum)]
    pub output_format: Option<OutputFormat>,
}

#[derive(Debug, Serialize)]
struct FileReport {
    file: String,
    #[serde(flatten)]
    result: ValidationResult,
}

/// Execute the validate subcommand.
///
/// Reports go to `out`; files that fail to load are reported on `err`.
/// Returns exit code: 0 if every resource is valid, 1 otherwise.
pub fn run_validate(
    args: &ValidateArgs,
    config: &CliConfig,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<u8> {
    let output_format = args.output_format.unwrap_or(config.validate.output_format);
    let mut all_valid = true;
    let mut outcomes = Vec::new();

    for (i, path) in args.files.iter().enumerate() {
        let resource = match load_resource(path) {
            Ok(resource) => resource,
            Err(e) => {
                tracing::error!(file = %path.display(), "{e}");
                writeln!(err, "error: {}: {e}", path.display())?;
                all_valid = false;
                continue;
            }
        };

        let outcome = validate(&resource);
        tracing::info!(
            file = %path.display(),
            valid = outcome.valid,
            errors = outcome.error_count(),
            warnings = outcome.warning_count(),
            "validated resource"
        );
        all_valid &= outcome.valid;

        match output_format {
            OutputFormat::Text => {
                if i > 0 {
                    writeln!(out)?;
                }
                write_text_report(out, &resource, &outcome)?;
            }
            OutputFormat::Json => {
                let report = FileReport {
                    file: path.display().to_string(),
                    result: outcome.to_result(),
                };
                writeln!(out, "{}", serde_json::to_string(&report)?)?;
            }
            OutputFormat::OperationOutcome => {
                outcomes.push((path, outcome.to_operation_outcome()));
            }
        }
    }

    if output_format == OutputFormat::OperationOutcome {
        let document = if args.files.len() == 1 {
            outcomes.pop().map(|(_, outcome)| outcome)
        } else {
            Some(outcome_bundle(outcomes))
        };
        if let Some(document) = document {
            writeln!(out, "{}", format_resource(&document, &config.format)?)?;
        }
    }

    Ok(if all_valid { 0 } else { 1 })
}

fn outcome_bundle(outcomes: Vec<(&PathBuf, Value)>) -> Value {
    let entries: Vec<Value> = outcomes
        .into_iter()
        .map(|(path, outcome)| {
            json!({
                "fullUrl": format!("file:{}", path.display()),
                "resource": outcome
            })
        })
        .collect();

    json!({
        "resourceType": "Bundle",
        "type": "collection",
        "entry": entries
    })
}

/// `{resourceType}/{id}`, with placeholders for missing parts.
pub fn resource_label(resource: &Value) -> String {
    let resource_type = resource
        .get("resourceType")
        .and_then(Value::as_str)
        .unwrap_or("Unknown");
    let id = resource
        .get("id")
        .and_then(Value::as_str)
        .unwrap_or("unknown");
    format!("{}/{}", resource_type, id)
}

fn write_text_report(out: &mut dyn Write, resource: &Value, outcome: &ValidationOutcome) -> Result<()> {
    writeln!(out, "Validating {}", resource_label(resource))?;

    if outcome.valid {
        writeln!(out, "✓ Resource is valid")?;
    } else {
        writeln!(out, "✗ Resource is invalid")?;
        for error in outcome.errors() {
            writeln!(out, "  - {}", error)?;
        }
    }

    if outcome.warning_count() > 0 {
        writeln!(out, "Warnings:")?;
        for warning in outcome.warnings() {
            writeln!(out, "  - {}", warning)?;
        }
    }

    Ok(())
}
