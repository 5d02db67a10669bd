//! # fhirkit CLI
//!
//! Subcommand handlers for the `fhirkit` binary. Each handler writes its
//! command output to the supplied writer and returns the process exit code:
//! 0 on success, 1 on an invalid resource or a missing example.

pub mod commands;
pub mod config;
pub mod logging;

pub use config::{CliConfig, ConfigError, OutputFormat};
