//! CLI configuration
//!
//! Defaults, optionally overridden by a YAML file passed with `--config`,
//! optionally overridden again by command-line flags.
//!
//! ```yaml
//! format:
//!   indent: 4
//! validate:
//!   output_format: operation-outcome
//! logging:
//!   level: info
//!   json: false
//! ```

use clap::ValueEnum;
use fhirkit_format::{FormatOptions, MAX_INDENT};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error", "off"];

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid YAML in config file: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    pub format: FormatOptions,
    pub validate: ValidateConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidateConfig {
    pub output_format: OutputFormat,
}

/// How `validate` reports its results on stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// Human-readable summary
    #[default]
    Text,
    /// One `{file, valid, errors, warnings}` JSON object per line
    Json,
    /// FHIR OperationOutcome resource
    OperationOutcome,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter level when neither `RUST_LOG` nor `-v` is given.
    pub level: String,
    /// Emit log lines as JSON.
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            json: false,
        }
    }
}

impl CliConfig {
    /// Load configuration from `path`, or defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_yaml(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        // An empty file deserializes to `null`; treat it as all defaults.
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        check_indent("format.indent", self.format.indent)?;

        let level = self.logging.level.to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::InvalidConfig(format!(
                "logging.level must be one of {}, got '{}'",
                LOG_LEVELS.join(", "),
                self.logging.level
            )));
        }

        Ok(())
    }

    /// Indentation to use, preferring an explicit command-line value.
    pub fn format_options(&self, indent_override: Option<usize>) -> Result<FormatOptions, ConfigError> {
        match indent_override {
            Some(indent) => {
                check_indent("--indent", indent)?;
                Ok(FormatOptions::with_indent(indent))
            }
            None => {
                check_indent("format.indent", self.format.indent)?;
                Ok(self.format)
            }
        }
    }
}

fn check_indent(name: &str, indent: usize) -> Result<(), ConfigError> {
    if indent > MAX_INDENT {
        return Err(ConfigError::InvalidConfig(format!(
            "{name} must be at most {MAX_INDENT}, got {indent}"
        )));
    }
    Ok(())
}
