//! Logging initialization for the CLI
//!
//! Log lines always go to stderr so stdout carries only command output.
//! `RUST_LOG` takes precedence; otherwise `-v` flags pick the level, falling
//! back to the configured default.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LoggingConfig;

/// Initialize the global tracing subscriber.
pub fn init_logging(config: &LoggingConfig, verbosity: u8) -> anyhow::Result<()> {
    let env_filter = build_env_filter(config, verbosity);
    let subscriber = tracing_subscriber::registry().with(env_filter);

    if config.json {
        subscriber
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_span_list(false)
                    .with_writer(std::io::stderr),
            )
            .try_init()?;
    } else {
        subscriber
            .with(
                fmt::layer()
                    .with_target(false)
                    .without_time()
                    .with_writer(std::io::stderr),
            )
            .try_init()?;
    }

    Ok(())
}

fn build_env_filter(config: &LoggingConfig, verbosity: u8) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter_directive(config, verbosity)))
}

fn filter_directive(config: &LoggingConfig, verbosity: u8) -> String {
    match verbosity {
        0 => config.level.to_ascii_lowercase(),
        1 => "info".to_string(),
        2 => "debug".to_string(),
        _ => "trace".to_string(),
    }
}
