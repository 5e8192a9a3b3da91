//! Logging initialization
//!
//! The resolver itself only emits `tracing` events. Hosts (transport
//! layers, examples, tests) call [`init_logging`] once at startup to
//! install a subscriber configured from the environment:
//!
//! - `GENECONV_LOG`: filter directives (e.g. "debug" or "geneconv=debug"),
//!   defaults to "info"
//! - `GENECONV_LOG_FORMAT`: "text" (default) or "json"

use anyhow::{Context, Result};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable text format
    #[default]
    Text,
    /// JSON format for structured logging
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "pretty" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            _ => Err(anyhow::anyhow!("Invalid log format: {}", s)),
        }
    }
}

/// Initialize the global tracing subscriber from the environment.
///
/// Should only be called once at application startup.
pub fn init_logging() -> Result<()> {
    let filter = match std::env::var("GENECONV_LOG") {
        Ok(directives) => {
            EnvFilter::try_new(directives).context("Failed to parse GENECONV_LOG directives")?
        },
        Err(_) => EnvFilter::new("info"),
    };

    let format = match std::env::var("GENECONV_LOG_FORMAT") {
        Ok(value) => value.parse::<LogFormat>()?,
        Err(_) => LogFormat::default(),
    };

    let fmt_layer = fmt::layer().with_target(true);

    match format {
        LogFormat::Text => {
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt_layer)
                .try_init()?;
        },
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt_layer.json())
                .try_init()?;
        },
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_format_from_str() {
        assert_eq!("text".parse::<LogFormat>().unwrap(), LogFormat::Text);
        assert_eq!("JSON".parse::<LogFormat>().unwrap(), LogFormat::Json);
        assert!("yaml".parse::<LogFormat>().is_err());
    }
}
