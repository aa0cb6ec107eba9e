// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Structured logging configuration for hosts embedding the engine

use anyhow::Result;
use std::env;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Output format (json, pretty, compact)
    pub format: LogFormat,
    /// Service name for structured logging
    pub service_name: String,
}

#[derive(Debug, Clone)]
pub enum LogFormat {
    /// JSON format for production logging
    Json,
    /// Pretty format for development
    Pretty,
    /// Compact format for space-constrained environments
    Compact,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Pretty,
            service_name: "workout-analytics".to_string(),
        }
    }
}

impl LoggingConfig {
    /// Create logging configuration from environment variables
    pub fn from_env() -> Self {
        let level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

        let format = match env::var("LOG_FORMAT").as_deref() {
            Ok("json") => LogFormat::Json,
            Ok("compact") => LogFormat::Compact,
            _ => LogFormat::Pretty,
        };

        Self {
            level,
            format,
            ..Self::default()
        }
    }

    /// Initialize the global tracing subscriber with this configuration
    pub fn init(self) -> Result<()> {
        let filter = EnvFilter::try_new(&self.level)
            .unwrap_or_else(|_| EnvFilter::new("info"));

        let registry = tracing_subscriber::registry().with(filter);

        match self.format {
            LogFormat::Json => {
                registry.with(tracing_subscriber::fmt::layer().json()).try_init()?;
            }
            LogFormat::Pretty => {
                registry.with(tracing_subscriber::fmt::layer().pretty()).try_init()?;
            }
            LogFormat::Compact => {
                registry.with(tracing_subscriber::fmt::layer().compact()).try_init()?;
            }
        }

        info!(
            service = self.service_name.as_str(),
            version = env!("CARGO_PKG_VERSION"),
            "logging initialized"
        );
        Ok(())
    }
}

/// Initialize logging from environment variables
pub fn init_from_env() -> Result<()> {
    LoggingConfig::from_env().init()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LoggingConfig::default();
        assert_eq!(config.level, "info");
        assert!(matches!(config.format, LogFormat::Pretty));
        assert_eq!(config.service_name, "workout-analytics");
    }

    #[test]
    fn test_from_env_falls_back_to_pretty() {
        let config = LoggingConfig::from_env();
        assert!(!config.level.is_empty());
    }
}
