//! Logger module
//!
//! A logging setup based on `tracing-subscriber` with support for:
//! - Console output with color control
//! - File output with multiple formats (Full, Compact, JSON)
//! - Level filtering via configuration or the `RUST_LOG` variable

use std::io::IsTerminal;
use std::path::Path;
use std::sync::Mutex;

use serde::{Deserialize, Serialize};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn default_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_log_path() -> String {
    "logs/userhub.log".to_string()
}

/// Output format for file logging
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable single-line format
    #[default]
    Full,
    /// Condensed format
    Compact,
    /// Newline-delimited JSON
    Json,
}

/// Console output configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsoleConfig {
    /// Whether console output is enabled
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Whether to use ANSI colors (only honored on a TTY)
    #[serde(default = "default_true")]
    pub colored: bool,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            colored: true,
        }
    }
}

/// File output configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileConfig {
    /// Whether file output is enabled
    #[serde(default)]
    pub enabled: bool,

    /// Log file path
    #[serde(default = "default_log_path")]
    pub path: String,

    /// Output format
    #[serde(default)]
    pub format: LogFormat,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            path: default_log_path(),
            format: LogFormat::default(),
        }
    }
}

/// Complete logger configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggerConfig {
    /// Log level or filter directive, e.g. "info" or "userhub=debug"
    #[serde(default = "default_level")]
    pub level: String,

    /// Console output settings
    #[serde(default)]
    pub console: ConsoleConfig,

    /// File output settings
    #[serde(default)]
    pub file: FileConfig,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            console: ConsoleConfig::default(),
            file: FileConfig::default(),
        }
    }
}

impl LoggerConfig {
    /// Validate the logger configuration
    pub fn validate(&self) -> Result<(), String> {
        if !self.console.enabled && !self.file.enabled {
            return Err("at least one output (console or file) must be enabled".to_string());
        }
        if self.file.enabled && self.file.path.is_empty() {
            return Err("file output is enabled but file.path is empty".to_string());
        }
        Ok(())
    }
}

/// Initialize the logger with the given configuration
///
/// `RUST_LOG` takes precedence over the configured level when set.
pub fn init_logger(config: &LoggerConfig) -> anyhow::Result<()> {
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    match (config.console.enabled, config.file.enabled) {
        (true, true) => {
            let writer = open_log_file(&config.file)?;
            let registry = tracing_subscriber::registry()
                .with(filter)
                .with(console_layer(&config.console));
            match config.file.format {
                LogFormat::Full => registry
                    .with(fmt::layer().with_ansi(false).with_writer(writer))
                    .init(),
                LogFormat::Compact => registry
                    .with(fmt::layer().compact().with_ansi(false).with_writer(writer))
                    .init(),
                LogFormat::Json => registry
                    .with(fmt::layer().json().with_writer(writer))
                    .init(),
            }
        }
        (true, false) => {
            tracing_subscriber::registry()
                .with(filter)
                .with(console_layer(&config.console))
                .init();
        }
        (false, true) => {
            let writer = open_log_file(&config.file)?;
            let registry = tracing_subscriber::registry().with(filter);
            match config.file.format {
                LogFormat::Full => registry
                    .with(fmt::layer().with_ansi(false).with_writer(writer))
                    .init(),
                LogFormat::Compact => registry
                    .with(fmt::layer().compact().with_ansi(false).with_writer(writer))
                    .init(),
                LogFormat::Json => registry
                    .with(fmt::layer().json().with_writer(writer))
                    .init(),
            }
        }
        (false, false) => unreachable!("rejected by validate()"),
    }

    Ok(())
}

fn console_layer<S>(config: &ConsoleConfig) -> fmt::Layer<S>
where
    S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
{
    let is_tty = std::io::stdout().is_terminal();
    fmt::layer()
        .with_ansi(config.colored && is_tty)
        .with_target(true)
        .with_level(true)
}

fn open_log_file(config: &FileConfig) -> anyhow::Result<Mutex<std::fs::File>> {
    let path = Path::new(&config.path);
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)?;
    Ok(Mutex::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_console_only() {
        let config = LoggerConfig::default();
        assert!(config.console.enabled);
        assert!(!config.file.enabled);
        assert_eq!(config.level, "info");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_all_outputs_disabled_rejected() {
        let config = LoggerConfig {
            console: ConsoleConfig {
                enabled: false,
                colored: false,
            },
            ..LoggerConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_file_output_requires_path() {
        let config = LoggerConfig {
            file: FileConfig {
                enabled: true,
                path: String::new(),
                format: LogFormat::Json,
            },
            ..LoggerConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_log_format_deserializes_lowercase() {
        let config: FileConfig = toml::from_str("enabled = true\nformat = \"json\"\n").unwrap();
        assert_eq!(config.format, LogFormat::Json);
    }
}
