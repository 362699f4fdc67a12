//! CLI argument parsing with clap
//!
//! This module defines the command-line interface structure using clap,
//! including all commands, arguments, and the merge of CLI overrides into
//! loaded settings.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

// Include shadow-rs generated build information
use shadow_rs::shadow;
shadow!(build);

use crate::config::settings::Settings;
use crate::config::Environment;

/// A user directory CRUD web application backed by MongoDB
#[derive(Parser, Debug)]
#[command(name = "userhub")]
#[command(about = "A user directory CRUD web application backed by MongoDB")]
#[command(long_about = "
Userhub serves HTML pages to list, create, edit, and delete user records
stored in a MongoDB collection.

EXAMPLES:
    # Start the server with default configuration
    userhub serve

    # Start server on custom host and port
    userhub serve --host 0.0.0.0 --port 8080

    # Use custom configuration file
    userhub --config /path/to/config.toml serve

    # Run in development mode with verbose logging
    userhub --env development --verbose serve

    # Check configuration without starting server
    userhub serve --dry-run

For more information about configuration options, see the documentation.
")]
#[command(version = build::CLAP_LONG_VERSION)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Configuration file path
    ///
    /// Specify a custom configuration file to use instead of the layered
    /// `config/` directory. The file should be in TOML format.
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Override environment detection
    ///
    /// Force the application to use a specific environment configuration.
    /// Available values: development (dev), test, staging (stage),
    /// production (prod)
    #[arg(short, long)]
    pub env: Option<Environment>,

    /// Enable verbose logging
    ///
    /// Increases log output to debug level. Cannot be used with --quiet.
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress non-error output
    ///
    /// Reduces log output to error level only. Cannot be used with
    /// --verbose.
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the web server (default)
    Serve {
        /// Host address to bind to
        ///
        /// Use 127.0.0.1 for localhost only, or 0.0.0.0 to accept
        /// connections from any interface.
        #[arg(long, value_name = "ADDRESS")]
        host: Option<String>,

        /// Port number to listen on
        #[arg(long, value_name = "PORT")]
        port: Option<u16>,

        /// Validate configuration and exit without starting the server
        #[arg(long)]
        dry_run: bool,
    },
}

impl Cli {
    /// Merge CLI overrides into loaded settings.
    ///
    /// CLI arguments take priority over every configuration file and
    /// environment variable.
    pub fn apply_to(&self, settings: &mut Settings) {
        if self.verbose {
            settings.logger.level = "debug".to_string();
        } else if self.quiet {
            settings.logger.level = "error".to_string();
        }

        if let Some(Commands::Serve { host, port, .. }) = &self.command {
            if let Some(host) = host {
                settings.server.host = host.clone();
            }
            if let Some(port) = port {
                settings.server.port = *port;
            }
        }
    }

    /// Whether the invocation only validates configuration
    pub fn is_dry_run(&self) -> bool {
        matches!(
            self.command,
            Some(Commands::Serve { dry_run: true, .. })
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings_with_url() -> Settings {
        let mut settings = Settings::default();
        settings.database.url = "mongodb://localhost:27017/userhub".to_string();
        settings
    }

    #[test]
    fn test_parse_defaults_to_no_command() {
        let cli = Cli::parse_from(["userhub"]);
        assert!(cli.command.is_none());
        assert!(!cli.is_dry_run());
    }

    #[test]
    fn test_serve_host_port_override_settings() {
        let cli = Cli::parse_from(["userhub", "serve", "--host", "0.0.0.0", "--port", "8080"]);
        let mut settings = settings_with_url();
        cli.apply_to(&mut settings);
        assert_eq!(settings.server.host, "0.0.0.0");
        assert_eq!(settings.server.port, 8080);
    }

    #[test]
    fn test_verbose_raises_log_level() {
        let cli = Cli::parse_from(["userhub", "--verbose"]);
        let mut settings = settings_with_url();
        cli.apply_to(&mut settings);
        assert_eq!(settings.logger.level, "debug");
    }

    #[test]
    fn test_quiet_lowers_log_level() {
        let cli = Cli::parse_from(["userhub", "--quiet"]);
        let mut settings = settings_with_url();
        cli.apply_to(&mut settings);
        assert_eq!(settings.logger.level, "error");
    }

    #[test]
    fn test_verbose_conflicts_with_quiet() {
        let result = Cli::try_parse_from(["userhub", "--verbose", "--quiet"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_env_parses_aliases() {
        let cli = Cli::parse_from(["userhub", "--env", "prod"]);
        assert_eq!(cli.env, Some(Environment::Production));
    }

    #[test]
    fn test_dry_run_flag() {
        let cli = Cli::parse_from(["userhub", "serve", "--dry-run"]);
        assert!(cli.is_dry_run());
    }
}
