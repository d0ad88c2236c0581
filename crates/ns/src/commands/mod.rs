//! Command implementations for the ns CLI.
//!
//! This module contains the actual command handlers that are invoked by the CLI.

pub mod complete;
pub mod completions;
pub mod config;
pub mod notes;
pub mod parse;
pub mod tags;

use notesearch_rs::QuerySettings;

use crate::cli::Cli;
use config::Config;

/// Error type for command execution.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for command execution.
pub type Result<T> = std::result::Result<T, CommandError>;

/// Context for command execution, containing common dependencies.
pub struct CommandContext {
    /// Whether to output JSON.
    pub json_output: bool,
    /// Whether to use colors.
    pub use_colors: bool,
    /// Whether to be quiet (errors only).
    pub quiet: bool,
    /// Effective tag-operator settings (config file, then flags).
    pub settings: QuerySettings,
}

impl CommandContext {
    /// Creates a new command context from CLI arguments and the loaded config.
    ///
    /// Command-line flags take precedence over the config file.
    pub fn new(cli: &Cli, config: &Config) -> Self {
        let mut settings = config.search.clone();
        if let Some(operator) = &cli.tag_operator {
            settings.tag_operator = operator.clone();
        }
        if let Some(operator) = &cli.localized_tag_operator {
            settings.localized_tag_operator = operator.clone();
        }

        let use_colors = !cli.no_color
            && config.output.color.unwrap_or(true)
            && std::env::var_os("NO_COLOR").is_none();

        Self {
            json_output: cli.json,
            use_colors,
            quiet: cli.quiet,
            settings,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_context_uses_config_operators() {
        let cli = Cli::parse_from(["ns", "parse", "x"]);
        let config = Config {
            search: QuerySettings::new("t:", "etiqueta:"),
            ..Config::default()
        };

        let ctx = CommandContext::new(&cli, &config);
        assert_eq!(ctx.settings, QuerySettings::new("t:", "etiqueta:"));
    }

    #[test]
    fn test_context_flags_override_config() {
        let cli = Cli::parse_from(["ns", "--tag-operator", "label:", "parse", "x"]);
        let config = Config {
            search: QuerySettings::new("t:", "etiqueta:"),
            ..Config::default()
        };

        let ctx = CommandContext::new(&cli, &config);
        assert_eq!(ctx.settings.tag_operator, "label:");
        assert_eq!(ctx.settings.localized_tag_operator, "etiqueta:");
    }

    #[test]
    fn test_context_no_color_flag() {
        let cli = Cli::parse_from(["ns", "--no-color", "parse", "x"]);
        let ctx = CommandContext::new(&cli, &Config::default());
        assert!(!ctx.use_colors);
    }

    #[test]
    fn test_context_color_disabled_in_config() {
        let cli = Cli::parse_from(["ns", "parse", "x"]);
        let config = Config {
            output: config::OutputConfig { color: Some(false) },
            ..Config::default()
        };
        let ctx = CommandContext::new(&cli, &config);
        assert!(!ctx.use_colors);
    }
}
