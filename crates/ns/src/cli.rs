//! CLI argument parsing using clap derive macros.
//!
//! This module defines the command-line interface for the ns CLI.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// ns - search exported notes and tags
#[derive(Parser, Debug)]
#[command(name = "ns")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbose output (-v for debug logs, -vv for trace logs)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Output JSON instead of tables
    #[arg(long, global = true)]
    pub json: bool,

    /// Disable colors in output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Config file path (default: ~/.config/ns/config.toml)
    #[arg(long, global = true, env = "NS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Primary tag operator (overrides config)
    #[arg(long, global = true)]
    pub tag_operator: Option<String>,

    /// Localized tag operator (overrides config)
    #[arg(long, global = true)]
    pub localized_tag_operator: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search notes
    #[command(alias = "n")]
    Notes {
        /// JSON file containing an array of notes
        file: PathBuf,

        /// Search text (e.g., "groceries tag:home")
        #[arg(default_value = "")]
        query: String,

        /// Search the trash instead of live notes
        #[arg(long)]
        deleted: bool,

        /// Only notes without tags
        #[arg(long)]
        untagged: bool,

        /// Only notes with this exact tag
        #[arg(long)]
        tag: Option<String>,

        /// Only notes with this system tag (e.g., pinned)
        #[arg(long)]
        system_tag: Option<String>,

        /// Only notes whose first line contains this text
        #[arg(long)]
        title: Option<String>,

        /// Only notes containing this text verbatim (case-sensitive)
        #[arg(long)]
        exact: Option<String>,

        /// Limit results
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Suggest tags for the last word of a search text
    #[command(alias = "t")]
    Tags {
        /// JSON file containing an array of tags
        file: PathBuf,

        /// Search text being typed
        #[arg(default_value = "")]
        query: String,

        /// Limit results
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Show how a search text is tokenized
    Parse {
        /// Search text
        query: String,
    },

    /// Replace the last word of a search text with an accepted suggestion
    Complete {
        /// Search text being typed
        query: String,

        /// Accepted suggestion
        word: String,

        /// Insert the suggestion as a tag reference
        #[arg(long)]
        tag: bool,
    },

    /// View and edit configuration
    Config {
        #[command(subcommand)]
        command: Option<ConfigCommands>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

/// Shell types for completions
#[derive(ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    Powershell,
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show current configuration (default)
    Show,

    /// Set a configuration value
    Set {
        /// Config key (e.g., search.tag_operator, output.color)
        key: String,

        /// Value to set
        value: String,
    },

    /// Show config file path
    Path,
}
