//! Config command implementation.
//!
//! View and manage configuration settings.
//! Config file is located at ~/.config/ns/config.toml.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use directories::BaseDirs;
use notesearch_rs::QuerySettings;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{CommandContext, CommandError, Result};

/// Current config file version. Increment when making breaking changes to schema.
const CONFIG_VERSION: u32 = 1;

/// Configuration file structure.
#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Config schema version for migrations.
    /// Defaults to current version when not present in file.
    #[serde(default = "default_version")]
    pub version: u32,

    /// Tag-operator settings used when parsing search text.
    #[serde(default)]
    pub search: QuerySettings,

    /// Output settings.
    #[serde(default)]
    pub output: OutputConfig,
}

/// Returns the current config version (used by serde default).
fn default_version() -> u32 {
    CONFIG_VERSION
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            search: QuerySettings::default(),
            output: OutputConfig::default(),
        }
    }
}

/// Output configuration.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Enable colors.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<bool>,
}

/// Gets the config directory path.
/// Uses XDG-style paths: ~/.config/ns/ on all platforms.
fn get_config_dir() -> Result<PathBuf> {
    if let Ok(xdg_config) = env::var("XDG_CONFIG_HOME") {
        return Ok(PathBuf::from(xdg_config).join("ns"));
    }

    BaseDirs::new()
        .map(|dirs| dirs.home_dir().join(".config").join("ns"))
        .ok_or_else(|| CommandError::Config("Could not determine config directory".to_string()))
}

/// Gets the config file path.
///
/// An explicit path (from `--config` or `NS_CONFIG`) wins over the default
/// location.
pub fn get_config_path(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }

    let config_dir = get_config_dir()?;
    Ok(config_dir.join("config.toml"))
}

/// Loads the configuration from disk.
///
/// A missing file yields the default configuration.
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let path = get_config_path(explicit)?;

    if !path.exists() {
        debug!(path = %path.display(), "no config file, using defaults");
        return Ok(Config::default());
    }

    let content = fs::read_to_string(&path)
        .map_err(|e| CommandError::Config(format!("Failed to read config: {}", e)))?;

    let config = parse_config(&content)?;
    debug!(path = %path.display(), "loaded config");
    Ok(config)
}

/// Parses config file contents.
fn parse_config(content: &str) -> Result<Config> {
    let config: Config = toml::from_str(content)
        .map_err(|e| CommandError::Config(format!("Failed to parse config: {}", e)))?;

    migrate_config(config)
}

/// Migrates config to current version if needed.
///
/// Version 1 is the first schema, so files without a version (0) or with an
/// older one carry the same fields and only need the version stamped. A file
/// written by a newer release keeps the fields this release understands.
fn migrate_config(mut config: Config) -> Result<Config> {
    match config.version {
        CONFIG_VERSION => return Ok(config),
        version if version < CONFIG_VERSION => {
            debug!(from = version, to = CONFIG_VERSION, "migrating config");
        }
        version => {
            debug!(
                found = version,
                supported = CONFIG_VERSION,
                "config written by a newer version, ignoring unknown fields"
            );
        }
    }

    config.version = CONFIG_VERSION;
    Ok(config)
}

/// Saves the configuration to disk.
fn save_config(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            CommandError::Config(format!("Failed to create config directory: {}", e))
        })?;
    }

    let content = toml::to_string_pretty(config)
        .map_err(|e| CommandError::Config(format!("Failed to serialize config: {}", e)))?;

    fs::write(path, content)
        .map_err(|e| CommandError::Config(format!("Failed to write config: {}", e)))?;

    Ok(())
}

/// Executes the config show command.
pub fn execute_show(ctx: &CommandContext, explicit: Option<&Path>) -> Result<()> {
    let config = load_config(explicit)?;
    let path = get_config_path(explicit)?;

    if ctx.json_output {
        let output = serde_json::json!({
            "path": path.display().to_string(),
            "exists": path.exists(),
            "config": config,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else if !ctx.quiet {
        use owo_colors::OwoColorize;

        let header = "Configuration";
        if ctx.use_colors {
            println!("{}\n", header.green().bold());
        } else {
            println!("{}\n", header);
        }

        println!("File: {}", path.display());
        println!("Exists: {}\n", path.exists());

        println!("[search]");
        println!("  tag_operator: {}", config.search.tag_operator);
        println!(
            "  localized_tag_operator: {}",
            config.search.localized_tag_operator
        );

        println!("\n[output]");
        if let Some(color) = config.output.color {
            println!("  color: {}", color);
        }
    }

    Ok(())
}

/// Options for the config set command.
#[derive(Debug)]
pub struct ConfigSetOptions {
    /// Config key, optionally dotted (`section.field`).
    pub key: String,
    /// New value.
    pub value: String,
}

/// Executes the config set command.
pub fn execute_set(
    ctx: &CommandContext,
    opts: &ConfigSetOptions,
    explicit: Option<&Path>,
) -> Result<()> {
    let mut config = load_config(explicit)?;
    let path = get_config_path(explicit)?;

    apply_setting(&mut config, &opts.key, &opts.value)?;
    save_config(&config, &path)?;

    if ctx.json_output {
        let output = serde_json::json!({
            "status": "success",
            "key": opts.key,
            "value": opts.value,
            "path": path.display().to_string(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else if !ctx.quiet {
        println!("Set {} = {}", opts.key, opts.value);
    }

    Ok(())
}

/// Updates a single config value by key.
fn apply_setting(config: &mut Config, key: &str, value: &str) -> Result<()> {
    match key.split_once('.') {
        Some(("search", "tag_operator")) => {
            config.search.tag_operator = non_empty_operator(value)?;
        }
        Some(("search", "localized_tag_operator")) => {
            config.search.localized_tag_operator = non_empty_operator(value)?;
        }
        Some(("output", "color")) => {
            config.output.color = Some(parse_bool(value)?);
        }
        _ => {
            return Err(CommandError::Config(format!(
                "Unknown config key '{}'. Valid keys: search.tag_operator, search.localized_tag_operator, output.color",
                key
            )));
        }
    }
    Ok(())
}

/// Rejects an empty operator, which would turn every word into a tag.
fn non_empty_operator(value: &str) -> Result<String> {
    if value.trim().is_empty() {
        return Err(CommandError::Config(
            "Tag operator cannot be empty".to_string(),
        ));
    }
    Ok(value.to_string())
}

/// Executes the config path command.
pub fn execute_path(ctx: &CommandContext, explicit: Option<&Path>) -> Result<()> {
    let path = get_config_path(explicit)?;

    if ctx.json_output {
        let output = serde_json::json!({
            "path": path.display().to_string(),
            "exists": path.exists(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", path.display());
    }

    Ok(())
}

/// Parses a boolean value from string.
fn parse_bool(s: &str) -> Result<bool> {
    match s.to_lowercase().as_str() {
        "true" | "yes" | "1" | "on" => Ok(true),
        "false" | "no" | "0" | "off" => Ok(false),
        _ => Err(CommandError::Config(format!(
            "Invalid boolean value '{}'. Use true/false, yes/no, 1/0, or on/off",
            s
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::TempDir;

    #[test]
    fn test_parse_bool_true_values() {
        for value in ["true", "TRUE", "yes", "1", "on"] {
            assert!(parse_bool(value).unwrap(), "{value} should be true");
        }
    }

    #[test]
    fn test_parse_bool_false_values() {
        for value in ["false", "No", "0", "off"] {
            assert!(!parse_bool(value).unwrap(), "{value} should be false");
        }
    }

    #[test]
    fn test_parse_bool_invalid() {
        assert!(matches!(parse_bool("maybe"), Err(CommandError::Config(_))));
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.version, CONFIG_VERSION);
        assert_eq!(config.search, QuerySettings::default());
        assert!(config.output.color.is_none());
    }

    #[test]
    fn test_config_deserialization() {
        let config = parse_config(
            r#"
version = 1

[search]
tag_operator = "tag:"
localized_tag_operator = "etiqueta:"

[output]
color = false
"#,
        )
        .unwrap();

        assert_eq!(config.search.localized_tag_operator, "etiqueta:");
        assert_eq!(config.output.color, Some(false));
    }

    #[test]
    fn test_config_deserialization_empty() {
        let config = parse_config("").unwrap();
        assert_eq!(config.version, CONFIG_VERSION);
        assert_eq!(config.search, QuerySettings::default());
    }

    #[test]
    fn test_config_deserialization_partial() {
        let config = parse_config("[search]\nlocalized_tag_operator = \"étiquette:\"\n").unwrap();
        assert_eq!(config.search.tag_operator, "tag:");
        assert_eq!(config.search.localized_tag_operator, "étiquette:");
    }

    #[test]
    fn test_config_deserialization_invalid() {
        assert!(matches!(
            parse_config("search = 3"),
            Err(CommandError::Config(_))
        ));
    }

    #[test]
    fn test_config_deserialization_with_future_version() {
        let config = parse_config("version = 99").unwrap();
        assert_eq!(config.version, CONFIG_VERSION);
    }

    #[test]
    fn test_migrate_config_stamps_older_version() {
        let config = parse_config("version = 0\n[search]\ntag_operator = \"label:\"\n").unwrap();
        assert_eq!(config.version, CONFIG_VERSION);
        assert_eq!(config.search.tag_operator, "label:");
    }

    #[test]
    fn test_migrate_config_keeps_current_version() {
        let config = Config::default();
        let migrated = migrate_config(config).unwrap();
        assert_eq!(migrated.version, CONFIG_VERSION);
        assert_eq!(migrated.search, QuerySettings::default());
    }

    #[test]
    fn test_apply_setting() {
        let mut config = Config::default();
        apply_setting(&mut config, "search.localized_tag_operator", "etiqueta:").unwrap();
        apply_setting(&mut config, "output.color", "off").unwrap();
        assert_eq!(config.search.localized_tag_operator, "etiqueta:");
        assert_eq!(config.output.color, Some(false));
    }

    #[test]
    fn test_apply_setting_rejects_unknown_key_and_empty_operator() {
        let mut config = Config::default();
        assert!(apply_setting(&mut config, "token", "x").is_err());
        assert!(apply_setting(&mut config, "search.tag_operator", "  ").is_err());
        assert_eq!(config.search.tag_operator, "tag:");
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        apply_setting(&mut config, "search.tag_operator", "label:").unwrap();
        save_config(&config, &path).unwrap();

        let loaded = load_config(Some(&path)).unwrap();
        assert_eq!(loaded.search.tag_operator, "label:");
        assert_eq!(loaded.search.localized_tag_operator, "tag:");
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let config = load_config(Some(&dir.path().join("missing.toml"))).unwrap();
        assert_eq!(config.search, QuerySettings::default());
    }

    #[test]
    #[serial]
    fn test_config_path_uses_xdg_config_home() {
        let dir = TempDir::new().unwrap();
        let previous = env::var_os("XDG_CONFIG_HOME");
        env::set_var("XDG_CONFIG_HOME", dir.path());

        let path = get_config_path(None).unwrap();

        match previous {
            Some(value) => env::set_var("XDG_CONFIG_HOME", value),
            None => env::remove_var("XDG_CONFIG_HOME"),
        }
        assert_eq!(path, dir.path().join("ns").join("config.toml"));
    }

    #[test]
    fn test_config_path_explicit_wins() {
        let path = get_config_path(Some(Path::new("/tmp/custom.toml"))).unwrap();
        assert_eq!(path, PathBuf::from("/tmp/custom.toml"));
    }
}
