//! Config command implementation.
//!
//! View and manage configuration settings.
//! Config file is located at ~/.config/eventscout/config.toml.

use std::env;
use std::fs;
use std::path::PathBuf;

use directories::BaseDirs;
use serde::{Deserialize, Serialize};

use super::{CommandContext, CommandError, Result};

/// Overrides the config file location.
pub const CONFIG_ENV: &str = "EVENTSCOUT_CONFIG";

/// Current config file version. Increment when making breaking changes to schema.
const CONFIG_VERSION: u32 = 1;

/// Credential used when no API key is configured. Requests made with it are
/// expected to be rejected, which sends the feed to placeholder events.
pub const FALLBACK_API_KEY: &str = "eventscout-demo";

/// Minimum key length to apply masking (show first and last N characters).
const KEY_MASK_MIN_LENGTH: usize = 8;

/// Number of characters to show at start/end of a masked key.
const KEY_MASK_VISIBLE_CHARS: usize = 4;

/// Largest accepted staleness window: one week.
const MAX_STALE_MINUTES: i64 = 7 * 24 * 60;

const VALID_KEYS: &str = "api_key, output.color, feed.city, feed.stale_minutes";

/// Configuration file structure.
#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Config schema version for migrations.
    /// Defaults to current version when not present in file.
    #[serde(default = "default_version")]
    pub version: u32,

    /// Ticketmaster API key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub feed: FeedConfig,
}

/// Returns the current config version (used by serde default).
fn default_version() -> u32 {
    CONFIG_VERSION
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            api_key: None,
            output: OutputConfig::default(),
            feed: FeedConfig::default(),
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

/// Event feed configuration.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct FeedConfig {
    /// City used by `refresh` when none is given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    /// Minutes a fetched listing stays fresh.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stale_minutes: Option<i64>,
}

/// Gets the config directory path.
/// Uses XDG-style paths: ~/.config/eventscout/ on all platforms.
fn get_config_dir() -> Result<PathBuf> {
    if let Ok(xdg_config) = env::var("XDG_CONFIG_HOME") {
        return Ok(PathBuf::from(xdg_config).join("eventscout"));
    }

    BaseDirs::new()
        .map(|dirs| dirs.home_dir().join(".config").join("eventscout"))
        .ok_or_else(|| CommandError::Config("Could not determine config directory".to_string()))
}

/// Gets the config file path.
pub fn get_config_path() -> Result<PathBuf> {
    if let Ok(path) = env::var(CONFIG_ENV) {
        return Ok(PathBuf::from(path));
    }

    let config_dir = get_config_dir()?;
    Ok(config_dir.join("config.toml"))
}

/// Loads the configuration from disk. A missing file is the default config.
pub fn load_config() -> Result<Config> {
    let path = get_config_path()?;

    if !path.exists() {
        return Ok(Config::default());
    }

    let content = fs::read_to_string(&path)
        .map_err(|e| CommandError::Config(format!("Failed to read config: {}", e)))?;

    let config: Config = toml::from_str(&content)
        .map_err(|e| CommandError::Config(format!("Failed to parse config: {}", e)))?;

    migrate_config(config)
}

/// Migrates config to the current version.
fn migrate_config(mut config: Config) -> Result<Config> {
    // Version 1 is the first schema; later versions upgrade here in order.
    config.version = CONFIG_VERSION;

    // Hand-edited values skip `config set`; an out-of-range window falls back to the default.
    if let Some(minutes) = config.feed.stale_minutes {
        if !(0..=MAX_STALE_MINUTES).contains(&minutes) {
            tracing::warn!(minutes, "ignoring out-of-range feed.stale_minutes");
            config.feed.stale_minutes = None;
        }
    }

    Ok(config)
}

fn save_config(config: &Config) -> Result<()> {
    let path = get_config_path()?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            CommandError::Config(format!("Failed to create config directory: {}", e))
        })?;
    }

    let content = toml::to_string_pretty(config)
        .map_err(|e| CommandError::Config(format!("Failed to serialize config: {}", e)))?;

    fs::write(&path, content)
        .map_err(|e| CommandError::Config(format!("Failed to write config: {}", e)))?;

    Ok(())
}

/// Resolves the API key with priority: flag/env > config > fallback.
///
/// Absence is not an error; the fallback credential is returned instead.
pub fn resolve_api_key(flag: Option<&str>) -> Result<String> {
    if let Some(key) = flag.filter(|k| !k.trim().is_empty()) {
        return Ok(key.to_string());
    }

    if let Some(key) = load_config()?.api_key.filter(|k| !k.trim().is_empty()) {
        return Ok(key);
    }

    tracing::debug!("no API key configured, using fallback credential");
    Ok(FALLBACK_API_KEY.to_string())
}

/// Executes the config show command.
pub fn execute_show(ctx: &CommandContext) -> Result<()> {
    let config = load_config()?;
    let path = get_config_path()?;

    if ctx.json_output {
        let output = serde_json::json!({
            "path": path.display().to_string(),
            "exists": path.exists(),
            "api_key": config.api_key.as_deref().map(mask_key),
            "output": config.output,
            "feed": config.feed,
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

        if path.exists() {
            println!("Settings:");
            match config.api_key {
                Some(ref key) => println!("  api_key: {}", mask_key(key)),
                None => println!("  api_key: (not set, using fallback)"),
            }

            println!("\n[output]");
            if let Some(color) = config.output.color {
                println!("  color: {}", color);
            }

            println!("\n[feed]");
            if let Some(ref city) = config.feed.city {
                println!("  city: {}", city);
            }
            if let Some(minutes) = config.feed.stale_minutes {
                println!("  stale_minutes: {}", minutes);
            }
        } else {
            println!("(No config file exists. Run 'evs config set api_key <key>' to create one.)");
        }
    }

    Ok(())
}

/// Options for the config set command.
pub struct ConfigSetOptions {
    /// Configuration key.
    pub key: String,
    /// Configuration value.
    pub value: String,
}

/// Applies one `key = value` assignment to a config.
fn apply_setting(config: &mut Config, key: &str, value: &str) -> Result<()> {
    match key {
        "api_key" => {
            let trimmed = value.trim();
            if trimmed.is_empty() {
                return Err(CommandError::Config(
                    "api_key cannot be empty".to_string(),
                ));
            }
            config.api_key = Some(trimmed.to_string());
        }
        "output.color" => {
            config.output.color = Some(parse_bool(value)?);
        }
        "feed.city" => {
            let trimmed = value.trim();
            config.feed.city = (!trimmed.is_empty()).then(|| trimmed.to_string());
        }
        "feed.stale_minutes" => {
            let minutes: i64 = value.trim().parse().map_err(|_| {
                CommandError::Config(format!(
                    "Invalid stale_minutes value '{}'. Use a whole number of minutes",
                    value
                ))
            })?;
            if !(0..=MAX_STALE_MINUTES).contains(&minutes) {
                return Err(CommandError::Config(format!(
                    "stale_minutes must be between 0 and {}",
                    MAX_STALE_MINUTES
                )));
            }
            config.feed.stale_minutes = Some(minutes);
        }
        _ => {
            return Err(CommandError::Config(format!(
                "Unknown config key '{}'. Valid keys: {}",
                key, VALID_KEYS
            )));
        }
    }
    Ok(())
}

/// Executes the config set command.
///
/// An invalid value aborts before anything is written.
pub fn execute_set(ctx: &CommandContext, opts: &ConfigSetOptions) -> Result<()> {
    let mut config = load_config()?;
    let path = get_config_path()?;

    apply_setting(&mut config, &opts.key, &opts.value)?;
    save_config(&config)?;

    let shown = if opts.key == "api_key" {
        mask_key(opts.value.trim())
    } else {
        opts.value.clone()
    };

    if ctx.json_output {
        let output = serde_json::json!({
            "status": "success",
            "key": opts.key,
            "value": shown,
            "path": path.display().to_string(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else if !ctx.quiet {
        println!("Set {} = {}", opts.key, shown);
    }

    Ok(())
}

/// Executes the config path command.
pub fn execute_path(ctx: &CommandContext) -> Result<()> {
    let path = get_config_path()?;

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

/// Masks a key for display, showing only the first and last N characters.
///
/// Counts characters, not bytes.
fn mask_key(key: &str) -> String {
    let char_count = key.chars().count();
    if char_count > KEY_MASK_MIN_LENGTH {
        let prefix: String = key.chars().take(KEY_MASK_VISIBLE_CHARS).collect();
        let suffix: String = key
            .chars()
            .skip(char_count - KEY_MASK_VISIBLE_CHARS)
            .collect();
        format!("{}...{}", prefix, suffix)
    } else {
        "****".to_string()
    }
}

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
