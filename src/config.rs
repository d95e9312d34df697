//! Configuration management for todolist
//!
//! This module handles loading, parsing, and validation of configuration files.

use crate::constants::{APP_DIR_NAME, CONFIG_FILE_NAME, CONFIG_GENERATED, LOCAL_CONFIG_FILE};
use crate::entities::TaskFilter;
use crate::icons::IconTheme;
use crate::utils::datetime::{self, DEFAULT_TIMESTAMP_FORMAT};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Comment written above each option in a generated config file
const OPTION_COMMENTS: &[(&str, &str)] = &[
    ("default_filter", "Filter active at start-up: \"all\", \"completed\" or \"incomplete\""),
    ("timestamp_format", "strftime format for task creation timestamps"),
    ("icon_theme", "Icon theme: \"unicode\", \"ascii\" or \"emoji\""),
    ("show_timestamps", "Show creation timestamps on task cards"),
    ("enabled", "Write logs to <cache dir>/todolist/todolist.log"),
];

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub ui: UiConfig,
    pub display: DisplayConfig,
    pub logging: LoggingConfig,
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct UiConfig {
    /// Filter active when the application starts
    /// Options: "all", "completed", "incomplete"
    pub default_filter: TaskFilter,
}

/// Display configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// strftime format for task creation timestamps
    pub timestamp_format: String,
    /// Icon theme: "unicode", "ascii" or "emoji"
    pub icon_theme: IconTheme,
    /// Show creation timestamps on task cards
    pub show_timestamps: bool,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    /// Enable logging to file
    pub enabled: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
            icon_theme: IconTheme::default(),
            show_timestamps: true,
        }
    }
}

impl Config {
    /// Load configuration from file or return defaults
    pub fn load() -> Result<Self> {
        match Self::find_config_file() {
            Some(path) => Self::load_from_file(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Find configuration file in order of precedence
    fn find_config_file() -> Option<PathBuf> {
        // 1. Check current directory
        let current_dir_config = PathBuf::from(LOCAL_CONFIG_FILE);
        if current_dir_config.exists() {
            return Some(current_dir_config);
        }

        // 2. Check XDG config directory
        let xdg_config = dirs::config_dir()?.join(APP_DIR_NAME).join(CONFIG_FILE_NAME);
        xdg_config.exists().then_some(xdg_config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if !datetime::is_valid_format(&self.display.timestamp_format) {
            anyhow::bail!("Invalid timestamp_format '{}'", self.display.timestamp_format);
        }

        Ok(())
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content = toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        let header = format!(
            "# todolist Configuration File\n# Generated on {}\n\n",
            chrono::Local::now().format("%Y-%m-%d")
        );

        let full_content = header + &annotate_options(&toml_content);

        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        std::fs::write(&path, full_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        println!("{}: {}", CONFIG_GENERATED, path.as_ref().display());
        Ok(())
    }

    /// Get the XDG config directory path
    pub fn get_xdg_config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
            .map(|dir| dir.join(APP_DIR_NAME))
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join(CONFIG_FILE_NAME))
    }
}

/// Prefix every known option of a serialized config with its comment
fn annotate_options(toml_content: &str) -> String {
    let mut annotated = String::with_capacity(toml_content.len() * 2);
    for line in toml_content.lines() {
        let key = line.split('=').next().map(str::trim).unwrap_or_default();
        if let Some((_, comment)) = OPTION_COMMENTS.iter().find(|(name, _)| *name == key) {
            annotated.push_str("# ");
            annotated.push_str(comment);
            annotated.push('\n');
        }
        annotated.push_str(line);
        annotated.push('\n');
    }
    annotated
}
