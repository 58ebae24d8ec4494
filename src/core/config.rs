use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
    #[serde(default = "default_console")]
    pub console: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CatalogConfig {
    /// "text" or "json"
    #[serde(default = "default_output")]
    pub output: String,
    /// Name given to records synthesized by the placeholder repository
    #[serde(default = "default_placeholder_name")]
    pub placeholder_name: String,
    #[serde(default = "default_user_capacity")]
    pub user_capacity: usize,
    /// Attempt counts classified in the pattern matching section
    #[serde(default = "default_attempts")]
    pub attempts: Vec<i64>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            console: default_console(),
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            output: default_output(),
            placeholder_name: default_placeholder_name(),
            user_capacity: default_user_capacity(),
            attempts: default_attempts(),
        }
    }
}

// Default value functions
fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "json".to_string()
}

fn default_console() -> bool {
    false
}

fn default_output() -> String {
    "text".to_string()
}

fn default_placeholder_name() -> String {
    "Test".to_string()
}

fn default_user_capacity() -> usize {
    16
}

fn default_attempts() -> Vec<i64> {
    vec![0, 1, 2, 3, 9, 10]
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .context(format!("Failed to read config file: {}", path.display()))?;

        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)
            .context("Failed to parse config file")?;

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.as_str()) {
            bail!(
                "Invalid log level '{}'. Must be one of: trace, debug, info, warn, error",
                self.logging.level
            );
        }

        let valid_formats = ["json", "console"];
        if !valid_formats.contains(&self.logging.format.as_str()) {
            bail!(
                "Invalid log format '{}'. Must be one of: json, console",
                self.logging.format
            );
        }

        let valid_outputs = ["text", "json"];
        if !valid_outputs.contains(&self.catalog.output.as_str()) {
            bail!(
                "Invalid catalog output '{}'. Must be one of: text, json",
                self.catalog.output
            );
        }

        if self.catalog.placeholder_name.is_empty() {
            bail!("placeholder_name must not be empty");
        }

        if self.catalog.user_capacity == 0 {
            bail!("user_capacity must be greater than 0");
        }

        Ok(())
    }
}
