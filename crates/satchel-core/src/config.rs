// Rust guideline compliant 2026-10-18

//! Configuration management for Satchel.

use crate::inventory::{DEFAULT_CAPACITY, MAX_CAPACITY};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default configuration file name, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "satchel.toml";

/// Log levels accepted by `log_level`.
pub const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// JSON output format.
    Json,
    /// Human-readable table format.
    #[default]
    Table,
    /// Plain text format.
    Plain,
}

impl std::str::FromStr for OutputFormat {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        match value.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "table" => Ok(OutputFormat::Table),
            "plain" => Ok(OutputFormat::Plain),
            _ => Err(Error::Config(format!(
                "output format must be json, table, or plain, got {}",
                value
            ))),
        }
    }
}

/// Configuration for Satchel behavior.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Number of item slots in the inventory.
    #[serde(default = "default_capacity")]
    pub capacity: usize,

    /// Default output format.
    #[serde(default)]
    pub output_format: OutputFormat,

    /// Whether status lines may be colored.
    #[serde(default = "default_color")]
    pub color: bool,

    /// Maximum tracing level (error, warn, info, debug, trace).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_capacity() -> usize {
    DEFAULT_CAPACITY
}

fn default_color() -> bool {
    true
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            capacity: default_capacity(),
            output_format: OutputFormat::default(),
            color: default_color(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Loads configuration from file and environment variables.
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values
    /// 2. Configuration file at `config_path`, if it exists
    /// 3. Environment variables with `SATCHEL_` prefix
    ///
    /// # Arguments
    ///
    /// * `config_path` - Path to the TOML configuration file
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Configuration file exists but cannot be read
    /// - Configuration file contains invalid TOML
    /// - Configuration values fail validation
    pub fn load(config_path: &Path) -> Result<Self> {
        let mut config = Self::default();

        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            config = toml::from_str(&content)
                .map_err(|e| Error::Config(format!("invalid config file: {}", e)))?;
        }

        config.apply_env_overrides()?;
        config.validate()?;

        Ok(config)
    }

    /// Applies environment variable overrides to the configuration.
    ///
    /// Supported environment variables:
    /// - `SATCHEL_CAPACITY` - Inventory capacity (1-100)
    /// - `SATCHEL_OUTPUT_FORMAT` - Output format (json/table/plain)
    /// - `SATCHEL_COLOR` - Colored status lines (true/false)
    /// - `SATCHEL_LOG_LEVEL` - Tracing level
    ///
    /// # Errors
    ///
    /// Returns an error if environment variable values are invalid.
    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(val) = std::env::var("SATCHEL_CAPACITY") {
            self.capacity = val.parse().map_err(|_| {
                Error::Config("SATCHEL_CAPACITY must be a positive number".to_string())
            })?;
        }

        if let Ok(val) = std::env::var("SATCHEL_OUTPUT_FORMAT") {
            self.output_format = val.parse()?;
        }

        if let Ok(val) = std::env::var("SATCHEL_COLOR") {
            self.color = val
                .parse()
                .map_err(|_| Error::Config("SATCHEL_COLOR must be true or false".to_string()))?;
        }

        if let Ok(val) = std::env::var("SATCHEL_LOG_LEVEL") {
            self.log_level = val.to_lowercase();
        }

        Ok(())
    }

    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - capacity is zero or above the maximum
    /// - log_level is not a known level
    pub fn validate(&self) -> Result<()> {
        if self.capacity == 0 || self.capacity > MAX_CAPACITY {
            return Err(Error::Config(format!(
                "capacity must be 1-{}, got {}",
                MAX_CAPACITY, self.capacity
            )));
        }

        if !LOG_LEVELS.contains(&self.log_level.as_str()) {
            return Err(Error::Config(format!(
                "log_level must be one of {}, got {}",
                LOG_LEVELS.join(", "),
                self.log_level
            )));
        }

        Ok(())
    }

    /// Saves the configuration to a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be created or written
    /// - Serialization fails
    pub fn save(&self, config_path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("failed to serialize config: {}", e)))?;
        std::fs::write(config_path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Mutex, MutexGuard};
    use tempfile::TempDir;

    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn clear_all_env_vars() -> MutexGuard<'static, ()> {
        let guard = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        std::env::remove_var("SATCHEL_CAPACITY");
        std::env::remove_var("SATCHEL_OUTPUT_FORMAT");
        std::env::remove_var("SATCHEL_COLOR");
        std::env::remove_var("SATCHEL_LOG_LEVEL");
        guard
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.capacity, 10);
        assert_eq!(config.output_format, OutputFormat::Table);
        assert!(config.color);
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_config_load_missing_file() {
        let _guard = clear_all_env_vars();
        let temp_dir = TempDir::new().unwrap();
        let config = Config::load(&temp_dir.path().join(DEFAULT_CONFIG_FILE)).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_config_load_from_file() {
        let _guard = clear_all_env_vars();
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join(DEFAULT_CONFIG_FILE);
        let content = r#"
capacity = 25
output_format = "json"
color = false
log_level = "debug"
"#;
        std::fs::write(&config_path, content).unwrap();

        let config = Config::load(&config_path).unwrap();
        assert_eq!(config.capacity, 25);
        assert_eq!(config.output_format, OutputFormat::Json);
        assert!(!config.color);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_config_partial_file_keeps_defaults() {
        let _guard = clear_all_env_vars();
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join(DEFAULT_CONFIG_FILE);
        std::fs::write(&config_path, "capacity = 4").unwrap();

        let config = Config::load(&config_path).unwrap();
        assert_eq!(config.capacity, 4);
        assert_eq!(config.output_format, OutputFormat::Table);
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_config_validation_zero_capacity() {
        let _guard = clear_all_env_vars();
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join(DEFAULT_CONFIG_FILE);
        std::fs::write(&config_path, "capacity = 0").unwrap();

        assert!(Config::load(&config_path).is_err());
    }

    #[test]
    fn test_config_validation_unknown_log_level() {
        let _guard = clear_all_env_vars();
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join(DEFAULT_CONFIG_FILE);
        std::fs::write(&config_path, "log_level = \"loud\"").unwrap();

        assert!(Config::load(&config_path).is_err());
    }

    #[test]
    fn test_config_invalid_toml() {
        let _guard = clear_all_env_vars();
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join(DEFAULT_CONFIG_FILE);
        std::fs::write(&config_path, "capacity = [").unwrap();

        assert!(matches!(Config::load(&config_path), Err(Error::Config(_))));
    }

    #[test]
    fn test_config_env_override_capacity() {
        let _guard = clear_all_env_vars();
        let temp_dir = TempDir::new().unwrap();

        std::env::set_var("SATCHEL_CAPACITY", "7");
        let config = Config::load(&temp_dir.path().join(DEFAULT_CONFIG_FILE));
        std::env::remove_var("SATCHEL_CAPACITY");

        assert_eq!(config.unwrap().capacity, 7);
    }

    #[test]
    fn test_config_env_override_output_format() {
        let _guard = clear_all_env_vars();
        let temp_dir = TempDir::new().unwrap();

        std::env::set_var("SATCHEL_OUTPUT_FORMAT", "plain");
        let config = Config::load(&temp_dir.path().join(DEFAULT_CONFIG_FILE));
        std::env::remove_var("SATCHEL_OUTPUT_FORMAT");

        assert_eq!(config.unwrap().output_format, OutputFormat::Plain);
    }

    #[test]
    fn test_config_env_invalid_capacity() {
        let _guard = clear_all_env_vars();
        let temp_dir = TempDir::new().unwrap();

        std::env::set_var("SATCHEL_CAPACITY", "lots");
        let result = Config::load(&temp_dir.path().join(DEFAULT_CONFIG_FILE));
        std::env::remove_var("SATCHEL_CAPACITY");

        assert!(result.is_err());
    }

    #[test]
    fn test_config_file_overridden_by_env() {
        let _guard = clear_all_env_vars();
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join(DEFAULT_CONFIG_FILE);
        std::fs::write(&config_path, "color = true").unwrap();

        std::env::set_var("SATCHEL_COLOR", "false");
        let config = Config::load(&config_path);
        std::env::remove_var("SATCHEL_COLOR");

        assert!(!config.unwrap().color);
    }

    #[test]
    fn test_config_save_and_load() {
        let _guard = clear_all_env_vars();
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join(DEFAULT_CONFIG_FILE);

        let original = Config {
            capacity: 42,
            output_format: OutputFormat::Json,
            color: false,
            log_level: "info".to_string(),
        };

        original.save(&config_path).unwrap();
        let loaded = Config::load(&config_path).unwrap();
        assert_eq!(original, loaded);
    }
}
