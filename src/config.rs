//! Configuration management for Tempora
//!
//! This module handles loading, parsing, and validation of configuration files.

use crate::constants::{
    APP_DIR_NAME, CONFIG_FILE_NAME, CONFIG_GENERATED, DEFAULT_DATETIME_SEPARATOR, DEFAULT_DATE_FORMAT,
    DEFAULT_ENVIRONMENT, DEFAULT_LOG_LEVEL, DEFAULT_MINUTES_PER_UNIT, DEFAULT_NAMED_UNIT, DEFAULT_NAMED_UNIT_MINUTES,
};
use crate::error::{TimerError, TimerResult};
use crate::feature::{FeatureToggle, Features};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Deployment environment the application runs in (dev, test, prod)
    pub environment: String,
    pub timer: TimerConfig,
    pub display: DisplayConfig,
    pub logging: LoggingConfig,
    /// Feature toggles by name
    pub features: BTreeMap<String, FeatureToggle>,
}

/// Timer configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TimerConfig {
    /// Minutes per abstract unit when no named unit is used
    pub minutes_per_unit: f64,
    /// Named abstract units and their length in minutes
    pub units: BTreeMap<String, f64>,
}

/// Display configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Date format for rendered dates
    pub date_format: String,
    /// Separator placed between date and time
    pub datetime_separator: String,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Enable logging
    pub enabled: bool,
    /// Maximum level: off, error, warn, info, debug, trace
    pub level: String,
    /// Also write to the log file in the cache directory
    pub file: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            environment: DEFAULT_ENVIRONMENT.to_string(),
            timer: TimerConfig::default(),
            display: DisplayConfig::default(),
            logging: LoggingConfig::default(),
            features: BTreeMap::new(),
        }
    }
}

impl Default for TimerConfig {
    fn default() -> Self {
        let mut units = BTreeMap::new();
        units.insert(DEFAULT_NAMED_UNIT.to_string(), DEFAULT_NAMED_UNIT_MINUTES);

        Self {
            minutes_per_unit: DEFAULT_MINUTES_PER_UNIT,
            units,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            datetime_separator: DEFAULT_DATETIME_SEPARATOR.to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: DEFAULT_LOG_LEVEL.to_string(),
            file: false,
        }
    }
}

impl TimerConfig {
    /// Minutes per unit for a named abstract unit
    pub fn scale_for(&self, name: &str) -> TimerResult<f64> {
        self.units
            .get(name)
            .copied()
            .ok_or_else(|| TimerError::ConfigurationMissing(format!("no abstract unit named '{}'", name)))
    }
}

impl LoggingConfig {
    /// Parsed level filter; disabled logging maps to `Off`
    pub fn level_filter(&self) -> Result<log::LevelFilter> {
        if !self.enabled {
            return Ok(log::LevelFilter::Off);
        }
        self.level
            .parse::<log::LevelFilter>()
            .with_context(|| format!("Invalid log level '{}'", self.level))
    }
}

impl Config {
    /// Load configuration from file or return defaults
    pub fn load() -> Result<Self> {
        Self::load_located().map(|(config, _)| config)
    }

    /// Load configuration along with the path of the file it came from
    ///
    /// The path is `None` when no configuration file exists and defaults are used.
    pub fn load_located() -> Result<(Self, Option<PathBuf>)> {
        match Self::find_config_file()? {
            Some(path) => Ok((Self::load_from_file(&path)?, Some(path))),
            None => Ok((Self::default(), None)),
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        config.validate()?;
        log::debug!(
            "Loaded configuration from {} ({} features)",
            path.as_ref().display(),
            config.features.len()
        );
        Ok(config)
    }

    /// Find configuration file in order of precedence
    fn find_config_file() -> Result<Option<PathBuf>> {
        // 1. Check current directory
        let current_dir_config = PathBuf::from(CONFIG_FILE_NAME);
        if current_dir_config.exists() {
            return Ok(Some(current_dir_config));
        }

        // 2. Check XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join(APP_DIR_NAME).join("config.toml");
            if xdg_config.exists() {
                return Ok(Some(xdg_config));
            }
        }

        Ok(None)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.environment.trim().is_empty() {
            anyhow::bail!("environment cannot be empty");
        }

        if !(self.timer.minutes_per_unit.is_finite() && self.timer.minutes_per_unit > 0.0) {
            anyhow::bail!(
                "minutes_per_unit must be greater than zero, got {}",
                self.timer.minutes_per_unit
            );
        }

        for (name, minutes) in &self.timer.units {
            if !(minutes.is_finite() && *minutes > 0.0) {
                anyhow::bail!("Abstract unit '{}' must be longer than zero minutes, got {}", name, minutes);
            }
        }

        if chrono::format::StrftimeItems::new(&self.display.date_format)
            .any(|item| matches!(item, chrono::format::Item::Error))
        {
            anyhow::bail!("Invalid date_format '{}'", self.display.date_format);
        }

        self.logging.level_filter()?;

        Ok(())
    }

    /// Feature toggles from this configuration
    pub fn features(&self) -> Features<'_> {
        Features::new(&self.features)
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content = toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        // Add header comment
        let header = format!(
            "# Tempora Configuration File\n# Generated on {}\n\n",
            chrono::Local::now().format("%Y-%m-%d")
        );

        let full_content = header + &toml_content;

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
        Ok(Self::get_xdg_config_dir()?.join("config.toml"))
    }
}
