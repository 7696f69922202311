//! Configuration management for tzform
//!
//! This module handles loading, parsing, and validation of configuration files.

use crate::constants::{DEFAULT_WORKDAY_END_HOUR, DEFAULT_WORKDAY_START_HOUR};
use crate::timezone;
use crate::workday::WorkdayService;
use anyhow::{Context, Result};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub timezone: TimezoneConfig,
    pub workday: WorkdayConfig,
    pub logging: LoggingConfig,
}

/// Timezone configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TimezoneConfig {
    /// Enterprise timezone as an IANA name (e.g. "Europe/Berlin").
    /// When unset, the ambient `TZ` environment variable is used, then UTC.
    pub enterprise: Option<String>,
}

/// Workday configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkdayConfig {
    /// Start of the workday, enterprise-local hour (0-23)
    pub start_hour: u32,
    /// End of the workday, enterprise-local hour (0-23)
    pub end_hour: u32,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    /// Enable logging
    pub enabled: bool,
}

impl Default for WorkdayConfig {
    fn default() -> Self {
        Self {
            start_hour: DEFAULT_WORKDAY_START_HOUR,
            end_hour: DEFAULT_WORKDAY_END_HOUR,
        }
    }
}

impl Config {
    /// Load configuration from file or return defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::find_config_file()?;

        if let Some(path) = config_path {
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
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
    fn find_config_file() -> Result<Option<PathBuf>> {
        // 1. Check current directory
        let current_dir_config = PathBuf::from("tzform.toml");
        if current_dir_config.exists() {
            return Ok(Some(current_dir_config));
        }

        // 2. Check XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("tzform").join("config.toml");
            if xdg_config.exists() {
                return Ok(Some(xdg_config));
            }
        }

        Ok(None)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        // Validate workday hours
        if self.workday.start_hour > 23 || self.workday.end_hour > 23 {
            anyhow::bail!(
                "workday hours must be between 0 and 23, got start {} and end {}",
                self.workday.start_hour,
                self.workday.end_hour
            );
        }
        if self.workday.start_hour >= self.workday.end_hour {
            anyhow::bail!(
                "workday start_hour {} must be before end_hour {}",
                self.workday.start_hour,
                self.workday.end_hour
            );
        }

        // Validate enterprise timezone name, when set
        if let Some(name) = &self.timezone.enterprise {
            timezone::parse_timezone(name)
                .with_context(|| format!("Invalid enterprise timezone '{}'", name))?;
        }

        Ok(())
    }

    /// Resolve the enterprise timezone: config value first, ambient fallback
    pub fn enterprise_timezone(&self) -> Tz {
        match &self.timezone.enterprise {
            Some(name) => timezone::parse_timezone(name).unwrap_or_else(|_| {
                log::warn!("Invalid configured timezone '{}', falling back to ambient", name);
                timezone::viewer_timezone()
            }),
            None => timezone::viewer_timezone(),
        }
    }

    /// Build a workday service from the configured zone and hours
    pub fn workday_service(&self) -> Result<WorkdayService> {
        WorkdayService::new(
            self.timezone.enterprise.as_deref(),
            self.workday.start_hour,
            self.workday.end_hour,
        )
        .context("Invalid workday configuration")
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content = toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        // Add header comment
        let header = format!(
            "# tzform Configuration File\n# Generated on {}\n\n",
            chrono::Utc::now().format("%Y-%m-%d")
        );

        let full_content = header + &toml_content;

        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        std::fs::write(&path, full_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        log::info!("Generated config file: {}", path.as_ref().display());
        Ok(())
    }

    /// Get the XDG config directory path
    pub fn get_xdg_config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
            .map(|dir| dir.join("tzform"))
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join("config.toml"))
    }
}
