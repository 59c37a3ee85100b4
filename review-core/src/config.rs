//! Configuration management for the review tracker
//!
//! Configuration is loaded with the following priority (highest to lowest):
//! 1. CLI flags
//! 2. Environment variables (REVIEW_TRACKER_*)
//! 3. Config file (~/.config/review-tracker/config.toml)
//! 4. Default values

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::intake::DEFAULT_MAX_ITEMS;
use crate::{Error, Result};

/// Input intake configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct IntakeConfig {
    /// Largest slide count or URL list accepted when starting a review
    pub max_items: usize,
}

impl Default for IntakeConfig {
    fn default() -> Self {
        Self {
            max_items: DEFAULT_MAX_ITEMS,
        }
    }
}

/// Report export configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Directory the report file is written into
    pub output_dir: PathBuf,

    /// Print the report instead of writing a file
    pub stdout: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            stdout: false,
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Intake configuration
    pub intake: IntakeConfig,

    /// Export configuration
    pub export: ExportConfig,
}

impl Config {
    /// Load configuration from the default config file location
    ///
    /// Returns default config if file doesn't exist
    pub fn load() -> Result<Self> {
        if let Some(path) = Self::default_config_path() {
            if path.exists() {
                return Self::load_from_file(&path);
            }
        }

        Ok(Self::default())
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(Error::Io)?;
        let config: Self = toml::from_str(&contents)
            .map_err(|e| Error::Config(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default config file path
    ///
    /// Returns `~/.config/review-tracker/config.toml` on Unix
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("review-tracker").join("config.toml"))
    }

    /// Apply environment variable overrides
    ///
    /// Supported variables:
    /// - REVIEW_TRACKER_MAX_ITEMS: Intake cap
    /// - REVIEW_TRACKER_OUTPUT_DIR: Report output directory
    pub fn with_env_overrides(mut self) -> Result<Self> {
        if let Ok(max_items) = std::env::var("REVIEW_TRACKER_MAX_ITEMS") {
            self.intake.max_items = max_items.trim().parse().map_err(|_| {
                Error::Config(format!(
                    "REVIEW_TRACKER_MAX_ITEMS must be a positive integer, got '{}'",
                    max_items
                ))
            })?;
        }

        if let Ok(dir) = std::env::var("REVIEW_TRACKER_OUTPUT_DIR") {
            self.export.output_dir = PathBuf::from(dir);
        }

        Ok(self)
    }

    /// Apply CLI flag overrides
    pub fn with_cli_overrides(
        mut self,
        max_items: Option<usize>,
        output_dir: Option<PathBuf>,
        stdout: bool,
    ) -> Self {
        if let Some(max) = max_items {
            self.intake.max_items = max;
        }

        if let Some(dir) = output_dir {
            self.export.output_dir = dir;
        }

        if stdout {
            self.export.stdout = true;
        }

        self
    }

    /// Load configuration with all overrides applied
    ///
    /// Priority: CLI > env > config file > defaults
    pub fn load_with_overrides(
        max_items: Option<usize>,
        output_dir: Option<PathBuf>,
        stdout: bool,
    ) -> Result<Self> {
        let config = Self::load()?
            .with_env_overrides()?
            .with_cli_overrides(max_items, output_dir, stdout);
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.intake.max_items == 0 {
            return Err(Error::Config(
                "intake.max_items must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}
