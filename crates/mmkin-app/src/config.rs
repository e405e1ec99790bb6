//! Configuration management for mmkin
//!
//! Config stored at: ~/.config/mmkin/config.toml

use mmkin_types::{
    ConfigError, OutputFormat, Result, DEFAULT_CURVE_POINTS, DEFAULT_ENZYME_CONCENTRATION_MM,
    DEFAULT_HEADER_LINES,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Total enzyme concentration [E]_0 in mM
    #[serde(default = "default_enzyme_concentration")]
    pub enzyme_concentration: f64,

    /// Lines skipped at the top of a rate table
    #[serde(default = "default_header_lines")]
    pub header_lines: usize,

    /// Default output format (json, table)
    #[serde(default)]
    pub output_format: OutputFormat,

    /// Points sampled along the fitted line for plot export
    #[serde(default = "default_curve_points")]
    pub curve_points: usize,
}

fn default_enzyme_concentration() -> f64 {
    DEFAULT_ENZYME_CONCENTRATION_MM
}

fn default_header_lines() -> usize {
    DEFAULT_HEADER_LINES
}

fn default_curve_points() -> usize {
    DEFAULT_CURVE_POINTS
}

impl Default for Config {
    fn default() -> Self {
        Self {
            enzyme_concentration: default_enzyme_concentration(),
            header_lines: default_header_lines(),
            output_format: OutputFormat::default(),
            curve_points: default_curve_points(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NotFound)?
            .join("mmkin");
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Load config from file, or create default
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Values are not range-checked here; see [`Config::validate`].
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;

        // Ensure directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| ConfigError::SaveError(e.to_string()))?;
        std::fs::write(path, content)?;
        debug!(path = %path.display(), "saved config");
        Ok(())
    }

    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if !(self.enzyme_concentration.is_finite() && self.enzyme_concentration > 0.0) {
            return Err(ConfigError::InvalidValue {
                key: "enzyme_concentration",
                reason: format!("must be a positive number, got {}", self.enzyme_concentration),
            });
        }
        if self.curve_points < 2 {
            return Err(ConfigError::InvalidValue {
                key: "curve_points",
                reason: format!("must be at least 2, got {}", self.curve_points),
            });
        }
        Ok(())
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "mmkin Configuration")?;
        writeln!(f, "===================")?;
        writeln!(f)?;
        writeln!(f, "Enzyme [E]_0:   {} mM", self.enzyme_concentration)?;
        writeln!(f, "Header lines:   {}", self.header_lines)?;
        writeln!(f, "Output format:  {}", self.output_format)?;
        writeln!(f, "Curve points:   {}", self.curve_points)?;
        Ok(())
    }
}
