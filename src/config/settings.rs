//! Parsing and validation for fhr.toml settings files

use crate::config::locator::FIREBASE_CONFIG_FILE;
use crate::error::ConfigError;
use crate::types::SiteId;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Settings file name looked up in the project directory
pub const SETTINGS_FILE: &str = "fhr.toml";

/// Main settings struct for fhr.toml
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Settings {
    /// Which sites to check and where their configuration lives
    #[serde(default)]
    pub fhr: FhrSection,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

impl Settings {
    /// Load settings from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Load `fhr.toml` from `dir` if it exists
    pub fn discover(dir: &Path) -> Result<Option<Self>, ConfigError> {
        let path = dir.join(SETTINGS_FILE);
        if !path.is_file() {
            return Ok(None);
        }
        Self::load(path).map(Some)
    }

    /// Parse settings from a TOML string
    pub fn parse(s: &str) -> Result<Self, ConfigError> {
        let settings: Settings = toml::from_str(s)?;
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let name = self.fhr.config_file.as_str();
        if name.is_empty() || name == "." || name == ".." || name.contains(['/', '\\']) {
            return Err(ConfigError::Validation(format!(
                "config_file must be a bare file name, got '{}'",
                name
            )));
        }

        let mut seen = Vec::new();
        for site in &self.fhr.sites {
            if seen.contains(&site) {
                return Err(ConfigError::Validation(format!(
                    "Site '{}' is listed more than once",
                    site
                )));
            }
            seen.push(site);
        }

        Ok(())
    }
}

/// The `[fhr]` section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FhrSection {
    /// Hosting sites whose rewrites must cover every dynamic route
    #[serde(default)]
    pub sites: Vec<SiteId>,

    /// Configuration file name searched for from the project directory upward
    #[serde(default = "default_config_file")]
    pub config_file: String,
}

impl Default for FhrSection {
    fn default() -> Self {
        Self {
            sites: Vec::new(),
            config_file: default_config_file(),
        }
    }
}

fn default_config_file() -> String {
    FIREBASE_CONFIG_FILE.to_string()
}

/// Output configuration section
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Output format
    #[serde(default)]
    pub format: OutputFormat,

    /// Color output setting
    #[serde(default)]
    pub color: ColorOption,
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    #[default]
    Human,
    /// JSON Lines format
    Jsonl,
}

/// Color output options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorOption {
    /// Auto-detect based on terminal capabilities
    #[default]
    Auto,
    /// Always use color
    Always,
    /// Never use color
    Never,
}
