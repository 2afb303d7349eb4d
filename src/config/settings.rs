//! Configuration settings for taskhint.
//!
//! Settings are loaded from `~/.taskhint/config.yaml`.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::cli::args::OutputFormat;
use crate::error::TaskhintError;
use crate::features::nlp::{Annotator, PriorityKeywords, DEFAULT_MAX_INPUT_BYTES};

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// General settings.
    pub general: GeneralConfig,
    /// Annotator settings.
    pub annotator: AnnotatorConfig,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Default output format.
    #[serde(default = "default_output_format")]
    pub default_output: OutputFormat,
    /// Color output setting.
    #[serde(default = "default_color")]
    pub color: ColorSetting,
    /// Owner recorded on tasks and lists. Falls back to `$USER`.
    #[serde(default)]
    pub user: Option<String>,
}

/// Color output setting.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ColorSetting {
    /// Auto-detect based on terminal.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

impl ColorSetting {
    /// Apply this setting to the `colored` crate globally.
    pub fn apply(self) {
        match self {
            Self::Auto => colored::control::unset_override(),
            Self::Always => colored::control::set_override(true),
            Self::Never => colored::control::set_override(false),
        }
    }
}

/// Annotator settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnnotatorConfig {
    /// Longest text annotated, in bytes. 0 disables the cap.
    #[serde(default = "default_max_input_bytes")]
    pub max_input_bytes: usize,
    /// Ordered priority keyword table; the last matching level wins.
    #[serde(default)]
    pub priority_keywords: PriorityKeywords,
}

const fn default_output_format() -> OutputFormat {
    OutputFormat::Pretty
}

const fn default_color() -> ColorSetting {
    ColorSetting::Auto
}

const fn default_max_input_bytes() -> usize {
    DEFAULT_MAX_INPUT_BYTES
}

const FALLBACK_USER: &str = "local";

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_output: default_output_format(),
            color: default_color(),
            user: None,
        }
    }
}

impl GeneralConfig {
    /// The owner id for tasks: `user`, then `$USER`, then `"local"`.
    #[must_use]
    pub fn owner(&self) -> String {
        self.user
            .clone()
            .filter(|u| !u.trim().is_empty())
            .or_else(|| std::env::var("USER").ok().filter(|u| !u.is_empty()))
            .unwrap_or_else(|| FALLBACK_USER.to_string())
    }
}

impl Default for AnnotatorConfig {
    fn default() -> Self {
        Self {
            max_input_bytes: default_max_input_bytes(),
            priority_keywords: PriorityKeywords::canonical(),
        }
    }
}

impl AnnotatorConfig {
    /// Build the annotator these settings describe.
    #[must_use]
    pub fn build(&self) -> Annotator {
        Annotator::new(self.priority_keywords.clone(), self.max_input_bytes)
    }
}

impl Config {
    /// Load configuration from a specific path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed or
    /// its keyword table is invalid.
    pub fn load_from_path(path: &Path) -> Result<Self, TaskhintError> {
        if !path.exists() {
            log::debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|e| {
            TaskhintError::Config(format!(
                "Failed to read config file {}: {e}",
                path.display()
            ))
        })?;

        serde_yaml::from_str(&contents).map_err(|e| {
            TaskhintError::Config(format!(
                "Failed to parse config file {}: {e}",
                path.display()
            ))
        })
    }

    /// Save configuration to a specific path.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be written.
    pub fn save_to_path(&self, path: &Path) -> Result<(), TaskhintError> {
        let contents = self.to_yaml()?;

        std::fs::write(path, contents).map_err(|e| {
            TaskhintError::Config(format!(
                "Failed to write config file {}: {e}",
                path.display()
            ))
        })
    }

    /// Render as YAML.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_yaml(&self) -> Result<String, TaskhintError> {
        serde_yaml::to_string(self)
            .map_err(|e| TaskhintError::Config(format!("Failed to serialize config: {e}")))
    }
}
