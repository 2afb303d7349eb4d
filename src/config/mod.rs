//! Configuration management for taskhint.
//!
//! This module handles loading and saving configuration from `~/.taskhint/`.

mod paths;
mod settings;

pub use paths::Paths;
pub use settings::{AnnotatorConfig, ColorSetting, Config, GeneralConfig};
