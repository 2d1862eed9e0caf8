//! Playground configuration loaded from TOML
//!
//! Every section is optional; missing keys fall back to their defaults.
//!
//! ```toml
//! [layout]
//! max_panel_width = 90.0
//!
//! [download]
//! filename = "report.html"
//!
//! [engine]
//! program = "xsltproc"
//! args = ["--nonet"]
//! ```

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::layout::{LayoutConfig, LayoutConfigError};
use crate::shell::DownloadConfig;
use crate::transform::EngineConfig;

/// Errors that can occur when loading configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse config TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Invalid [layout] section: {0}")]
    InvalidLayout(#[from] LayoutConfigError),
}

/// Settings for the layout, the exported artifact and the external engine
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PlaygroundConfig {
    pub layout: LayoutConfig,
    pub download: DownloadConfig,
    pub engine: EngineConfig,
}

impl PlaygroundConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load configuration from a TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.layout.validate()?;
        Ok(config)
    }
}
