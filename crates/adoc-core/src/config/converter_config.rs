//! Top-level converter configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{DocbookConfig, HtmlConfig, OdfConfig, PreviewConfig};
use crate::errors::ConfigError;

/// Safe modes the conversion scripts accept.
const SAFE_MODES: [&str; 4] = ["unsafe", "safe", "server", "secure"];

/// Top-level configuration aggregating the per-format sections.
///
/// Resolution order (highest priority first):
/// 1. Project config (`adoc.toml` in the project root)
/// 2. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ConverterConfig {
    pub preview: PreviewConfig,
    pub html: HtmlConfig,
    pub docbook: DocbookConfig,
    pub odf: OdfConfig,
}

impl ConverterConfig {
    /// Load configuration from `adoc.toml` in `root`, falling back to the
    /// compiled defaults when the file does not exist.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let path = root.join("adoc.toml");
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(&path).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let config: Self = toml::from_str(&text).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(mode) = self.preview.safe_mode.as_deref() {
            if !SAFE_MODES.contains(&mode) {
                return Err(ConfigError::ValidationFailed {
                    field: "preview.safe_mode".to_string(),
                    message: format!("must be one of {SAFE_MODES:?}"),
                });
            }
        }
        if let Some(backend) = self.docbook.backend.as_deref() {
            if !backend.starts_with("docbook") {
                return Err(ConfigError::ValidationFailed {
                    field: "docbook.backend".to_string(),
                    message: "must be a docbook backend".to_string(),
                });
            }
        }
        Ok(())
    }
}
