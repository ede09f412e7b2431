//! Preview conversion configuration.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{to_payload, PayloadSource};
use crate::errors::ConfigError;

/// Options for the live-preview conversion.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PreviewConfig {
    /// Interpreter safe mode. Default: "safe".
    pub safe_mode: Option<String>,
    /// Source highlighter the preview scripts should use.
    pub source_highlighter: Option<String>,
    /// Additional document attributes passed through to the scripts.
    pub attributes: BTreeMap<String, String>,
}

impl PreviewConfig {
    /// Returns the effective safe mode, defaulting to "safe".
    pub fn effective_safe_mode(&self) -> &str {
        self.safe_mode.as_deref().unwrap_or("safe")
    }
}

impl PayloadSource for PreviewConfig {
    fn section(&self) -> &'static str {
        "preview"
    }

    fn json_payload(&self) -> Result<String, ConfigError> {
        to_payload(self, self.section())
    }
}
