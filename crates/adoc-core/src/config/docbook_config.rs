//! DocBook conversion configuration.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{to_payload, PayloadSource};
use crate::errors::ConfigError;

/// Options for the DocBook conversion.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DocbookConfig {
    /// DocBook backend. Default: "docbook5".
    pub backend: Option<String>,
    /// Document type. Default: "article".
    pub doctype: Option<String>,
    /// Emit a full document with header and footer. Default: true.
    pub header_footer: Option<bool>,
    /// Additional document attributes passed through to the scripts.
    pub attributes: BTreeMap<String, String>,
}

impl DocbookConfig {
    /// Returns the effective backend, defaulting to "docbook5".
    pub fn effective_backend(&self) -> &str {
        self.backend.as_deref().unwrap_or("docbook5")
    }
}

impl PayloadSource for DocbookConfig {
    fn section(&self) -> &'static str {
        "docbook"
    }

    fn json_payload(&self) -> Result<String, ConfigError> {
        to_payload(self, self.section())
    }
}
