//! ODF conversion configuration.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{to_payload, PayloadSource};
use crate::errors::ConfigError;

/// Options for the ODF conversion.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct OdfConfig {
    /// Document type. Default: "article".
    pub doctype: Option<String>,
    /// Generate a table of contents.
    pub toc: Option<bool>,
    /// Additional document attributes passed through to the scripts.
    pub attributes: BTreeMap<String, String>,
}

impl PayloadSource for OdfConfig {
    fn section(&self) -> &'static str {
        "odf"
    }

    fn json_payload(&self) -> Result<String, ConfigError> {
        to_payload(self, self.section())
    }
}
