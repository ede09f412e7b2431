//! HTML conversion configuration.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{to_payload, PayloadSource};
use crate::errors::ConfigError;

/// Options for the standalone HTML conversion.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct HtmlConfig {
    /// Emit a full document with header and footer. Default: true.
    pub header_footer: Option<bool>,
    /// Document type. Default: "article".
    pub doctype: Option<String>,
    /// Source highlighter for listing blocks.
    pub source_highlighter: Option<String>,
    /// Additional document attributes passed through to the scripts.
    pub attributes: BTreeMap<String, String>,
}

impl HtmlConfig {
    /// Returns the effective header/footer setting, defaulting to true.
    pub fn effective_header_footer(&self) -> bool {
        self.header_footer.unwrap_or(true)
    }

    /// Returns the effective doctype, defaulting to "article".
    pub fn effective_doctype(&self) -> &str {
        self.doctype.as_deref().unwrap_or("article")
    }
}

impl PayloadSource for HtmlConfig {
    fn section(&self) -> &'static str {
        "html"
    }

    fn json_payload(&self) -> Result<String, ConfigError> {
        to_payload(self, self.section())
    }
}
