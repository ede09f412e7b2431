//! Converter configuration.
//! TOML-based, per-format sections, project file over compiled defaults.

pub mod converter_config;
pub mod docbook_config;
pub mod html_config;
pub mod odf_config;
pub mod preview_config;

pub use converter_config::ConverterConfig;
pub use docbook_config::DocbookConfig;
pub use html_config::HtmlConfig;
pub use odf_config::OdfConfig;
pub use preview_config::PreviewConfig;

use serde::Serialize;

use crate::errors::ConfigError;

/// A configuration collaborator that produces the JSON payload handed to the
/// interpreter alongside the document text.
///
/// The recognized options are defined by the conversion scripts, not by the
/// bridge; the payload is opaque past this boundary.
pub trait PayloadSource {
    /// The TOML section / payload this collaborator covers.
    fn section(&self) -> &'static str;

    /// Serialize the current options to a JSON string.
    fn json_payload(&self) -> Result<String, ConfigError>;
}

pub(crate) fn to_payload<T: Serialize>(
    options: &T,
    section: &'static str,
) -> Result<String, ConfigError> {
    serde_json::to_string(options).map_err(|e| ConfigError::PayloadSerialize {
        section: section.to_string(),
        message: e.to_string(),
    })
}
