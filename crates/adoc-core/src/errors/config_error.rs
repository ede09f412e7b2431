//! Configuration errors.

/// Errors from loading, validating, or serializing converter configuration.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to parse {path}: {message}")]
    ParseError { path: String, message: String },

    #[error("Invalid value for {field}: {message}")]
    ValidationFailed { field: String, message: String },

    #[error("Could not serialize {section} options: {message}")]
    PayloadSerialize { section: String, message: String },
}
