//! Caller-facing conversion errors and the result adaptation boundary.

use super::{BootstrapError, ConfigError, InvocationError};

/// Errors adapting a raw interpreter value into a [`ConverterResult`].
///
/// [`ConverterResult`]: crate::result::ConverterResult
#[derive(Debug, Clone, thiserror::Error)]
pub enum AdaptationError {
    #[error("{operation} returned no value")]
    MissingResult { operation: String },

    #[error("{operation} result is not an object (got {got})")]
    NotAnObject { operation: String, got: String },

    #[error("{operation} result has no string `rendered` field")]
    MissingRendered { operation: String },
}

/// Errors surfaced to a synchronous conversion caller.
/// Aggregates subsystem errors via `From` conversions; the invocation
/// variant keeps the operation name attached for diagnosis.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("Bridge failed to initialize: {0}")]
    Bootstrap(#[from] BootstrapError),

    #[error("{operation} invocation failed: {source}")]
    Invocation {
        operation: String,
        #[source]
        source: InvocationError,
    },

    #[error("Adaptation error: {0}")]
    Adaptation(#[from] AdaptationError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl ConvertError {
    /// Whether the bridge is permanently broken (retrying the call cannot
    /// help) as opposed to a per-call failure.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Bootstrap(_))
    }
}
