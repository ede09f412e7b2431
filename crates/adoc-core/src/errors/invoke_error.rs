//! Invocation errors.

/// Errors from a single invoke-by-name call into the interpreter.
/// Scoped to one call; the bridge stays usable afterwards.
#[derive(Debug, Clone, thiserror::Error)]
pub enum InvocationError {
    #[error("Function {0} is not defined in the interpreter")]
    MissingFunction(String),

    #[error("Function {function} threw: {message}")]
    Failed { function: String, message: String },

    #[error("Interpreter worker is no longer running")]
    Unavailable,
}
