//! Bootstrap errors.

/// Errors that can occur while bringing up the embedded interpreter.
///
/// Bootstrap failure is terminal for the bridge: the error poisons the
/// initialization gate and every subsequent conversion call receives it.
/// Causes are carried as strings because the error is cloned out to an
/// arbitrary number of gate waiters, and interpreter-native error values
/// cannot leave the worker thread.
#[derive(Debug, Clone, thiserror::Error)]
pub enum BootstrapError {
    #[error("Interpreter worker thread spawn failed: {0}")]
    Spawn(String),

    #[error("Script engine creation failed: {0}")]
    Engine(String),

    #[error("Baseline shim installation failed: {0}")]
    Shim(String),

    #[error("Host bridge binding failed: {0}")]
    HostBinding(String),

    #[error("Module {module} could not be fetched: {message}")]
    ModuleFetch { module: String, message: String },

    #[error("Module {module} failed to evaluate: {message}")]
    ModuleEval { module: String, message: String },
}

impl BootstrapError {
    /// The module that aborted the bootstrap, when the failure is
    /// attributable to one.
    pub fn module(&self) -> Option<&str> {
        match self {
            Self::ModuleFetch { module, .. } | Self::ModuleEval { module, .. } => Some(module),
            _ => None,
        }
    }
}
