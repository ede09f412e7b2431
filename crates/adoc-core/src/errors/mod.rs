//! Error handling for the adoc bridge.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod bootstrap_error;
pub mod config_error;
pub mod convert_error;
pub mod invoke_error;

pub use bootstrap_error::BootstrapError;
pub use config_error::ConfigError;
pub use convert_error::{AdaptationError, ConvertError};
pub use invoke_error::InvocationError;
