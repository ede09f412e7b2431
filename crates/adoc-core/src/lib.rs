//! Core types for the adoc conversion bridge.
//!
//! Shared between the engine crate and host-side consumers: configuration,
//! the error taxonomy, the operation table, converter results, and the
//! collaborator traits the bridge is constructed with. This crate has no
//! interpreter dependency.

pub mod config;
pub mod constants;
pub mod errors;
pub mod ops;
pub mod result;
pub mod traits;

pub use config::{
    ConverterConfig, DocbookConfig, HtmlConfig, OdfConfig, PayloadSource, PreviewConfig,
};
pub use errors::{AdaptationError, BootstrapError, ConfigError, ConvertError, InvocationError};
pub use ops::ConvertKind;
pub use result::ConverterResult;
pub use traits::{DirModuleSource, HostBridge, MemoryModuleSource, ModuleSource, NullHostBridge};
