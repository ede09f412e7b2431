//! Collaborator traits the bridge is constructed with.

pub mod host_bridge;
pub mod module_source;

pub use host_bridge::{HostBridge, NullHostBridge};
pub use module_source::{DirModuleSource, MemoryModuleSource, ModuleSource};
