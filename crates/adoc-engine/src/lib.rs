//! Bootstrap gate and invocation bridge to the embedded conversion scripts.
//!
//! The bridge owns one QuickJS interpreter on a dedicated worker thread.
//! Construction returns immediately; the worker loads the script modules in
//! order and resolves a one-time broadcast gate to Ready or Failed. Each
//! conversion call waits on the gate, then queues an invocation through the
//! worker, which serializes all access to the interpreter. The outline
//! refresh is queued fire-and-forget and its failures are only logged.
//!
//! Interpreter state lives on the worker thread for its whole lifetime; the
//! QuickJS context is not `Send`, so the compiler enforces the confinement.

pub mod bootstrap;
pub mod bridge;
pub mod gate;
pub mod interpreter;
mod worker;

pub use bridge::{BridgeBuilder, ConverterBridge};
pub use gate::{BridgeState, InitGate};
