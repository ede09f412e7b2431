//! The host capability seam exposed to scripts.

use serde_json::Value;

/// Host functionality reachable from inside the interpreter.
///
/// Scripts see a single global object with a `call(method, payloadJson)`
/// entry point; each call routes here. The method surface is defined by the
/// host, opaque to the bridge.
pub trait HostBridge: Send + Sync + 'static {
    /// Handle a script-originated call. Must not call back into the bridge;
    /// reentrant invocation from inside a script is not supported.
    fn hostcall(&self, method: &str, payload: Value) -> Value;
}

/// Default host bridge that answers every call with null.
#[derive(Debug, Default)]
pub struct NullHostBridge;

impl HostBridge for NullHostBridge {
    fn hostcall(&self, method: &str, _payload: Value) -> Value {
        tracing::debug!(method = %method, "hostcall ignored by null host bridge");
        Value::Null
    }
}
