//! The one-time initialization gate.

use std::sync::{Condvar, Mutex, PoisonError};

use adoc_core::errors::BootstrapError;

/// Non-blocking view of the gate for host-side status probes.
///
/// Lets a host distinguish "not ready yet" (a conversion call would block,
/// then proceed) from "permanently broken" (every conversion call fails
/// until the bridge is rebuilt).
#[derive(Debug, Clone)]
pub enum BridgeState {
    /// Bootstrap still running.
    Pending,
    /// Interpreter fully loaded.
    Ready,
    /// Bootstrap failed; the error is terminal for this bridge.
    Failed(BootstrapError),
}

impl BridgeState {
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

enum GateState {
    Pending,
    Ready,
    Failed(BootstrapError),
}

/// One-time state machine with broadcast semantics.
///
/// `Pending` transitions exactly once to `Ready` or `Failed`; both are
/// terminal. Any number of callers may `wait()` before or after resolution
/// and all observe the same outcome. Implemented as an explicit state under
/// a `Mutex` with a `Condvar` rather than a single-consumer signal, since
/// waiters past and future must all be woken.
pub struct InitGate {
    state: Mutex<GateState>,
    resolved: Condvar,
}

impl InitGate {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(GateState::Pending),
            resolved: Condvar::new(),
        }
    }

    /// Block until the gate resolves; `Ok` when bootstrap succeeded, the
    /// captured bootstrap error when it failed. No timeout: a hanging
    /// bootstrap hangs its callers.
    pub fn wait(&self) -> Result<(), BootstrapError> {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        loop {
            match &*state {
                GateState::Pending => {
                    state = self
                        .resolved
                        .wait(state)
                        .unwrap_or_else(PoisonError::into_inner);
                }
                GateState::Ready => return Ok(()),
                GateState::Failed(error) => return Err(error.clone()),
            }
        }
    }

    /// Resolve the gate to Ready. Returns whether this call performed the
    /// transition; resolving an already-resolved gate is ignored.
    pub fn resolve_ready(&self) -> bool {
        self.resolve(GateState::Ready)
    }

    /// Resolve the gate to Failed. Returns whether this call performed the
    /// transition; resolving an already-resolved gate is ignored.
    pub fn resolve_failed(&self, error: BootstrapError) -> bool {
        self.resolve(GateState::Failed(error))
    }

    /// Current state without blocking.
    pub fn snapshot(&self) -> BridgeState {
        let state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        match &*state {
            GateState::Pending => BridgeState::Pending,
            GateState::Ready => BridgeState::Ready,
            GateState::Failed(error) => BridgeState::Failed(error.clone()),
        }
    }

    fn resolve(&self, outcome: GateState) -> bool {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        if !matches!(*state, GateState::Pending) {
            tracing::warn!("initialization gate already resolved; ignoring repeated resolution");
            return false;
        }
        *state = outcome;
        self.resolved.notify_all();
        true
    }
}

impl Default for InitGate {
    fn default() -> Self {
        Self::new()
    }
}
