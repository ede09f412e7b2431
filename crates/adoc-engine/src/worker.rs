//! The dedicated interpreter worker.
//!
//! One thread bootstraps the interpreter, resolves the gate, then serially
//! drains the job queue until every sender is gone. The queue is the mutual
//! exclusion boundary: no two invocations ever execute inside the
//! interpreter at once, and each conversion pairs with its own reply
//! channel, so results cannot cross between callers.

use std::sync::Arc;

use crossbeam_channel::{Receiver, Sender};
use serde_json::Value as Json;

use adoc_core::constants;
use adoc_core::errors::InvocationError;
use adoc_core::{HostBridge, ModuleSource};

use crate::bootstrap;
use crate::gate::InitGate;

/// A queued invocation.
pub(crate) enum Job {
    /// A conversion awaiting its reply.
    Convert {
        function: &'static str,
        document: String,
        config: String,
        reply: Sender<Result<Option<Json>, InvocationError>>,
    },
    /// Best-effort outline refresh; nobody observes the outcome.
    FillOutlines { document: Json },
}

pub(crate) struct WorkerSeed {
    pub gate: Arc<InitGate>,
    pub jobs: Receiver<Job>,
    pub source: Arc<dyn ModuleSource>,
    pub modules: Vec<String>,
    pub host: Arc<dyn HostBridge>,
}

pub(crate) fn run(seed: WorkerSeed) {
    let engine = match bootstrap::run(seed.source.as_ref(), &seed.modules, seed.host) {
        Ok(engine) => engine,
        Err(error) => {
            tracing::error!(error = %error, "interpreter bootstrap failed");
            seed.gate.resolve_failed(error);
            // Dropping the receiver disconnects every sender; queued
            // fire-and-forget jobs die with it.
            return;
        }
    };
    seed.gate.resolve_ready();
    tracing::info!(modules = seed.modules.len(), "interpreter ready");

    while let Ok(job) = seed.jobs.recv() {
        match job {
            Job::Convert {
                function,
                document,
                config,
                reply,
            } => {
                let result =
                    engine.invoke(function, &[Json::String(document), Json::String(config)]);
                // A dead reply channel means the caller is gone; nothing to do.
                let _ = reply.send(result);
            }
            Job::FillOutlines { document } => {
                if let Err(error) = engine.invoke(constants::FN_FILL_OUTLINES, &[document]) {
                    tracing::debug!(error = %error, "outline fill failed");
                }
            }
        }
    }
}
