//! The public converter bridge.

use std::sync::Arc;
use std::thread;

use crossbeam_channel::Sender;
use serde_json::Value as Json;

use adoc_core::config::PayloadSource;
use adoc_core::errors::{AdaptationError, BootstrapError, ConvertError, InvocationError};
use adoc_core::{
    ConvertKind, ConverterConfig, ConverterResult, HostBridge, ModuleSource, NullHostBridge,
};

use crate::gate::{BridgeState, InitGate};
use crate::worker::{self, Job, WorkerSeed};

/// Bridge between the host and the embedded conversion scripts.
///
/// Construction spawns the interpreter worker and returns immediately;
/// bootstrap proceeds in the background. Conversion calls block until the
/// bridge is ready (or permanently failed), then queue through the worker,
/// which serializes every invocation. Instances are plain values: pass the
/// bridge to its consumers, and multiple bridges can coexist.
pub struct ConverterBridge {
    gate: Arc<InitGate>,
    jobs: Option<Sender<Job>>,
    worker: Option<thread::JoinHandle<()>>,
    config: ConverterConfig,
}

/// Collaborators for a [`ConverterBridge`] under construction.
pub struct BridgeBuilder {
    source: Arc<dyn ModuleSource>,
    modules: Vec<String>,
    host: Arc<dyn HostBridge>,
    config: ConverterConfig,
}

impl ConverterBridge {
    /// Start building a bridge over the given module source and ordered
    /// module list. Order is part of the script contract: later modules may
    /// depend on bindings established by earlier ones.
    pub fn builder(
        source: impl ModuleSource,
        modules: impl IntoIterator<Item = impl Into<String>>,
    ) -> BridgeBuilder {
        BridgeBuilder {
            source: Arc::new(source),
            modules: modules.into_iter().map(Into::into).collect(),
            host: Arc::new(NullHostBridge),
            config: ConverterConfig::default(),
        }
    }

    /// Convert AsciiDoc source to DocBook.
    pub fn convert_docbook(&self, document: &str) -> Result<ConverterResult, ConvertError> {
        let payload = self.config.docbook.json_payload()?;
        self.convert(ConvertKind::Docbook, document, payload)
    }

    /// Convert AsciiDoc source to the live-preview representation.
    pub fn convert_asciidoc(&self, document: &str) -> Result<ConverterResult, ConvertError> {
        let payload = self.config.preview.json_payload()?;
        self.convert(ConvertKind::Asciidoc, document, payload)
    }

    /// Convert AsciiDoc source to standalone HTML.
    pub fn convert_html(&self, document: &str) -> Result<ConverterResult, ConvertError> {
        let payload = self.config.html.json_payload()?;
        self.convert(ConvertKind::Html, document, payload)
    }

    /// Convert AsciiDoc source to ODF.
    pub fn convert_odf(&self, document: &str) -> Result<ConverterResult, ConvertError> {
        let payload = self.config.odf.json_payload()?;
        self.convert(ConvertKind::Odf, document, payload)
    }

    /// Queue a best-effort outline refresh for an opaque document handle and
    /// return immediately. Failures are logged at debug severity and never
    /// surfaced; if the bridge never became ready the request is dropped the
    /// same silent way.
    pub fn fill_outlines(&self, document: Json) {
        let Some(jobs) = self.jobs.as_ref() else {
            return;
        };
        if jobs.send(Job::FillOutlines { document }).is_err() {
            tracing::debug!("outline refresh dropped; interpreter worker is gone");
        }
    }

    /// Block until bootstrap resolves, propagating its failure.
    pub fn wait_ready(&self) -> Result<(), BootstrapError> {
        self.gate.wait()
    }

    /// Current bridge state without blocking.
    pub fn state(&self) -> BridgeState {
        self.gate.snapshot()
    }

    /// The configuration the bridge serializes payloads from.
    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }

    fn convert(
        &self,
        kind: ConvertKind,
        document: &str,
        config_payload: String,
    ) -> Result<ConverterResult, ConvertError> {
        self.gate.wait()?;

        let (reply_tx, reply_rx) = crossbeam_channel::bounded(1);
        let job = Job::Convert {
            function: kind.function_name(),
            document: document.to_string(),
            config: config_payload,
            reply: reply_tx,
        };
        let Some(jobs) = self.jobs.as_ref() else {
            return Err(unavailable(kind));
        };
        jobs.send(job).map_err(|_| unavailable(kind))?;

        match reply_rx.recv().map_err(|_| unavailable(kind))? {
            Ok(Some(raw)) => Ok(ConverterResult::from_raw(kind, raw)?),
            Ok(None) => Err(ConvertError::Adaptation(AdaptationError::MissingResult {
                operation: kind.as_str().to_string(),
            })),
            Err(source) => Err(ConvertError::Invocation {
                operation: kind.as_str().to_string(),
                source,
            }),
        }
    }
}

impl BridgeBuilder {
    /// Replace the default null host bridge.
    pub fn with_host(mut self, host: impl HostBridge) -> Self {
        self.host = Arc::new(host);
        self
    }

    /// Replace the default converter configuration.
    pub fn with_config(mut self, config: ConverterConfig) -> Self {
        self.config = config;
        self
    }

    /// Spawn the interpreter worker and return the bridge. Bootstrap runs in
    /// the background; the returned bridge is immediately usable and its
    /// calls block on the initialization gate as needed.
    pub fn spawn(self) -> Result<ConverterBridge, BootstrapError> {
        let (jobs_tx, jobs_rx) = crossbeam_channel::unbounded();
        let gate = Arc::new(InitGate::new());

        let seed = WorkerSeed {
            gate: gate.clone(),
            jobs: jobs_rx,
            source: self.source,
            modules: self.modules,
            host: self.host,
        };
        let worker = thread::Builder::new()
            .name("adoc-interpreter".to_string())
            .spawn(move || worker::run(seed))
            .map_err(|e| BootstrapError::Spawn(e.to_string()))?;

        Ok(ConverterBridge {
            gate,
            jobs: Some(jobs_tx),
            worker: Some(worker),
            config: self.config,
        })
    }
}

impl Drop for ConverterBridge {
    fn drop(&mut self) {
        // Disconnect the queue so the worker drains and exits, then join it.
        self.jobs.take();
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}

fn unavailable(kind: ConvertKind) -> ConvertError {
    ConvertError::Invocation {
        operation: kind.as_str().to_string(),
        source: InvocationError::Unavailable,
    }
}
