//! The bootstrap sequencer.
//!
//! Runs exactly once, on the worker thread. Each step is a precondition for
//! the next: shims and the host binding first, then every script module in
//! list order, since later modules may depend on bindings established by
//! earlier ones. Any failure aborts the remaining steps; the error keeps the
//! failing module and underlying cause attached.

use std::sync::Arc;

use adoc_core::errors::BootstrapError;
use adoc_core::{HostBridge, ModuleSource};

use crate::interpreter::ScriptEngine;

/// Build the interpreter: engine, shims, host binding, then the ordered
/// module list. Returns the ready engine or the first failure.
pub fn run(
    source: &dyn ModuleSource,
    modules: &[String],
    host: Arc<dyn HostBridge>,
) -> Result<ScriptEngine, BootstrapError> {
    let engine = ScriptEngine::new()?;
    engine.install_shims()?;
    engine.bind_host(host)?;

    for module in modules {
        let text = source
            .fetch(module)
            .map_err(|e| BootstrapError::ModuleFetch {
                module: module.clone(),
                message: e.to_string(),
            })?;
        engine.eval_module(module, &text)?;
        tracing::debug!(module = %module, "module evaluated");
    }

    Ok(engine)
}

#[cfg(test)]
mod tests {
    use adoc_core::{MemoryModuleSource, NullHostBridge};
    use serde_json::json;

    use super::*;

    fn modules(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn loads_modules_in_list_order() {
        // B reads a binding only A establishes.
        let source = MemoryModuleSource::new()
            .with("a.js", "var makeTitle = function (t) { return '<h1>' + t + '</h1>'; };")
            .with(
                "b.js",
                "var rendered = makeTitle('probe'); function probe() { return { rendered: rendered }; }",
            );

        let engine = run(
            &source,
            &modules(&["a.js", "b.js"]),
            Arc::new(NullHostBridge),
        )
        .unwrap();
        let result = engine.invoke("probe", &[]).unwrap().unwrap();
        assert_eq!(result["rendered"], "<h1>probe</h1>");
    }

    #[test]
    fn reversed_order_fails_at_the_dependent_module() {
        let source = MemoryModuleSource::new()
            .with("a.js", "var makeTitle = function (t) { return t; };")
            .with("b.js", "var rendered = makeTitle('probe');");

        let error = run(
            &source,
            &modules(&["b.js", "a.js"]),
            Arc::new(NullHostBridge),
        )
        .unwrap_err();
        assert_eq!(error.module(), Some("b.js"));
    }

    #[test]
    fn missing_module_aborts_with_fetch_error() {
        let source = MemoryModuleSource::new().with("a.js", "var a = 1;");
        let error = run(
            &source,
            &modules(&["a.js", "gone.js"]),
            Arc::new(NullHostBridge),
        )
        .unwrap_err();
        match error {
            BootstrapError::ModuleFetch { module, .. } => assert_eq!(module, "gone.js"),
            other => panic!("expected ModuleFetch, got {other}"),
        }
    }

    #[test]
    fn shims_are_available_to_the_first_module() {
        let source = MemoryModuleSource::new().with(
            "env.js",
            "console.log(navigator.appVersion); function env() { return { rendered: navigator.appVersion }; }",
        );
        let engine = run(&source, &modules(&["env.js"]), Arc::new(NullHostBridge)).unwrap();
        let result = engine.invoke("env", &[]).unwrap().unwrap();
        assert_eq!(result, json!({"rendered": "adoc"}));
    }
}
