//! The interpreter handle: one QuickJS context and invoke-by-name.
//!
//! The engine performs no locking. The QuickJS context is not safe for
//! concurrent entry, so serialization is the worker loop's responsibility;
//! the type is not `Send`, which keeps it confined to the thread that
//! created it. Values cross the boundary as JSON: arguments are parsed into
//! the context, results are stringified out of it.

use std::sync::Arc;

use rquickjs::convert::Coerced;
use rquickjs::function::Func;
use rquickjs::{CatchResultExt, Context, Ctx, Function, Object, Runtime, Value};
use serde_json::Value as Json;

use adoc_core::constants;
use adoc_core::errors::{BootstrapError, InvocationError};
use adoc_core::HostBridge;

/// Owns the embedded interpreter instance and the invoke-by-name capability.
pub struct ScriptEngine {
    // The runtime must outlive the context; both stay on this thread.
    _runtime: Runtime,
    context: Context,
}

impl std::fmt::Debug for ScriptEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScriptEngine").finish_non_exhaustive()
    }
}

impl ScriptEngine {
    /// Create an engine with an empty global environment.
    pub fn new() -> Result<Self, BootstrapError> {
        let runtime = Runtime::new().map_err(|e| BootstrapError::Engine(e.to_string()))?;
        let context =
            Context::full(&runtime).map_err(|e| BootstrapError::Engine(e.to_string()))?;
        Ok(Self {
            _runtime: runtime,
            context,
        })
    }

    /// Install the baseline bindings the conversion scripts expect:
    /// `console.*` routed into tracing and `navigator.appVersion` for
    /// environment identification.
    pub fn install_shims(&self) -> Result<(), BootstrapError> {
        self.context
            .with(|ctx| -> rquickjs::Result<()> {
                let console = Object::new(ctx.clone())?;
                console.set(
                    "log",
                    Func::from(|message: Coerced<String>| {
                        tracing::debug!(target: "adoc::script", "{}", message.0);
                    }),
                )?;
                console.set(
                    "debug",
                    Func::from(|message: Coerced<String>| {
                        tracing::debug!(target: "adoc::script", "{}", message.0);
                    }),
                )?;
                console.set(
                    "warn",
                    Func::from(|message: Coerced<String>| {
                        tracing::warn!(target: "adoc::script", "{}", message.0);
                    }),
                )?;
                ctx.globals().set("console", console)?;

                ctx.eval::<(), _>(format!(
                    "var navigator = {{ appVersion: '{}' }};",
                    constants::ENVIRONMENT_ID
                ))?;
                Ok(())
            })
            .map_err(|e| BootstrapError::Shim(e.to_string()))
    }

    /// Bind the host capability object under its fixed global name.
    ///
    /// Scripts call `host.call(method, payloadJson)` and receive a JSON
    /// string back; the method surface belongs to the host.
    pub fn bind_host(&self, host: Arc<dyn HostBridge>) -> Result<(), BootstrapError> {
        self.context
            .with(|ctx| -> rquickjs::Result<()> {
                let host_object = Object::new(ctx.clone())?;
                host_object.set(
                    "call",
                    Func::from(move |method: String, payload: Coerced<String>| -> String {
                        let parsed = serde_json::from_str(&payload.0).unwrap_or(Json::Null);
                        host.hostcall(&method, parsed).to_string()
                    }),
                )?;
                ctx.globals().set(constants::HOST_BINDING, host_object)?;
                Ok(())
            })
            .map_err(|e| BootstrapError::HostBinding(e.to_string()))
    }

    /// Evaluate one module's source into the shared global environment.
    pub fn eval_module(&self, module: &str, source: &str) -> Result<(), BootstrapError> {
        self.context.with(|ctx| {
            ctx.eval::<(), _>(source)
                .catch(&ctx)
                .map_err(|e| BootstrapError::ModuleEval {
                    module: module.to_string(),
                    message: e.to_string(),
                })
        })
    }

    /// Invoke a global function by name.
    ///
    /// Returns the function's result as JSON, or `None` when it returned
    /// nothing. The script contract caps call arity at two.
    pub fn invoke(&self, function: &str, args: &[Json]) -> Result<Option<Json>, InvocationError> {
        if args.len() > 2 {
            return Err(InvocationError::Failed {
                function: function.to_string(),
                message: "call arity above script contract".to_string(),
            });
        }

        self.context.with(|ctx| {
            let callee: Function = ctx
                .globals()
                .get(function)
                .map_err(|_| InvocationError::MissingFunction(function.to_string()))?;

            let outcome = match args {
                [] => callee.call::<_, Value>(()),
                [a] => arg_into_ctx(&ctx, a).and_then(|a| callee.call::<_, Value>((a,))),
                [a, b, ..] => arg_into_ctx(&ctx, a).and_then(|a| {
                    let b = arg_into_ctx(&ctx, b)?;
                    callee.call::<_, Value>((a, b))
                }),
            };

            match outcome.catch(&ctx) {
                Ok(value) => json_out_of_ctx(&ctx, value, function),
                Err(e) => Err(InvocationError::Failed {
                    function: function.to_string(),
                    message: e.to_string(),
                }),
            }
        })
    }
}

fn arg_into_ctx<'js>(ctx: &Ctx<'js>, value: &Json) -> rquickjs::Result<Value<'js>> {
    ctx.json_parse(value.to_string())
}

fn json_out_of_ctx<'js>(
    ctx: &Ctx<'js>,
    value: Value<'js>,
    function: &str,
) -> Result<Option<Json>, InvocationError> {
    if value.is_undefined() || value.is_null() {
        return Ok(None);
    }
    let transfer = |message: String| InvocationError::Failed {
        function: function.to_string(),
        message: format!("result could not leave the interpreter: {message}"),
    };
    match ctx.json_stringify(value).catch(ctx) {
        Ok(Some(text)) => {
            let text = text.to_string().map_err(|e| transfer(e.to_string()))?;
            serde_json::from_str(&text)
                .map(Some)
                .map_err(|e| transfer(e.to_string()))
        }
        Ok(None) => Ok(None),
        Err(e) => Err(transfer(e.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use serde_json::json;

    use super::*;

    fn engine() -> ScriptEngine {
        let engine = ScriptEngine::new().unwrap();
        engine.install_shims().unwrap();
        engine
    }

    #[test]
    fn invokes_a_global_function_with_json_arguments() {
        let engine = engine();
        engine
            .eval_module(
                "echo.js",
                "function echo(doc, config) { return { rendered: doc, config: JSON.parse(config) }; }",
            )
            .unwrap();

        let result = engine
            .invoke("echo", &[json!("= Title"), json!("{\"backend\":\"html5\"}")])
            .unwrap()
            .unwrap();
        assert_eq!(result["rendered"], "= Title");
        assert_eq!(result["config"]["backend"], "html5");
    }

    #[test]
    fn missing_function_is_reported_as_such() {
        let engine = engine();
        let error = engine.invoke("convertHtml", &[]).unwrap_err();
        assert!(matches!(error, InvocationError::MissingFunction(name) if name == "convertHtml"));
    }

    #[test]
    fn thrown_exception_carries_its_message() {
        let engine = engine();
        engine
            .eval_module("bad.js", "function explode() { throw new Error('kaboom'); }")
            .unwrap();

        let error = engine.invoke("explode", &[]).unwrap_err();
        match error {
            InvocationError::Failed { function, message } => {
                assert_eq!(function, "explode");
                assert!(message.contains("kaboom"), "message was: {message}");
            }
            other => panic!("expected Failed, got {other}"),
        }
    }

    #[test]
    fn void_function_yields_no_value() {
        let engine = engine();
        engine
            .eval_module("noop.js", "function touch(doc) { }")
            .unwrap();
        assert!(engine.invoke("touch", &[json!({})]).unwrap().is_none());
    }

    #[test]
    fn eval_failure_names_the_module() {
        let engine = engine();
        let error = engine
            .eval_module("broken.js", "throw new Error('bad module');")
            .unwrap_err();
        match error {
            BootstrapError::ModuleEval { module, message } => {
                assert_eq!(module, "broken.js");
                assert!(message.contains("bad module"), "message was: {message}");
            }
            other => panic!("expected ModuleEval, got {other}"),
        }
    }

    #[test]
    fn shims_route_console_into_the_host() {
        // console.log must exist and not throw regardless of argument type.
        let engine = engine();
        engine
            .eval_module("chatty.js", "console.log('hello'); console.warn(42);")
            .unwrap();
    }

    #[test]
    fn host_binding_round_trips_json() {
        struct Recorder(Mutex<Vec<(String, Json)>>);
        impl HostBridge for Recorder {
            fn hostcall(&self, method: &str, payload: Json) -> Json {
                self.0
                    .lock()
                    .unwrap()
                    .push((method.to_string(), payload));
                json!({"ok": true})
            }
        }

        let engine = engine();
        let recorder = Arc::new(Recorder(Mutex::new(Vec::new())));
        engine.bind_host(recorder.clone()).unwrap();
        engine
            .eval_module(
                "caller.js",
                "var answer = JSON.parse(host.call('openUrl', JSON.stringify({url: 'x'})));",
            )
            .unwrap();
        engine
            .eval_module(
                "check.js",
                "function answerOk() { return { rendered: String(answer.ok) }; }",
            )
            .unwrap();

        let result = engine.invoke("answerOk", &[]).unwrap().unwrap();
        assert_eq!(result["rendered"], "true");

        let calls = recorder.0.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "openUrl");
        assert_eq!(calls[0].1, json!({"url": "x"}));
    }
}
