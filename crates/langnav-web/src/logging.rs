#![forbid(unsafe_code)]

//! Console-backed tracing subscriber.

use std::sync::Once;

use js_sys::Reflect;
use langnav_core::config::DEFAULT_LOG_LEVEL;
use tracing_subscriber::EnvFilter;
use wasm_bindgen::{JsCast, JsValue};

use crate::console::{ConsoleMakeWriter, ConsoleMethod};

/// Call `console.<method>(msg)`, silently doing nothing if `console` is missing.
pub(crate) fn console_call(method: ConsoleMethod, msg: &str) {
    let global = js_sys::global();
    let Ok(console) = Reflect::get(&global, &"console".into()) else {
        return;
    };
    let Ok(func) = Reflect::get(&console, &method.name().into()) else {
        return;
    };
    let Ok(func) = func.dyn_into::<js_sys::Function>() else {
        return;
    };
    let _ = func.call1(&console, &JsValue::from_str(msg));
}

/// Install the global subscriber once. Later calls are ignored.
pub(crate) fn install(directive: &str) {
    static ONCE: Once = Once::new();
    ONCE.call_once(|| {
        let filter = EnvFilter::try_new(directive).unwrap_or_else(|err| {
            console_call(
                ConsoleMethod::Warn,
                &format!("langnav: invalid log level '{directive}' ({err}), using '{DEFAULT_LOG_LEVEL}'"),
            );
            EnvFilter::new(DEFAULT_LOG_LEVEL)
        });
        let subscriber = tracing_subscriber::fmt()
            .with_writer(ConsoleMakeWriter::new(console_call))
            .with_ansi(false)
            .without_time()
            .with_env_filter(filter)
            .finish();
        if tracing::subscriber::set_global_default(subscriber).is_err() {
            console_call(
                ConsoleMethod::Debug,
                "langnav: a tracing subscriber is already installed",
            );
        }
    });
}
