#![forbid(unsafe_code)]

//! `wasm-bindgen` exports.
//!
//! Only compiled on `wasm32` targets.

use std::cell::RefCell;
use std::rc::Rc;

use langnav_core::{LanguageNavigator, NavError, NavigatorConfig};
use tracing::{debug, error};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Event, Window};

use crate::browser::{BrowserEnvironment, BrowserStorage};
use crate::console::ConsoleMethod;
use crate::logging;

type BrowserNavigator = LanguageNavigator<BrowserStorage, BrowserStorage, BrowserEnvironment>;

fn install_panic_hook() {
    use std::sync::Once;

    static ONCE: Once = Once::new();
    ONCE.call_once(|| {
        std::panic::set_hook(Box::new(|info| {
            let msg = if let Some(loc) = info.location() {
                format!(
                    "panic at {}:{}:{}: {info}",
                    loc.file(),
                    loc.line(),
                    loc.column()
                )
            } else {
                format!("panic: {info}")
            };
            logging::console_call(ConsoleMethod::Error, &msg);
        }));
    });
}

fn to_js(err: &NavError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

#[wasm_bindgen(start)]
pub fn wasm_start() {
    install_panic_hook();
}

/// Install the navigator on the current page.
///
/// `options` is an optional JSON object, e.g. `{"selectorId":"lang","logLevel":"debug"}`.
/// The decision pass runs on `DOMContentLoaded`, or immediately when the
/// document has already been parsed.
#[wasm_bindgen(js_name = installLanguageNavigator)]
pub fn install_language_navigator(options: Option<String>) -> Result<(), JsValue> {
    install_panic_hook();
    let config = NavigatorConfig::from_json(options.as_deref().unwrap_or(""))
        .map_err(|err| to_js(&err))?;
    logging::install(&config.log_level);

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    if document.ready_state() != "loading" {
        return start(window, config).map_err(|err| to_js(&err));
    }

    debug!("waiting for DOMContentLoaded");
    let mut pending = Some((window, config));
    let on_ready = Closure::<dyn FnMut(Event)>::new(move |_: Event| {
        if let Some((window, config)) = pending.take() {
            if let Err(err) = start(window, config) {
                error!(error = %err, "language navigator failed to start");
            }
        }
    });
    document
        .add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref())?;
    // Page-lifetime listener.
    on_ready.forget();
    Ok(())
}

/// Run the decision pass and attach the selector's `change` handler.
fn start(window: Window, config: NavigatorConfig) -> Result<(), NavError> {
    let env = BrowserEnvironment::new(window.clone(), &config.selector_id)?;
    let select = env.select_element().clone();
    let navigator: Rc<RefCell<BrowserNavigator>> = Rc::new(RefCell::new(LanguageNavigator::new(
        config,
        BrowserStorage::session(&window),
        BrowserStorage::local(&window),
        env,
    )));

    let handler_nav = Rc::clone(&navigator);
    let on_change = Closure::<dyn FnMut(Event)>::new(move |_: Event| {
        let mut nav = handler_nav.borrow_mut();
        let code = nav.env().selected_value();
        if let Err(err) = nav.select(&code) {
            error!(language = %code, error = %err, "language selection failed");
        }
    });
    select
        .add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref())
        .map_err(|err| NavError::Environment(crate::browser::js_error_message(&err)))?;
    on_change.forget();

    // The change handler stays bound even if the pass below fails.
    let result = navigator.borrow_mut().run();
    result
        .map(drop)
        .inspect_err(|err| error!(error = %err, "language decision pass failed"))
}

/// Best available code for `tag`, or `undefined`.
#[wasm_bindgen(js_name = bestLanguageMatch)]
pub fn best_language_match(tag: &str, available: Vec<String>) -> Option<String> {
    langnav_core::best_match(tag, &available).map(str::to_owned)
}

/// Site path for `code` under the default layout.
#[wasm_bindgen(js_name = languagePath)]
pub fn language_path(code: &str) -> String {
    langnav_core::language_path(code, langnav_core::config::DEFAULT_LANGUAGE)
}
