#![forbid(unsafe_code)]

//! `web-sys` implementations of the store and page capabilities.

use langnav_core::{KeyValueStore, NavError, PageEnvironment, Result, route};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement, HtmlOptionElement, HtmlSelectElement, Storage, Window};

pub(crate) fn js_error_message(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

/// `localStorage` or `sessionStorage`.
///
/// Browsers may deny storage entirely (privacy modes, sandboxed frames);
/// every operation then fails with [`NavError::Storage`].
pub struct BrowserStorage {
    name: &'static str,
    storage: Option<Storage>,
}

impl BrowserStorage {
    /// Cross-session store.
    pub fn local(window: &Window) -> Self {
        Self {
            name: "localStorage",
            storage: window.local_storage().ok().flatten(),
        }
    }

    /// Tab-session store.
    pub fn session(window: &Window) -> Self {
        Self {
            name: "sessionStorage",
            storage: window.session_storage().ok().flatten(),
        }
    }

    fn storage(&self, key: &str) -> Result<&Storage> {
        self.storage
            .as_ref()
            .ok_or_else(|| NavError::storage(key, format!("{} is unavailable", self.name)))
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.storage(key)?
            .get_item(key)
            .map_err(|err| NavError::storage(key, js_error_message(&err)))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.storage(key)?
            .set_item(key, value)
            .map_err(|err| NavError::storage(key, js_error_message(&err)))
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.storage(key)?
            .remove_item(key)
            .map_err(|err| NavError::storage(key, js_error_message(&err)))
    }
}

/// The live page: selector element, root document, location and navigator.
pub struct BrowserEnvironment {
    window: Window,
    document: Document,
    select: HtmlSelectElement,
}

impl BrowserEnvironment {
    /// Bind to the `<select>` with id `selector_id`.
    pub fn new(window: Window, selector_id: &str) -> Result<Self> {
        let document = window
            .document()
            .ok_or_else(|| NavError::Environment("window has no document".into()))?;
        let select = document
            .get_element_by_id(selector_id)
            .ok_or_else(|| NavError::Environment(format!("no element with id '{selector_id}'")))?
            .dyn_into::<HtmlSelectElement>()
            .map_err(|_| NavError::Environment(format!("#{selector_id} is not a <select>")))?;
        Ok(Self {
            window,
            document,
            select,
        })
    }

    /// The bound selector element.
    pub fn select_element(&self) -> &HtmlSelectElement {
        &self.select
    }

    /// Value currently chosen in the selector.
    pub fn selected_value(&self) -> String {
        self.select.value()
    }
}

impl PageEnvironment for BrowserEnvironment {
    fn available_languages(&self) -> Result<Vec<String>> {
        Ok((0..self.select.length())
            .filter_map(|idx| self.select.item(idx))
            .filter_map(|el| el.dyn_into::<HtmlOptionElement>().ok())
            .map(|opt| opt.value())
            .collect())
    }

    fn page_language(&self) -> String {
        self.document
            .document_element()
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
            .map(|el| el.lang())
            .unwrap_or_default()
    }

    fn current_path(&self) -> String {
        self.window
            .location()
            .pathname()
            .unwrap_or_else(|_| "/".to_owned())
    }

    fn current_origin(&self) -> String {
        self.window.location().origin().unwrap_or_default()
    }

    fn referrer_origin(&self) -> Option<String> {
        route::referrer_origin(&self.document.referrer())
    }

    fn browser_languages(&self) -> Vec<String> {
        let navigator = self.window.navigator();
        let languages = navigator
            .languages()
            .iter()
            .filter_map(|value| value.as_string())
            .collect();
        route::preferred_languages(languages, navigator.language())
    }

    fn set_selected_language(&mut self, code: &str) -> Result<()> {
        self.select.set_value(code);
        Ok(())
    }

    fn navigate(&mut self, url: &str) -> Result<()> {
        self.window
            .location()
            .assign(url)
            .map_err(|err| NavError::navigation(url, js_error_message(&err)))
    }
}
