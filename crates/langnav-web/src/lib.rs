#![forbid(unsafe_code)]

//! Browser front end for `langnav-core`.
//!
//! Page scripts load the module and call `installLanguageNavigator()`;
//! from then on the page-load decision pass and the selector's `change`
//! handler run inside the module. `localStorage` and `sessionStorage` back
//! the stored preference and picker marker.
//!
//! Only [`console`] is platform-independent; the browser bindings compile
//! on `wasm32` alone.

pub mod console;

#[cfg(target_arch = "wasm32")]
mod browser;
#[cfg(target_arch = "wasm32")]
mod logging;
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(target_arch = "wasm32")]
pub use browser::{BrowserEnvironment, BrowserStorage};
#[cfg(target_arch = "wasm32")]
pub use wasm::{best_language_match, install_language_navigator, language_path};
