#![forbid(unsafe_code)]

//! Language navigation for multilingual static sites.
//!
//! Decides, once per page load, whether a visitor should be sent to the
//! subdirectory of their preferred language, and handles explicit picks
//! from the page's language selector. Everything host-specific (storage,
//! DOM, location) is reached through [`KeyValueStore`] and
//! [`PageEnvironment`], so the logic here runs unchanged in the browser
//! and in native tests.
//!
//! Precedence, first hit wins:
//!
//! ```text
//! session marker present      -> stay (marker consumed)
//! explicit /<code>/ segment   -> stay
//! same-origin referrer        -> stay
//! stored preference matches   -> navigate (unless already there)
//! first matching browser tag  -> navigate (unless already there)
//! nothing matches             -> stay
//! ```

pub mod config;
pub mod decision;
pub mod env;
pub mod error;
pub mod matcher;
pub mod navigator;
pub mod route;
pub mod store;

pub use config::NavigatorConfig;
pub use decision::{Decision, Outcome, PageSnapshot, StayReason, decide};
pub use env::{FakeEnvironment, PageEnvironment};
pub use error::{NavError, Result};
pub use matcher::{best_match, primary_subtag};
pub use navigator::LanguageNavigator;
pub use route::{
    absolute_target, first_path_segment, is_direct_navigation, language_path, preferred_languages,
    referrer_origin,
};
pub use store::{KeyValueStore, MemoryStore};
