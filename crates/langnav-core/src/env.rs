//! Page environment capability.
//!
//! Everything the navigator needs from the hosting page, reduced to plain
//! strings. The browser implementation lives in `langnav-web`;
//! [`FakeEnvironment`] records side effects for tests.

use crate::error::{NavError, Result};
use crate::route;

/// Read access to the page plus the two side effects the navigator performs.
pub trait PageEnvironment {
    /// Option values of the language selector, in display order.
    fn available_languages(&self) -> Result<Vec<String>>;

    /// Language declared on the root document element (may be empty).
    fn page_language(&self) -> String;

    /// Path component of the current location.
    fn current_path(&self) -> String;

    /// Origin of the current location (scheme, host, port).
    fn current_origin(&self) -> String;

    /// Origin of the referrer; `None` when it is empty or unparsable.
    fn referrer_origin(&self) -> Option<String>;

    /// Preferred languages in priority order.
    ///
    /// Implementations fall back to the single primary language when the
    /// ordered list is unavailable.
    fn browser_languages(&self) -> Vec<String>;

    /// Show `code` as the selector's current value.
    fn set_selected_language(&mut self, code: &str) -> Result<()>;

    /// Replace the current location with `url` (absolute, same origin).
    fn navigate(&mut self, url: &str) -> Result<()>;
}

/// Scriptable environment for tests and native embedding.
#[derive(Debug, Clone)]
pub struct FakeEnvironment {
    pub available: Vec<String>,
    pub page_language: String,
    pub path: String,
    pub origin: String,
    pub referrer_origin: Option<String>,
    pub browser_languages: Vec<String>,
    /// Last value pushed into the selector.
    pub selected: Option<String>,
    /// Every URL passed to [`PageEnvironment::navigate`], in order.
    pub navigations: Vec<String>,
    /// When set, `navigate` fails with this message.
    pub refuse_navigation: Option<String>,
}

impl Default for FakeEnvironment {
    fn default() -> Self {
        Self {
            available: vec!["en".to_owned()],
            page_language: "en".to_owned(),
            path: "/".to_owned(),
            origin: "https://example.org".to_owned(),
            referrer_origin: None,
            browser_languages: Vec::new(),
            selected: None,
            navigations: Vec::new(),
            refuse_navigation: None,
        }
    }
}

impl FakeEnvironment {
    /// Environment with the given selector options and page language.
    #[must_use]
    pub fn new(available: &[&str], page_language: &str) -> Self {
        Self {
            available: available.iter().map(|s| (*s).to_owned()).collect(),
            page_language: page_language.to_owned(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_path(mut self, path: &str) -> Self {
        self.path = path.to_owned();
        self
    }

    #[must_use]
    pub fn with_referrer_origin(mut self, origin: &str) -> Self {
        self.referrer_origin = Some(origin.to_owned());
        self
    }

    /// Set the referrer from a raw URL, as the browser reports it.
    #[must_use]
    pub fn with_referrer(mut self, raw: &str) -> Self {
        self.referrer_origin = route::referrer_origin(raw);
        self
    }

    #[must_use]
    pub fn with_browser_languages(mut self, languages: &[&str]) -> Self {
        self.browser_languages = languages.iter().map(|s| (*s).to_owned()).collect();
        self
    }

    /// Path of the most recent navigation, relative to the origin.
    #[must_use]
    pub fn last_navigated_path(&self) -> Option<&str> {
        self.navigations
            .last()
            .map(|url| url.strip_prefix(self.origin.as_str()).unwrap_or(url))
    }
}

impl PageEnvironment for FakeEnvironment {
    fn available_languages(&self) -> Result<Vec<String>> {
        Ok(self.available.clone())
    }

    fn page_language(&self) -> String {
        self.page_language.clone()
    }

    fn current_path(&self) -> String {
        self.path.clone()
    }

    fn current_origin(&self) -> String {
        self.origin.clone()
    }

    fn referrer_origin(&self) -> Option<String> {
        self.referrer_origin.clone()
    }

    fn browser_languages(&self) -> Vec<String> {
        self.browser_languages.clone()
    }

    fn set_selected_language(&mut self, code: &str) -> Result<()> {
        self.selected = Some(code.to_owned());
        Ok(())
    }

    fn navigate(&mut self, url: &str) -> Result<()> {
        if let Some(message) = &self.refuse_navigation {
            return Err(NavError::navigation(url, message.clone()));
        }
        self.navigations.push(url.to_owned());
        Ok(())
    }
}
