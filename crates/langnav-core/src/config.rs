//! Navigator options.
//!
//! Defaults match the markup and storage keys the site templates emit, so
//! a page that passes no options behaves exactly like one that passes all
//! of them explicitly.

use serde::Deserialize;

use crate::error::Result;

/// Element id of the language `<select>`.
pub const DEFAULT_SELECTOR_ID: &str = "language";
/// Language served at the site root.
pub const DEFAULT_LANGUAGE: &str = "en";
/// Persistent store key for the visitor's explicit choice.
pub const PREFERENCE_KEY: &str = "preferredLanguage";
/// Session store key set right before a picker-initiated navigation.
pub const PICKER_MARKER_KEY: &str = "languageRedirectFromPicker";
/// Default tracing filter for the browser console sink.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Configuration for [`LanguageNavigator`](crate::LanguageNavigator).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct NavigatorConfig {
    /// Element id of the language selector control.
    pub selector_id: String,
    /// Code served at `/`; every other code lives under `/<code>/`.
    pub default_language: String,
    /// Persistent store key for the stored preference.
    pub preference_key: String,
    /// Session store key for the picker marker.
    pub picker_marker_key: String,
    /// Tracing filter directive (e.g. `"debug"`, `"langnav_core=trace"`).
    pub log_level: String,
}

impl Default for NavigatorConfig {
    fn default() -> Self {
        Self {
            selector_id: DEFAULT_SELECTOR_ID.to_owned(),
            default_language: DEFAULT_LANGUAGE.to_owned(),
            preference_key: PREFERENCE_KEY.to_owned(),
            picker_marker_key: PICKER_MARKER_KEY.to_owned(),
            log_level: DEFAULT_LOG_LEVEL.to_owned(),
        }
    }
}

impl NavigatorConfig {
    /// Parse a (possibly partial) JSON options object.
    ///
    /// Blank input yields the defaults. Unknown fields are rejected.
    pub fn from_json(json: &str) -> Result<Self> {
        if json.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(json)?)
    }

    /// Set the selector element id.
    #[must_use]
    pub fn with_selector_id(mut self, id: impl Into<String>) -> Self {
        self.selector_id = id.into();
        self
    }

    /// Set the language served at the site root.
    #[must_use]
    pub fn with_default_language(mut self, code: impl Into<String>) -> Self {
        self.default_language = code.into();
        self
    }

    /// Set the persistent preference key.
    #[must_use]
    pub fn with_preference_key(mut self, key: impl Into<String>) -> Self {
        self.preference_key = key.into();
        self
    }

    /// Set the session marker key.
    #[must_use]
    pub fn with_picker_marker_key(mut self, key: impl Into<String>) -> Self {
        self.picker_marker_key = key.into();
        self
    }

    /// Set the tracing filter directive.
    #[must_use]
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NavError;

    #[test]
    fn defaults_match_site_markup() {
        let cfg = NavigatorConfig::default();
        assert_eq!(cfg.selector_id, "language");
        assert_eq!(cfg.default_language, "en");
        assert_eq!(cfg.preference_key, "preferredLanguage");
        assert_eq!(cfg.picker_marker_key, "languageRedirectFromPicker");
        assert_eq!(cfg.log_level, "warn");
    }

    #[test]
    fn blank_json_is_default() {
        assert_eq!(
            NavigatorConfig::from_json("  ").unwrap(),
            NavigatorConfig::default()
        );
    }

    #[test]
    fn partial_json_keeps_other_defaults() {
        let cfg = NavigatorConfig::from_json(r#"{"defaultLanguage":"de","logLevel":"debug"}"#)
            .unwrap();
        assert_eq!(cfg.default_language, "de");
        assert_eq!(cfg.log_level, "debug");
        assert_eq!(cfg.selector_id, "language");
    }

    #[test]
    fn unknown_field_rejected() {
        let err = NavigatorConfig::from_json(r#"{"selector":"lang"}"#).unwrap_err();
        assert!(matches!(err, NavError::Config(_)));
    }

    #[test]
    fn malformed_json_rejected() {
        assert!(NavigatorConfig::from_json("{").is_err());
    }

    #[test]
    fn builder_chain() {
        let cfg = NavigatorConfig::default()
            .with_selector_id("lang-picker")
            .with_default_language("fr")
            .with_preference_key("pref")
            .with_picker_marker_key("marker")
            .with_log_level("trace");
        assert_eq!(cfg.selector_id, "lang-picker");
        assert_eq!(cfg.default_language, "fr");
        assert_eq!(cfg.preference_key, "pref");
        assert_eq!(cfg.picker_marker_key, "marker");
        assert_eq!(cfg.log_level, "trace");
    }
}
