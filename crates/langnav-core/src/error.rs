//! Errors raised at the host boundary.
//!
//! "No match", "no referrer" and similar absences are not errors; they are
//! ordinary branches of the decision pass. Only failures of the host
//! itself (missing DOM nodes, rejected storage, refused navigation, bad
//! options) surface as [`NavError`].

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, NavError>;

/// Failures reported by a store, the page environment, or option parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavError {
    /// A required host capability is missing.
    Environment(String),
    /// A store operation was rejected.
    Storage { key: String, message: String },
    /// The host refused to change location.
    Navigation { target: String, message: String },
    /// Options could not be parsed.
    Config(String),
}

impl NavError {
    /// Build a storage error for `key`.
    pub fn storage(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Storage {
            key: key.into(),
            message: message.into(),
        }
    }

    /// Build a navigation error for `target`.
    pub fn navigation(target: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Navigation {
            target: target.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for NavError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Environment(msg) => write!(f, "environment unavailable: {msg}"),
            Self::Storage { key, message } => write!(f, "storage error on '{key}': {message}"),
            Self::Navigation { target, message } => {
                write!(f, "navigation to '{target}' failed: {message}")
            }
            Self::Config(msg) => write!(f, "invalid options: {msg}"),
        }
    }
}

impl std::error::Error for NavError {}

impl From<serde_json::Error> for NavError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_storage() {
        let err = NavError::storage("preferredLanguage", "quota exceeded");
        assert_eq!(
            err.to_string(),
            "storage error on 'preferredLanguage': quota exceeded"
        );
    }

    #[test]
    fn display_navigation() {
        let err = NavError::navigation("https://example.org/fr/", "blocked");
        assert_eq!(
            err.to_string(),
            "navigation to 'https://example.org/fr/' failed: blocked"
        );
    }

    #[test]
    fn json_error_becomes_config() {
        let err: NavError = serde_json::from_str::<u8>("nope").unwrap_err().into();
        assert!(matches!(err, NavError::Config(_)));
    }
}
