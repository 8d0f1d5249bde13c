//! Best-match lookup of a language tag against the available codes.
//!
//! # Invariants
//!
//! 1. **Exact beats primary**: an exact case-insensitive hit is returned
//!    even when an earlier code matches only the primary subtag.
//! 2. **First wins**: among equal-quality candidates the earliest code in
//!    declaration order is returned.
//! 3. **Absence is not an error**: an empty tag or no candidate yields `None`.
//!
//! The returned slice is the available code as declared (original casing),
//! so it can be compared directly with selector option values.

/// Portion of `tag` before the first hyphen.
///
/// ```
/// use langnav_core::primary_subtag;
///
/// assert_eq!(primary_subtag("pt-BR"), "pt");
/// assert_eq!(primary_subtag("fr"), "fr");
/// ```
#[must_use]
pub fn primary_subtag(tag: &str) -> &str {
    tag.split_once('-').map_or(tag, |(primary, _)| primary)
}

/// Find the best available code for `tag`.
///
/// ```
/// use langnav_core::best_match;
///
/// let available = ["en", "fr", "pt-br"];
/// assert_eq!(best_match("PT-BR", &available), Some("pt-br"));
/// assert_eq!(best_match("fr-CA", &available), Some("fr"));
/// assert_eq!(best_match("de", &available), None);
/// ```
#[must_use]
pub fn best_match<'a, S: AsRef<str>>(tag: &str, available: &'a [S]) -> Option<&'a str> {
    let normalized = tag.to_lowercase();
    if normalized.is_empty() {
        return None;
    }
    let primary = primary_subtag(&normalized);

    let mut primary_hit = None;
    for code in available {
        let code = code.as_ref();
        let lower = code.to_lowercase();
        if lower == normalized {
            return Some(code);
        }
        if primary_hit.is_none() && lower == primary {
            primary_hit = Some(code);
        }
    }
    primary_hit
}
