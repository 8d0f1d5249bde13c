//! Path and origin helpers.
//!
//! The site layout reserves `/` for the default language and puts every
//! other language under `/<code>/`.

use url::Url;

/// Site path for `code`.
///
/// ```
/// use langnav_core::language_path;
///
/// assert_eq!(language_path("en", "en"), "/");
/// assert_eq!(language_path("pt-br", "en"), "/pt-br/");
/// ```
#[must_use]
pub fn language_path(code: &str, default_language: &str) -> String {
    if code.eq_ignore_ascii_case(default_language) {
        "/".to_owned()
    } else {
        format!("/{code}/")
    }
}

/// First non-empty `/`-separated segment of `path`.
#[must_use]
pub fn first_path_segment(path: &str) -> Option<&str> {
    path.split('/').find(|segment| !segment.is_empty())
}

/// Whether the visitor arrived without a same-origin referral.
///
/// `referrer_origin` is `None` for an empty or unparsable referrer.
#[must_use]
pub fn is_direct_navigation(referrer_origin: Option<&str>, current_origin: &str) -> bool {
    referrer_origin.is_none_or(|origin| origin != current_origin)
}

/// Origin of a raw referrer URL.
///
/// Empty and unparsable referrers yield `None`, which
/// [`is_direct_navigation`] treats as a direct visit. Opaque origins
/// serialize as `"null"` and never equal a page origin.
#[must_use]
pub fn referrer_origin(raw: &str) -> Option<String> {
    if raw.is_empty() {
        return None;
    }
    Url::parse(raw)
        .ok()
        .map(|url| url.origin().ascii_serialization())
}

/// Browser languages in priority order.
///
/// Falls back to the single `primary` language when the ordered list is
/// empty or unavailable.
#[must_use]
pub fn preferred_languages(list: Vec<String>, primary: Option<String>) -> Vec<String> {
    if list.is_empty() {
        primary.into_iter().collect()
    } else {
        list
    }
}

/// Absolute URL for a same-origin navigation to `path`.
#[must_use]
pub fn absolute_target(origin: &str, path: &str) -> String {
    format!("{}{path}", origin.trim_end_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_language_is_root() {
        assert_eq!(language_path("en", "en"), "/");
        assert_eq!(language_path("EN", "en"), "/");
        assert_eq!(language_path("fr", "en"), "/fr/");
        assert_eq!(language_path("en", "fr"), "/en/");
    }

    #[test]
    fn first_segment_skips_empty() {
        assert_eq!(first_path_segment("/fr/article"), Some("fr"));
        assert_eq!(first_path_segment("//fr//"), Some("fr"));
        assert_eq!(first_path_segment("/"), None);
        assert_eq!(first_path_segment(""), None);
    }

    #[test]
    fn direct_navigation_cases() {
        let here = "https://example.org";
        assert!(is_direct_navigation(None, here));
        assert!(is_direct_navigation(Some("https://search.example"), here));
        assert!(!is_direct_navigation(Some(here), here));
    }

    #[test]
    fn referrer_origin_strips_path() {
        assert_eq!(
            referrer_origin("https://example.org/fr/article?x=1").as_deref(),
            Some("https://example.org")
        );
        assert_eq!(
            referrer_origin("http://localhost:8080/").as_deref(),
            Some("http://localhost:8080")
        );
    }

    #[test]
    fn empty_or_malformed_referrer_is_direct() {
        let here = "https://example.org";
        for raw in ["", "not a url", "/fr/relative"] {
            let origin = referrer_origin(raw);
            assert_eq!(origin, None, "{raw:?}");
            assert!(is_direct_navigation(origin.as_deref(), here), "{raw:?}");
        }
    }

    #[test]
    fn cross_origin_referrer_is_direct() {
        let here = "https://example.org";
        let origin = referrer_origin("https://www.search.example/?q=stop");
        assert_eq!(origin.as_deref(), Some("https://www.search.example"));
        assert!(is_direct_navigation(origin.as_deref(), here));

        let same = referrer_origin("https://example.org/de/");
        assert!(!is_direct_navigation(same.as_deref(), here));
    }

    #[test]
    fn opaque_referrer_is_direct() {
        let origin = referrer_origin("data:text/html,hi");
        assert_eq!(origin.as_deref(), Some("null"));
        assert!(is_direct_navigation(origin.as_deref(), "https://example.org"));
    }

    #[test]
    fn empty_language_list_falls_back_to_primary() {
        assert_eq!(
            preferred_languages(Vec::new(), Some("fr-CA".into())),
            vec!["fr-CA".to_owned()]
        );
    }

    #[test]
    fn language_list_ignores_primary() {
        assert_eq!(
            preferred_languages(vec!["de".into(), "fr".into()], Some("en".into())),
            vec!["de".to_owned(), "fr".to_owned()]
        );
    }

    #[test]
    fn no_languages_at_all() {
        assert!(preferred_languages(Vec::new(), None).is_empty());
    }

    #[test]
    fn absolute_target_joins_cleanly() {
        assert_eq!(
            absolute_target("https://example.org", "/fr/"),
            "https://example.org/fr/"
        );
        assert_eq!(absolute_target("https://example.org/", "/"), "https://example.org/");
    }
}
