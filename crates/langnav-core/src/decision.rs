//! Single-pass redirect decision.
//!
//! [`decide`] is a pure function of a [`PageSnapshot`] and the two stored
//! values. It never touches a store or the page; the
//! [`LanguageNavigator`](crate::LanguageNavigator) applies its result.
//!
//! # Precedence
//!
//! 1. The selector shows the page language's best match, or the first
//!    available code when nothing matches.
//! 2. A picker marker ends the pass. The caller consumes the marker.
//! 3. A first path segment equal to an available code ends the pass.
//! 4. A same-origin referrer ends the pass.
//! 5. A stored preference resolving to a code other than the current one
//!    navigates. A preference resolving to the current code falls through.
//! 6. The first browser language with any match ends the pass, navigating
//!    only if that match differs from the current code. Later browser
//!    languages are never consulted.
//! 7. Otherwise stay.

use crate::env::PageEnvironment;
use crate::error::Result;
use crate::matcher::best_match;
use crate::route::{first_path_segment, is_direct_navigation, language_path};

/// Everything the decision reads from the page, captured once.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PageSnapshot {
    pub available: Vec<String>,
    pub page_language: String,
    pub path: String,
    pub current_origin: String,
    pub referrer_origin: Option<String>,
    pub browser_languages: Vec<String>,
}

impl PageSnapshot {
    /// Read a snapshot from `env`.
    pub fn capture<E: PageEnvironment + ?Sized>(env: &E) -> Result<Self> {
        Ok(Self {
            available: env.available_languages()?,
            page_language: env.page_language(),
            path: env.current_path(),
            current_origin: env.current_origin(),
            referrer_origin: env.referrer_origin(),
            browser_languages: env.browser_languages(),
        })
    }

    /// Whether the visitor arrived without a same-origin referral.
    #[must_use]
    pub fn is_direct(&self) -> bool {
        is_direct_navigation(self.referrer_origin.as_deref(), &self.current_origin)
    }

    /// Whether the path starts with a segment naming an available code.
    ///
    /// The comparison is exact: `/FR/` does not name `fr`.
    #[must_use]
    pub fn has_explicit_language_segment(&self) -> bool {
        first_path_segment(&self.path)
            .is_some_and(|segment| self.available.iter().any(|code| code == segment))
    }
}

/// Why a pass ended without navigating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StayReason {
    /// The previous page set the picker marker.
    PickerMarker,
    /// The URL already names a language.
    ExplicitPathSegment,
    /// The visitor followed a same-origin link.
    InternalReferral,
    /// The first matching browser language is the current one.
    AlreadyBrowserMatch,
    /// Neither the preference nor any browser language matched.
    NoMatch,
}

impl StayReason {
    /// Stable name for logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PickerMarker => "picker_marker",
            Self::ExplicitPathSegment => "explicit_path_segment",
            Self::InternalReferral => "internal_referral",
            Self::AlreadyBrowserMatch => "already_browser_match",
            Self::NoMatch => "no_match",
        }
    }
}

/// What the pass concluded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// Remain on the current page.
    Stay(StayReason),
    /// Go to `path`, the site path of `language`.
    Navigate { language: String, path: String },
}

impl Decision {
    fn navigate(language: &str, default_language: &str) -> Self {
        Self::Navigate {
            language: language.to_owned(),
            path: language_path(language, default_language),
        }
    }

    /// Target path, if the decision navigates.
    #[must_use]
    pub fn target_path(&self) -> Option<&str> {
        match self {
            Self::Stay(_) => None,
            Self::Navigate { path, .. } => Some(path),
        }
    }
}

/// Result of one decision pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// Best match for the page's declared language.
    pub current: Option<String>,
    /// Value the selector should show.
    pub displayed: Option<String>,
    pub decision: Decision,
}

/// Run the decision pass.
///
/// `picker_marker` and `stored_preference` are the raw stored values. A
/// marker counts as present whatever its value.
#[must_use]
pub fn decide(
    page: &PageSnapshot,
    picker_marker: Option<&str>,
    stored_preference: Option<&str>,
    default_language: &str,
) -> Outcome {
    let current = best_match(&page.page_language, &page.available);
    let displayed = current.or_else(|| page.available.first().map(String::as_str));

    let decision = decide_target(page, current, picker_marker, stored_preference, default_language);

    Outcome {
        current: current.map(str::to_owned),
        displayed: displayed.map(str::to_owned),
        decision,
    }
}

fn decide_target(
    page: &PageSnapshot,
    current: Option<&str>,
    picker_marker: Option<&str>,
    stored_preference: Option<&str>,
    default_language: &str,
) -> Decision {
    if picker_marker.is_some() {
        return Decision::Stay(StayReason::PickerMarker);
    }
    if page.has_explicit_language_segment() {
        return Decision::Stay(StayReason::ExplicitPathSegment);
    }
    if !page.is_direct() {
        return Decision::Stay(StayReason::InternalReferral);
    }

    let preferred = stored_preference.and_then(|p| best_match(p, &page.available));
    if let Some(preferred) = preferred.filter(|&p| Some(p) != current) {
        return Decision::navigate(preferred, default_language);
    }

    for tag in &page.browser_languages {
        if let Some(matched) = best_match(tag, &page.available) {
            if Some(matched) == current {
                return Decision::Stay(StayReason::AlreadyBrowserMatch);
            }
            return Decision::navigate(matched, default_language);
        }
    }

    Decision::Stay(StayReason::NoMatch)
}
