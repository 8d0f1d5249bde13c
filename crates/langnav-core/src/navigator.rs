//! Runner that binds the decision pass to real stores and a page.
//!
//! Stored values are read leniently: a store that fails to read is
//! logged and treated as empty, so a locked-down browser degrades to
//! "no redirect" instead of breaking the page.

use tracing::{debug, info, warn};

use crate::config::NavigatorConfig;
use crate::decision::{Decision, Outcome, PageSnapshot, decide};
use crate::env::PageEnvironment;
use crate::error::Result;
use crate::route::{absolute_target, language_path};
use crate::store::KeyValueStore;

/// Language navigator over a session store `S`, a persistent store `P`
/// and a page environment `E`.
pub struct LanguageNavigator<S, P, E> {
    config: NavigatorConfig,
    session: S,
    persistent: P,
    env: E,
}

impl<S, P, E> LanguageNavigator<S, P, E>
where
    S: KeyValueStore,
    P: KeyValueStore,
    E: PageEnvironment,
{
    /// Create a navigator. Nothing is read until [`run`](Self::run).
    pub fn new(config: NavigatorConfig, session: S, persistent: P, env: E) -> Self {
        Self {
            config,
            session,
            persistent,
            env,
        }
    }

    /// Run the page-load decision pass.
    ///
    /// Consumes the picker marker, updates the selector, and navigates if
    /// the pass decides to. Returns the outcome for inspection; after a
    /// successful navigation the page is being unloaded.
    pub fn run(&mut self) -> Result<Outcome> {
        let page = PageSnapshot::capture(&self.env)?;
        let marker = self.consume_marker();
        let preference = read_lenient(&self.persistent, &self.config.preference_key);

        let outcome = decide(
            &page,
            marker.as_deref(),
            preference.as_deref(),
            &self.config.default_language,
        );

        if let Some(displayed) = &outcome.displayed {
            if let Err(err) = self.env.set_selected_language(displayed) {
                warn!(language = %displayed, error = %err, "could not update language selector");
            }
        }

        match &outcome.decision {
            Decision::Stay(reason) => {
                debug!(
                    reason = reason.as_str(),
                    current = outcome.current.as_deref().unwrap_or(""),
                    "staying on current language"
                );
            }
            Decision::Navigate { language, path } => {
                let target = absolute_target(&page.current_origin, path);
                info!(
                    language = %language,
                    target = %target,
                    from = outcome.current.as_deref().unwrap_or(""),
                    "redirecting to preferred language"
                );
                self.env.navigate(&target)?;
            }
        }

        Ok(outcome)
    }

    /// Handle an explicit pick from the selector.
    ///
    /// Records the pick as the stored preference, sets the picker marker
    /// so the destination page does not redirect again, and navigates.
    /// Store failures are logged; navigation still happens.
    pub fn select(&mut self, code: &str) -> Result<()> {
        if let Err(err) = self.persistent.set(&self.config.preference_key, code) {
            warn!(language = %code, error = %err, "could not store language preference");
        }
        if let Err(err) = self.session.set(&self.config.picker_marker_key, code) {
            warn!(language = %code, error = %err, "could not set picker marker");
        }

        let path = language_path(code, &self.config.default_language);
        let target = absolute_target(&self.env.current_origin(), &path);
        info!(language = %code, target = %target, "language picked");
        self.env.navigate(&target)
    }

    pub fn env(&self) -> &E {
        &self.env
    }

    pub fn session(&self) -> &S {
        &self.session
    }

    pub fn persistent(&self) -> &P {
        &self.persistent
    }

    /// Split back into `(session, persistent, env)`.
    pub fn into_parts(self) -> (S, P, E) {
        (self.session, self.persistent, self.env)
    }

    /// Read and delete the picker marker.
    ///
    /// A marker that was read but could not be deleted still counts.
    fn consume_marker(&mut self) -> Option<String> {
        let key = &self.config.picker_marker_key;
        let marker = read_lenient(&self.session, key)?;
        if let Err(err) = self.session.remove(key) {
            warn!(key = %key, error = %err, "could not clear picker marker");
        }
        Some(marker)
    }
}

fn read_lenient<T: KeyValueStore>(store: &T, key: &str) -> Option<String> {
    match store.get(key) {
        Ok(value) => value,
        Err(err) => {
            warn!(key = %key, error = %err, "store read failed, treating as absent");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{PICKER_MARKER_KEY, PREFERENCE_KEY};
    use crate::decision::StayReason;
    use crate::env::FakeEnvironment;
    use crate::error::NavError;
    use crate::store::MemoryStore;

    type Nav = LanguageNavigator<MemoryStore, MemoryStore, FakeEnvironment>;

    fn navigator(env: FakeEnvironment) -> Nav {
        LanguageNavigator::new(
            NavigatorConfig::default(),
            MemoryStore::new(),
            MemoryStore::new(),
            env,
        )
    }

    #[test]
    fn run_sets_selector_even_when_staying() {
        let mut nav = navigator(FakeEnvironment::new(&["en", "fr"], "fr").with_path("/fr/"));
        let outcome = nav.run().unwrap();
        assert_eq!(
            outcome.decision,
            Decision::Stay(StayReason::ExplicitPathSegment)
        );
        assert_eq!(nav.env().selected.as_deref(), Some("fr"));
        assert!(nav.env().navigations.is_empty());
    }

    #[test]
    fn run_navigates_with_absolute_url() {
        let env = FakeEnvironment::new(&["en", "fr"], "en").with_browser_languages(&["fr"]);
        let mut nav = navigator(env);
        nav.run().unwrap();
        assert_eq!(nav.env().navigations, vec!["https://example.org/fr/"]);
    }

    #[test]
    fn run_consumes_marker() {
        let mut nav = LanguageNavigator::new(
            NavigatorConfig::default(),
            MemoryStore::with_entry(PICKER_MARKER_KEY, "fr"),
            MemoryStore::with_entry(PREFERENCE_KEY, "de"),
            FakeEnvironment::new(&["en", "fr", "de"], "fr"),
        );
        let outcome = nav.run().unwrap();
        assert_eq!(outcome.decision, Decision::Stay(StayReason::PickerMarker));
        assert!(nav.session().is_empty());
    }

    #[test]
    fn undeletable_marker_still_suppresses() {
        let mut nav = LanguageNavigator::new(
            NavigatorConfig::default(),
            MemoryStore::with_entry(PICKER_MARKER_KEY, "fr").read_only(),
            MemoryStore::with_entry(PREFERENCE_KEY, "de"),
            FakeEnvironment::new(&["en", "fr", "de"], "en"),
        );
        let outcome = nav.run().unwrap();
        assert_eq!(outcome.decision, Decision::Stay(StayReason::PickerMarker));
        assert!(nav.env().navigations.is_empty());
    }

    #[test]
    fn refused_navigation_surfaces() {
        let env = FakeEnvironment {
            refuse_navigation: Some("sandboxed".into()),
            ..FakeEnvironment::new(&["en", "fr"], "en").with_browser_languages(&["fr"])
        };
        let mut nav = navigator(env);
        assert!(matches!(nav.run(), Err(NavError::Navigation { .. })));
    }

    #[test]
    fn select_writes_both_stores_and_navigates() {
        let mut nav = navigator(FakeEnvironment::new(&["en", "fr"], "en"));
        nav.select("fr").unwrap();
        assert_eq!(
            nav.persistent().get(PREFERENCE_KEY).unwrap().as_deref(),
            Some("fr")
        );
        assert_eq!(
            nav.session().get(PICKER_MARKER_KEY).unwrap().as_deref(),
            Some("fr")
        );
        assert_eq!(nav.env().last_navigated_path(), Some("/fr/"));
    }

    #[test]
    fn select_default_goes_to_root() {
        let mut nav = navigator(FakeEnvironment::new(&["en", "fr"], "fr"));
        nav.select("en").unwrap();
        assert_eq!(nav.env().last_navigated_path(), Some("/"));
    }

    #[test]
    fn select_navigates_when_stores_fail() {
        let mut nav = LanguageNavigator::new(
            NavigatorConfig::default(),
            MemoryStore::new().read_only(),
            MemoryStore::new().read_only(),
            FakeEnvironment::new(&["en", "fr"], "en"),
        );
        nav.select("fr").unwrap();
        assert_eq!(nav.env().last_navigated_path(), Some("/fr/"));
    }

    #[test]
    fn custom_keys_and_default_language() {
        let config = NavigatorConfig::default()
            .with_default_language("fr")
            .with_preference_key("pref")
            .with_picker_marker_key("picked");
        let mut nav = LanguageNavigator::new(
            config,
            MemoryStore::new(),
            MemoryStore::new(),
            FakeEnvironment::new(&["fr", "en"], "en").with_path("/en/"),
        );
        nav.select("fr").unwrap();
        let (session, persistent, env) = nav.into_parts();
        assert_eq!(session.get("picked").unwrap().as_deref(), Some("fr"));
        assert_eq!(persistent.get("pref").unwrap().as_deref(), Some("fr"));
        assert_eq!(env.last_navigated_path(), Some("/"));
    }
}
