//! Theme persistence and application.
//!
//! Reads the preference from `localStorage`, falling back to the system
//! colour scheme, and applies it as a `data-color-scheme` attribute on the
//! `<html>` element. Requires a browser environment.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort browser-only behavior; SSR paths no-op so server
//! rendering stays deterministic.

#[cfg(test)]
#[path = "theme_storage_test.rs"]
mod theme_storage_test;

use crate::state::theme::{PreferenceStore, Theme, ThemePreference};

#[cfg(feature = "hydrate")]
const SCHEME_ATTRIBUTE: &str = "data-color-scheme";
#[cfg(feature = "hydrate")]
const TRANSITION_MS: u32 = 300;

/// `window.localStorage`, or nothing when storage is unavailable.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStore;

impl PreferenceStore for LocalStore {
    fn load(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
            storage.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn save(&mut self, key: &str, value: &str) {
        #[cfg(feature = "hydrate")]
        {
            let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
                leptos::logging::warn!("localStorage unavailable; theme preference not saved");
                return;
            };
            if storage.set_item(key, value).is_err() {
                leptos::logging::warn!("failed to persist {key}={value}");
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
        }
    }
}

/// Whether the system asks for a dark colour scheme.
pub fn system_prefers_dark() -> bool {
    matches_media("(prefers-color-scheme: dark)")
}

/// Whether the system asks for reduced motion.
pub fn system_prefers_reduced_motion() -> bool {
    matches_media("(prefers-reduced-motion: reduce)")
}

fn matches_media(query: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.match_media(query).ok().flatten())
            .map_or(false, |mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = query;
        false
    }
}

/// Initial preference from storage and the system colour scheme.
pub fn read_preference(key: &'static str) -> ThemePreference {
    ThemePreference::load(&LocalStore, key, system_prefers_dark())
}

/// Set `data-color-scheme` on `<html>` with a short body colour transition.
pub fn apply(theme: Theme) {
    #[cfg(feature = "hydrate")]
    {
        let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        if let Some(el) = doc.document_element() {
            let _ = el.set_attribute(SCHEME_ATTRIBUTE, theme.as_str());
        }
        if let Some(body) = doc.body() {
            let style = body.style();
            let _ = style.set_property("transition", "background-color 0.3s ease, color 0.3s ease");
            gloo_timers::callback::Timeout::new(TRANSITION_MS, move || {
                let _ = style.remove_property("transition");
            })
            .forget();
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
    }
}

/// Toggle the theme, apply it, and persist it to `localStorage`.
pub fn toggle(pref: &mut ThemePreference) -> Theme {
    let next = pref.toggle(&mut LocalStore);
    apply(next);
    next
}
