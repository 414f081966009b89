//! Typed page configuration assembled once at startup.
//!
//! DESIGN
//! ======
//! Components receive their tuning and presence through this context instead
//! of probing the DOM. An optional feature that is `None` is simply not
//! rendered or wired; the rest of the page keeps working.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Serialize;

/// `localStorage` key holding the theme preference.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Navigation and scroll tracking parameters.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct NavConfig {
    /// A section becomes active once the offset is within this distance of its top.
    pub lookahead: f64,
    /// Offset after which the navbar gets its `scrolled` style.
    pub scrolled_after: f64,
    /// Fixed navbar height subtracted from anchor scroll targets.
    pub anchor_offset: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ScrollTopConfig {
    pub show_after: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ThemeToggleConfig {
    pub storage_key: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ContactConfig {
    pub delay_ms: u32,
    /// Probability in `[0, 1]` that a simulated submission fails.
    pub failure_rate: f64,
    pub message_ms: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PreloaderConfig {
    pub hold_ms: u32,
    pub fade_ms: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ObserverSpec {
    pub selector: &'static str,
    pub threshold: f64,
    pub root_margin: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct RevealConfig {
    pub generic: ObserverSpec,
    pub skills: ObserverSpec,
    pub skill_delay_ms: u32,
    pub counters: ObserverSpec,
    pub counter_steps: u32,
    pub counter_interval_ms: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct MenuConfig {
    /// Viewport widths above this collapse the mobile menu.
    pub collapse_above: f64,
    pub resize_debounce_ms: u32,
}

/// Page-wide configuration provided through Leptos context.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct PageConfig {
    pub nav: NavConfig,
    pub menu: MenuConfig,
    pub reveal: RevealConfig,
    pub cursor_hint_selector: &'static str,
    pub scroll_top: Option<ScrollTopConfig>,
    pub theme_toggle: Option<ThemeToggleConfig>,
    pub overlay: bool,
    pub contact: Option<ContactConfig>,
    pub preloader: Option<PreloaderConfig>,
    pub reduced_motion: bool,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            nav: NavConfig { lookahead: 100.0, scrolled_after: 50.0, anchor_offset: 80.0 },
            menu: MenuConfig { collapse_above: 768.0, resize_debounce_ms: 250 },
            reveal: RevealConfig {
                generic: ObserverSpec {
                    selector: ".domain-card, .project-card, .architecture-card, .skill-category, .contact-item",
                    threshold: 0.1,
                    root_margin: "0px 0px -50px 0px",
                },
                skills: ObserverSpec { selector: ".skill-fill", threshold: 0.5, root_margin: "0px" },
                skill_delay_ms: 200,
                counters: ObserverSpec { selector: ".stat-number", threshold: 0.5, root_margin: "0px" },
                counter_steps: 50,
                counter_interval_ms: 40,
            },
            cursor_hint_selector: "button, .btn, .nav-link, .project-card, .domain-card, .contact-item",
            scroll_top: Some(ScrollTopConfig { show_after: 300.0 }),
            theme_toggle: Some(ThemeToggleConfig { storage_key: THEME_STORAGE_KEY }),
            overlay: true,
            contact: Some(ContactConfig { delay_ms: 1500, failure_rate: 0.05, message_ms: 8000 }),
            preloader: Some(PreloaderConfig { hold_ms: 800, fade_ms: 500 }),
            reduced_motion: false,
        }
    }
}

impl PageConfig {
    /// Apply the environment signals read once at startup.
    #[must_use]
    pub fn with_reduced_motion(mut self, reduced: bool) -> Self {
        self.reduced_motion = reduced;
        self
    }

    /// Storage key for the theme preference, if the toggle is enabled.
    #[must_use]
    pub fn theme_storage_key(&self) -> Option<&'static str> {
        self.theme_toggle.map(|t| t.storage_key)
    }
}
