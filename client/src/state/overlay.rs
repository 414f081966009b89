//! Project-details overlay state, dismissal routing, and focus containment.
//!
//! The overlay owns the page scroll lock: opening captures the body's prior
//! `overflow` value and closing hands it back so the caller restores it
//! exactly. Closing an already closed overlay returns `None` and changes
//! nothing.

#[cfg(test)]
#[path = "overlay_test.rs"]
mod overlay_test;

use crate::catalog::{self, ProjectRecord};

/// Selector for elements that participate in the overlay's Tab cycle.
pub const FOCUSABLE_SELECTOR: &str = "button, [href], input, select, textarea, [tabindex]:not([tabindex=\"-1\"])";

/// Visibility and selected record of the details overlay.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OverlayState {
    visible: bool,
    current: Option<usize>,
    saved_overflow: Option<String>,
}

/// Every user action that dismisses the overlay.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DismissTrigger {
    CloseButton,
    Backdrop,
    Escape,
}

/// Rendered fields for the open record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OverlayContent {
    pub title: &'static str,
    pub duration_badge: String,
    pub description: &'static str,
    pub details: &'static str,
    pub technologies: Vec<&'static str>,
    pub achievements: Vec<&'static str>,
}

impl From<&ProjectRecord> for OverlayContent {
    fn from(record: &ProjectRecord) -> Self {
        Self {
            title: record.title,
            duration_badge: format!("Duration: {}", record.duration),
            description: record.description,
            details: record.details,
            technologies: record.technologies.to_vec(),
            achievements: record.achievements.to_vec(),
        }
    }
}

impl OverlayState {
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Show record `index`.
    ///
    /// `prior_overflow` is the body's current `overflow` value; it is only
    /// captured on a closed-to-open transition so switching records while
    /// open keeps the original value.
    ///
    /// # Panics
    ///
    /// Panics when `index` is outside the catalog.
    pub fn open(&mut self, index: usize, prior_overflow: &str) -> &'static ProjectRecord {
        let record = catalog::get(index);
        if !self.visible {
            self.saved_overflow = Some(prior_overflow.to_owned());
        }
        self.visible = true;
        self.current = Some(index);
        record
    }

    /// Hide the overlay, returning the body overflow value to restore.
    pub fn close(&mut self) -> Option<String> {
        if !self.visible {
            return None;
        }
        self.visible = false;
        self.current = None;
        Some(self.saved_overflow.take().unwrap_or_default())
    }

    /// Route a dismissal trigger to [`close`](Self::close).
    pub fn dismiss(&mut self, trigger: DismissTrigger) -> Option<String> {
        match trigger {
            DismissTrigger::CloseButton | DismissTrigger::Backdrop | DismissTrigger::Escape => self.close(),
        }
    }

    /// Handle a document-level key press. Only `Escape` while visible closes.
    pub fn handle_key(&mut self, key: &str) -> Option<String> {
        if key == "Escape" && self.visible {
            return self.dismiss(DismissTrigger::Escape);
        }
        None
    }

    #[must_use]
    pub fn record(&self) -> Option<&'static ProjectRecord> {
        self.current.filter(|_| self.visible).map(catalog::get)
    }

    #[must_use]
    pub fn content(&self) -> Option<OverlayContent> {
        self.record().map(OverlayContent::from)
    }
}

/// Index to move focus to when Tab would leave the overlay, or `None` to let
/// the browser move focus normally.
///
/// `active` is the position of the focused element among the overlay's
/// focusable descendants, when focus is inside the overlay.
#[must_use]
pub fn focus_wrap_target(count: usize, active: Option<usize>, shift: bool) -> Option<usize> {
    if count == 0 {
        return None;
    }
    let last = count - 1;
    match (shift, active) {
        (true, Some(0)) => Some(last),
        (false, Some(i)) if i == last => Some(0),
        // Focus escaped the overlay entirely.
        (true, None) => Some(last),
        (false, None) => Some(0),
        _ => None,
    }
}
