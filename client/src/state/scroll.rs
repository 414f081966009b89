//! Scroll-derived page state: active nav section, navbar style, and the
//! scroll-to-top button's visibility.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

use crate::config::{NavConfig, ScrollTopConfig};

/// Measured top edge of a page section.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionBounds {
    pub id: &'static str,
    pub top: f64,
}

/// Last section, in document order, whose top minus `lookahead` has been
/// scrolled past.
#[must_use]
pub fn active_section(sections: &[SectionBounds], offset: f64, lookahead: f64) -> Option<&'static str> {
    sections
        .iter()
        .rev()
        .find(|s| offset >= s.top - lookahead)
        .map(|s| s.id)
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScrollState {
    pub offset: f64,
    pub last_offset: f64,
    pub navbar_scrolled: bool,
    pub show_scroll_top: bool,
    pub active_section: Option<&'static str>,
}

impl ScrollState {
    /// Recompute everything for a new scroll offset.
    ///
    /// Returns `true` when the highlighted section changed.
    pub fn on_scroll(
        &mut self,
        offset: f64,
        sections: &[SectionBounds],
        nav: &NavConfig,
        scroll_top: Option<&ScrollTopConfig>,
    ) -> bool {
        self.last_offset = self.offset;
        self.offset = offset;
        self.navbar_scrolled = offset > nav.scrolled_after;
        self.show_scroll_top = scroll_top.is_some_and(|c| offset > c.show_after);

        let next = active_section(sections, offset, nav.lookahead);
        let changed = next != self.active_section;
        self.active_section = next;
        changed
    }

    #[must_use]
    pub fn is_active(&self, id: &str) -> bool {
        self.active_section == Some(id)
    }
}
