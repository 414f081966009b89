//! Page chrome state: the mobile menu and the preloader.

#[cfg(test)]
#[path = "chrome_test.rs"]
mod chrome_test;

use crate::config::MenuConfig;

/// Collapsible navigation menu for narrow viewports.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    pub open: bool,
}

impl MenuState {
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Document click. Closes unless the click landed on the hamburger or
    /// inside the menu.
    pub fn on_document_click(&mut self, inside_menu: bool, on_hamburger: bool) {
        if !inside_menu && !on_hamburger {
            self.close();
        }
    }

    /// Settled viewport width after a resize. Desktop widths collapse the menu.
    pub fn on_resize(&mut self, width: f64, config: &MenuConfig) {
        if width > config.collapse_above {
            self.close();
        }
    }
}

/// Full-screen loading cover shown until the page has loaded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PreloaderPhase {
    #[default]
    Visible,
    FadingOut,
    Removed,
}

impl PreloaderPhase {
    /// Next phase in `Visible -> FadingOut -> Removed`.
    #[must_use]
    pub fn advance(self) -> Self {
        match self {
            Self::Visible => Self::FadingOut,
            Self::FadingOut | Self::Removed => Self::Removed,
        }
    }

    #[must_use]
    pub fn is_mounted(self) -> bool {
        self != Self::Removed
    }

    #[must_use]
    pub fn opacity(self) -> &'static str {
        match self {
            Self::Visible => "1",
            Self::FadingOut | Self::Removed => "0",
        }
    }
}
