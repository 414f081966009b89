use super::*;
use crate::config::PageConfig;

// =============================================================
// MenuState
// =============================================================

#[test]
fn menu_starts_closed_and_toggles() {
    let mut menu = MenuState::default();
    assert!(!menu.open);
    menu.toggle();
    assert!(menu.open);
    menu.toggle();
    assert!(!menu.open);
}

#[test]
fn outside_click_closes_menu() {
    let mut menu = MenuState { open: true };
    menu.on_document_click(false, false);
    assert!(!menu.open);
}

#[test]
fn click_inside_menu_or_on_hamburger_keeps_it_open() {
    let mut menu = MenuState { open: true };
    menu.on_document_click(true, false);
    assert!(menu.open);
    menu.on_document_click(false, true);
    assert!(menu.open);
}

#[test]
fn desktop_resize_collapses_menu() {
    let config = PageConfig::default().menu;
    let mut menu = MenuState { open: true };
    menu.on_resize(768.0, &config);
    assert!(menu.open);
    menu.on_resize(1024.0, &config);
    assert!(!menu.open);
}

// =============================================================
// PreloaderPhase
// =============================================================

#[test]
fn preloader_progresses_to_removed() {
    let phase = PreloaderPhase::default();
    assert!(phase.is_mounted());
    assert_eq!(phase.opacity(), "1");

    let fading = phase.advance();
    assert_eq!(fading, PreloaderPhase::FadingOut);
    assert!(fading.is_mounted());
    assert_eq!(fading.opacity(), "0");

    let removed = fading.advance();
    assert_eq!(removed, PreloaderPhase::Removed);
    assert!(!removed.is_mounted());
    assert_eq!(removed.advance(), PreloaderPhase::Removed);
}
