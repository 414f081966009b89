use super::*;

#[test]
fn anchor_target_clears_navbar() {
    assert_eq!(anchor_target(900.0, 80.0), 820.0);
}

#[test]
fn anchor_target_never_negative() {
    assert_eq!(anchor_target(0.0, 80.0), 0.0);
    assert_eq!(anchor_target(40.0, 80.0), 0.0);
}

#[test]
fn fragment_id_strips_hash() {
    assert_eq!(fragment_id("#about"), Some("about"));
    assert_eq!(fragment_id("#"), None);
    assert_eq!(fragment_id("https://example.com"), None);
    assert_eq!(fragment_id(""), None);
}

// =============================================================
// Outside the browser
// =============================================================

#[cfg(not(feature = "hydrate"))]
#[test]
fn geometry_is_neutral_outside_browser() {
    assert_eq!(scroll_offset(), 0.0);
    assert_eq!(viewport_width(), 0.0);
    assert!(section_top("home").is_none());
    assert!(section_bounds().is_empty());
    assert!(body_overflow().is_empty());
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn scroll_to_missing_section_reports_false() {
    assert!(!scroll_to_section("projects", 80.0));
}
