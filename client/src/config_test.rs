use super::*;

#[test]
fn default_config_enables_every_feature() {
    let config = PageConfig::default();
    assert!(config.overlay);
    assert!(config.scroll_top.is_some());
    assert!(config.theme_toggle.is_some());
    assert!(config.contact.is_some());
    assert!(config.preloader.is_some());
    assert!(!config.reduced_motion);
}

#[test]
fn default_timings_match_page_behavior() {
    let config = PageConfig::default();
    let contact = config.contact.expect("contact enabled");
    assert_eq!(contact.delay_ms, 1500);
    assert_eq!(contact.message_ms, 8000);
    assert!((contact.failure_rate - 0.05).abs() < f64::EPSILON);
    assert_eq!(config.reveal.counter_steps, 50);
    assert_eq!(config.reveal.counter_interval_ms, 40);
    assert_eq!(config.reveal.skill_delay_ms, 200);
    assert_eq!(config.nav.lookahead, 100.0);
}

#[test]
fn reveal_thresholds_are_fractions() {
    let reveal = PageConfig::default().reveal;
    for spec in [reveal.generic, reveal.skills, reveal.counters] {
        assert!(spec.threshold > 0.0 && spec.threshold <= 1.0);
        assert!(!spec.selector.is_empty());
    }
}

#[test]
fn with_reduced_motion_sets_flag() {
    let config = PageConfig::default().with_reduced_motion(true);
    assert!(config.reduced_motion);
}

#[test]
fn theme_storage_key_follows_toggle_presence() {
    let mut config = PageConfig::default();
    assert_eq!(config.theme_storage_key(), Some(THEME_STORAGE_KEY));
    config.theme_toggle = None;
    assert_eq!(config.theme_storage_key(), None);
}

#[test]
fn config_serializes_to_json() {
    let json = serde_json::to_value(PageConfig::default()).expect("serialize config");
    assert_eq!(json["nav"]["anchor_offset"], 80.0);
    assert_eq!(json["theme_toggle"]["storage_key"], "theme");
}

#[test]
fn theme_key_is_shared_with_disabled_toggle_fallback() {
    let config = PageConfig { theme_toggle: None, ..PageConfig::default() };
    assert_eq!(config.theme_storage_key().unwrap_or(THEME_STORAGE_KEY), "theme");
    assert_eq!(PageConfig::default().theme_storage_key(), Some(THEME_STORAGE_KEY));
}
