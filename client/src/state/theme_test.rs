use super::*;

// =============================================================
// Theme::resolve
// =============================================================

#[test]
fn stored_value_wins_over_system_preference() {
    assert_eq!(Theme::resolve(Some("light"), true), Theme::Light);
    assert_eq!(Theme::resolve(Some("dark"), false), Theme::Dark);
}

#[test]
fn system_preference_used_without_stored_value() {
    assert_eq!(Theme::resolve(None, true), Theme::Dark);
    assert_eq!(Theme::resolve(None, false), Theme::Light);
}

#[test]
fn garbage_stored_value_falls_back_to_system() {
    assert_eq!(Theme::resolve(Some("purple"), true), Theme::Dark);
    assert_eq!(Theme::resolve(Some(""), false), Theme::Light);
}

#[test]
fn theme_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Theme::Dark).expect("serialize"), "\"dark\"");
    let parsed: Theme = serde_json::from_str("\"light\"").expect("deserialize");
    assert_eq!(parsed, Theme::Light);
    assert_eq!(Theme::Dark.to_string(), "dark");
}

#[test]
fn icon_differs_per_theme() {
    assert_ne!(Theme::Light.icon(), Theme::Dark.icon());
}

// =============================================================
// ThemePreference
// =============================================================

#[test]
fn toggle_is_a_strict_two_cycle_and_persists() {
    let mut store = MemoryStore::default();
    let mut pref = ThemePreference::load(&store, "theme", false);
    assert_eq!(pref.theme, Theme::Light);

    assert_eq!(pref.toggle(&mut store), Theme::Dark);
    assert_eq!(store.get("theme"), Some("dark"));

    assert_eq!(pref.toggle(&mut store), Theme::Light);
    assert_eq!(store.get("theme"), Some("light"));
}

#[test]
fn load_reads_persisted_value() {
    let mut store = MemoryStore::default();
    store.save("theme", "dark");
    let pref = ThemePreference::load(&store, "theme", false);
    assert_eq!(pref.theme, Theme::Dark);
}

#[test]
fn load_does_not_write() {
    let store = MemoryStore::default();
    let _ = ThemePreference::load(&store, "theme", true);
    assert!(store.get("theme").is_none());
}
