use std::collections::HashSet;

use super::*;

#[test]
fn section_ids_are_unique() {
    let ids = SECTIONS.iter().map(|s| s.id).collect::<HashSet<_>>();
    assert_eq!(ids.len(), SECTIONS.len());
}

#[test]
fn skill_levels_are_percentages() {
    for category in SKILL_CATEGORIES {
        for skill in category.skills {
            assert!(skill.level <= 100, "{} has level {}", skill.name, skill.level);
        }
    }
}

#[test]
fn projects_section_is_navigable() {
    assert!(SECTIONS.iter().any(|s| s.id == "projects"));
    assert!(SECTIONS.iter().any(|s| s.id == "contact"));
}
