use super::*;

// =============================================================
// RevealTracker
// =============================================================

#[test]
fn reveal_fires_once_per_key() {
    let mut tracker = RevealTracker::default();
    assert!(tracker.reveal("card-0"));
    assert!(!tracker.reveal("card-0"));
    assert!(!tracker.reveal("card-0"));
}

#[test]
fn reveal_keys_are_independent() {
    let mut tracker = RevealTracker::default();
    assert!(tracker.reveal(1_u32));
    assert!(tracker.reveal(2_u32));
    assert!(!tracker.reveal(1_u32));
    assert!(tracker.reveal(3_u32));
}

// =============================================================
// SkillLevel
// =============================================================

#[test]
fn skill_level_parses_percent() {
    assert_eq!(SkillLevel::parse("85").map(SkillLevel::percent), Some(85));
    assert_eq!(SkillLevel::parse(" 90% ").map(SkillLevel::percent), Some(90));
    assert_eq!(SkillLevel::parse("85").map(SkillLevel::width).as_deref(), Some("85%"));
}

#[test]
fn skill_level_clamps_to_hundred() {
    assert_eq!(SkillLevel::parse("250").map(SkillLevel::percent), Some(100));
}

#[test]
fn skill_level_rejects_garbage() {
    assert!(SkillLevel::parse("").is_none());
    assert!(SkillLevel::parse("-5").is_none());
    assert!(SkillLevel::parse("high").is_none());
}

#[test]
fn counter_target_parses_integers() {
    assert_eq!(parse_counter_target(" 150 "), Some(150));
    assert_eq!(parse_counter_target("1.5"), None);
}

// =============================================================
// CounterAnimation
// =============================================================

#[test]
fn counter_to_hundred_is_monotonic_and_exact() {
    let frames = CounterAnimation::new(100, 50).collect::<Vec<_>>();
    assert_eq!(frames.len(), 50);
    for pair in frames.windows(2) {
        assert!(pair[0].value <= pair[1].value);
    }
    assert!(frames.iter().all(|f| f.value <= 100));
    let last = frames.last().expect("final frame");
    assert_eq!(last.value, 100);
    assert!(last.done);
    assert!(frames[..49].iter().all(|f| !f.done));
}

#[test]
fn counter_steps_floor_intermediate_values() {
    let frames = CounterAnimation::new(7, 50).collect::<Vec<_>>();
    // 7 * 8 / 50 = 1.12
    assert_eq!(frames[7].value, 1);
    assert_eq!(frames[48].value, 6);
    assert_eq!(frames[49].value, 7);
}

#[test]
fn counter_with_zero_target_ends_at_zero() {
    let frames = CounterAnimation::new(0, 50).collect::<Vec<_>>();
    assert!(frames.iter().all(|f| f.value == 0));
    assert!(frames.last().is_some_and(|f| f.done));
}

#[test]
fn counter_stops_after_final_frame() {
    let mut counter = CounterAnimation::new(10, 2);
    assert_eq!(counter.tick(), Some(CounterFrame { value: 5, done: false }));
    assert_eq!(counter.tick(), Some(CounterFrame { value: 10, done: true }));
    assert!(counter.is_done());
    assert_eq!(counter.tick(), None);
}

#[test]
fn counter_zero_steps_is_single_frame() {
    let frames = CounterAnimation::new(42, 0).collect::<Vec<_>>();
    assert_eq!(frames, vec![CounterFrame { value: 42, done: true }]);
}
