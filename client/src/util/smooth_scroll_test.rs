use super::*;

#[test]
fn easing_hits_endpoints_and_midpoint() {
    assert_eq!(ease_in_out_cubic(0.0), 0.0);
    assert_eq!(ease_in_out_cubic(1.0), 1.0);
    assert!((ease_in_out_cubic(0.5) - 0.5).abs() < 1e-12);
}

#[test]
fn easing_clamps_out_of_range_input() {
    assert_eq!(ease_in_out_cubic(-1.0), 0.0);
    assert_eq!(ease_in_out_cubic(2.0), 1.0);
}

#[test]
fn easing_is_monotonic() {
    let samples = (0..=100).map(|i| ease_in_out_cubic(f64::from(i) / 100.0)).collect::<Vec<_>>();
    for pair in samples.windows(2) {
        assert!(pair[0] <= pair[1]);
    }
}

#[test]
fn plan_moves_from_start_to_target() {
    let plan = ScrollPlan::new(1200.0, 0.0);
    assert_eq!(plan.position_at(0.0), 1200.0);
    assert_eq!(plan.position_at(FALLBACK_DURATION_MS), 0.0);
    assert_eq!(plan.position_at(5000.0), 0.0);
    let mid = plan.position_at(FALLBACK_DURATION_MS / 2.0);
    assert!((mid - 600.0).abs() < 1e-9);
}

#[test]
fn plan_finishes_after_duration() {
    let plan = ScrollPlan::new(0.0, 500.0);
    assert!(!plan.is_finished(999.0));
    assert!(plan.is_finished(1000.0));
}

#[test]
fn zero_duration_plan_jumps_to_target() {
    let plan = ScrollPlan { start: 10.0, target: 90.0, duration_ms: 0.0 };
    assert_eq!(plan.position_at(0.0), 90.0);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn scroll_to_is_noop_outside_browser() {
    scroll_to(100.0);
}
