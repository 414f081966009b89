use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::*;
use crate::config::PageConfig;

fn filled() -> ContactState {
    ContactState {
        fields: ContactFields {
            name: "Ada".to_owned(),
            email: "ada@example.com".to_owned(),
            subject: "Project".to_owned(),
            message: "Hello there".to_owned(),
        },
        ..ContactState::default()
    }
}

fn transport() -> SimulatedTransport {
    SimulatedTransport::from(PageConfig::default().contact.expect("contact enabled"))
}

// =============================================================
// phases
// =============================================================

#[test]
fn default_state_is_idle() {
    let state = ContactState::default();
    assert_eq!(state.phase, SubmissionPhase::Idle);
    assert!(state.message.is_none());
    assert_eq!(state.button_label(), "Send Message");
}

#[test]
fn begin_enters_pending_and_disables_trigger() {
    let mut state = filled();
    let snapshot = state.begin().expect("begin");
    assert_eq!(snapshot.name, "Ada");
    assert!(state.is_pending());
    assert_eq!(state.button_label(), "Sending...");
}

#[test]
fn begin_while_pending_is_rejected() {
    let mut state = filled();
    state.begin().expect("first begin");
    assert_eq!(state.begin(), Err(SubmissionError::AlreadyPending));
    assert!(state.is_pending());
}

#[test]
fn success_clears_fields_and_shows_success() {
    let mut state = filled();
    state.begin().expect("begin");
    state.finish(Ok(()));
    assert_eq!(state.phase, SubmissionPhase::Succeeded);
    assert_eq!(state.fields, ContactFields::default());
    let message = state.message.as_ref().expect("message");
    assert_eq!(message.kind, MessageKind::Success);
    assert_eq!(message.text, SUCCESS_MESSAGE);
    assert!(!state.is_pending());
}

#[test]
fn failure_keeps_fields_and_shows_error() {
    let mut state = filled();
    let before = state.fields.clone();
    state.begin().expect("begin");
    state.finish(Err(SubmissionError::SimulatedNetwork));
    assert_eq!(state.phase, SubmissionPhase::Failed);
    assert_eq!(state.fields, before);
    let message = state.message.as_ref().expect("message");
    assert_eq!(message.kind, MessageKind::Error);
    assert_eq!(message.kind.class(), "form-message error");
    assert!(!state.is_pending());
}

#[test]
fn retry_allowed_after_failure() {
    let mut state = filled();
    state.begin().expect("begin");
    state.finish(Err(SubmissionError::SimulatedNetwork));
    assert!(state.begin().is_ok());
}

#[test]
fn fields_are_addressable_by_name() {
    let mut fields = ContactFields::default();
    fields.set(Field::Subject, "Architecture review".to_owned());
    fields.set(Field::Email, "ada@example.com".to_owned());
    assert_eq!(fields.get(Field::Subject), "Architecture review");
    assert_eq!(fields.email, "ada@example.com");
    assert_eq!(fields.get(Field::Name), "");
    assert_ne!(fields, ContactFields::default());
}

// =============================================================
// auto-hide
// =============================================================

#[test]
fn hide_message_clears_matching_message() {
    let mut state = filled();
    state.begin().expect("begin");
    let seq = state.finish(Ok(()));
    assert!(state.hide_message(seq));
    assert!(state.message.is_none());
    assert!(!state.hide_message(seq));
}

#[test]
fn stale_hide_does_not_clear_newer_message() {
    let mut state = filled();
    state.begin().expect("begin");
    let first = state.finish(Err(SubmissionError::SimulatedNetwork));
    state.begin().expect("begin again");
    let second = state.finish(Ok(()));
    assert_ne!(first, second);
    assert!(!state.hide_message(first));
    assert!(state.message.is_some());
    assert!(state.hide_message(second));
}

// =============================================================
// SimulatedTransport
// =============================================================

#[test]
fn outcome_threshold_matches_failure_rate() {
    let transport = transport();
    assert_eq!(transport.outcome(0.0), Err(SubmissionError::SimulatedNetwork));
    assert_eq!(transport.outcome(0.05), Err(SubmissionError::SimulatedNetwork));
    assert_eq!(transport.outcome(0.050_001), Ok(()));
    assert_eq!(transport.outcome(0.999), Ok(()));
}

#[test]
fn failure_rate_converges_to_five_percent() {
    let transport = transport();
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let trials = 100_000;
    let failures = (0..trials)
        .filter(|_| transport.outcome(rng.random::<f64>()).is_err())
        .count();
    let rate = failures as f64 / f64::from(trials);
    assert!((rate - 0.05).abs() < 0.005, "failure rate {rate}");
}

#[test]
fn simulated_trials_preserve_or_clear_fields_by_outcome() {
    let transport = transport();
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..500 {
        let mut state = filled();
        let before = state.fields.clone();
        state.begin().expect("begin");
        let result = transport.outcome(rng.random::<f64>());
        let failed = result.is_err();
        state.finish(result);
        if failed {
            assert_eq!(state.fields, before);
        } else {
            assert_eq!(state.fields, ContactFields::default());
        }
    }
}

#[test]
fn error_messages_render() {
    assert_eq!(SubmissionError::SimulatedNetwork.to_string(), "simulated network error");
}
