//! Contact form state and the simulated submission.
//!
//! DESIGN
//! ======
//! `idle -> pending -> {succeeded, failed}`. The trigger stays disabled while
//! pending so only one submission is ever in flight. Success clears the form;
//! failure keeps what the visitor typed. The submission sits behind
//! [`Transport`] so a real request can replace the simulator without touching
//! the form.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use serde::Serialize;

use crate::config::ContactConfig;

pub const SUCCESS_MESSAGE: &str = "Thank you for your message! I'll get back to you within 24 hours.";
pub const ERROR_MESSAGE: &str =
    "There was an error sending your message. Please try again or contact me directly via email.";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmissionError {
    #[error("simulated network error")]
    SimulatedNetwork,
    #[error("a submission is already in progress")]
    AlreadyPending,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionPhase {
    #[default]
    Idle,
    Pending,
    Succeeded,
    Failed,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// One input of the contact form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactFields {
    #[must_use]
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Subject => &mut self.subject,
            Field::Message => &mut self.message,
        };
        *slot = value;
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
}

impl MessageKind {
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Success => "form-message success",
            Self::Error => "form-message error",
        }
    }
}

/// Inline feedback under the form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormMessage {
    pub kind: MessageKind,
    pub text: &'static str,
    /// Identifies this message so a stale auto-hide cannot clear a newer one.
    pub seq: u64,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactState {
    pub fields: ContactFields,
    pub phase: SubmissionPhase,
    pub message: Option<FormMessage>,
    message_seq: u64,
}

impl ContactState {
    /// Enter `pending`. Rejected while another submission is in flight.
    ///
    /// # Errors
    ///
    /// Returns [`SubmissionError::AlreadyPending`] when already pending.
    pub fn begin(&mut self) -> Result<ContactFields, SubmissionError> {
        if self.phase == SubmissionPhase::Pending {
            return Err(SubmissionError::AlreadyPending);
        }
        self.phase = SubmissionPhase::Pending;
        Ok(self.fields.clone())
    }

    /// Resolve the pending submission. Returns the new message's sequence
    /// number for scheduling its auto-hide.
    pub fn finish(&mut self, result: Result<(), SubmissionError>) -> u64 {
        let (phase, kind, text) = match result {
            Ok(()) => {
                self.fields = ContactFields::default();
                (SubmissionPhase::Succeeded, MessageKind::Success, SUCCESS_MESSAGE)
            }
            Err(_) => (SubmissionPhase::Failed, MessageKind::Error, ERROR_MESSAGE),
        };
        self.phase = phase;
        self.message_seq += 1;
        self.message = Some(FormMessage { kind, text, seq: self.message_seq });
        self.message_seq
    }

    /// Hide the message if it is still the one identified by `seq`.
    pub fn hide_message(&mut self, seq: u64) -> bool {
        if self.message.as_ref().is_some_and(|m| m.seq == seq) {
            self.message = None;
            return true;
        }
        false
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.phase == SubmissionPhase::Pending
    }

    #[must_use]
    pub fn button_label(&self) -> &'static str {
        if self.is_pending() { "Sending..." } else { "Send Message" }
    }
}

/// Delivery of a contact form: succeeds or fails with a [`SubmissionError`].
pub trait Transport {
    fn send(&self, fields: &ContactFields) -> impl Future<Output = Result<(), SubmissionError>>;
}

/// Stand-in for a network call: waits, then fails with a fixed probability.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimulatedTransport {
    pub delay_ms: u32,
    pub failure_rate: f64,
}

impl From<ContactConfig> for SimulatedTransport {
    fn from(config: ContactConfig) -> Self {
        Self { delay_ms: config.delay_ms, failure_rate: config.failure_rate }
    }
}

impl SimulatedTransport {
    /// Outcome for a uniform draw in `[0, 1)`.
    ///
    /// # Errors
    ///
    /// Returns [`SubmissionError::SimulatedNetwork`] when `draw <= failure_rate`.
    pub fn outcome(&self, draw: f64) -> Result<(), SubmissionError> {
        if draw > self.failure_rate { Ok(()) } else { Err(SubmissionError::SimulatedNetwork) }
    }
}

#[cfg(feature = "hydrate")]
impl Transport for SimulatedTransport {
    async fn send(&self, _fields: &ContactFields) -> Result<(), SubmissionError> {
        gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(self.delay_ms))).await;
        self.outcome(js_sys::Math::random())
    }
}
