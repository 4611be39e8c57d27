//! The email form's state machine, and the backend it hands emails to.
//!
//! Nothing here touches timers: `Page` decides when `finish` and `reset` are
//! called, which keeps the state machine testable without a runtime.

use std::time::Duration;

use async_trait::async_trait;

use crate::domain::classify;
use crate::domain::SubscriberEmail;
use crate::domain::SubscriptionStatus;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmissionError {
    /// The backend understood the request and said no
    #[error("Subscription was refused: {0}")]
    Refused(String),

    #[error("Subscription service is unavailable: {0}")]
    Unavailable(String),
}

/// Whatever actually records a subscriber. There is no real one yet; see
/// `SimulatedBackend`.
///
/// The form guarantees at most one call in flight per page.
#[async_trait]
pub trait SubscriptionBackend: Send + Sync {
    async fn subscribe(
        &self,
        email: &SubscriberEmail,
    ) -> Result<(), SubmissionError>;
}

/// Pretends to subscribe: waits for `latency`, then succeeds.
#[derive(Debug, Clone)]
pub struct SimulatedBackend {
    latency: Duration,
}

impl SimulatedBackend {
    pub fn new(latency: Duration) -> Self { Self { latency } }
}

#[async_trait]
impl SubscriptionBackend for SimulatedBackend {
    #[tracing::instrument(
        name = "Simulating subscription",
        skip_all,
        fields(subscriber_email = %email)
    )]
    async fn subscribe(
        &self,
        email: &SubscriberEmail,
    ) -> Result<(), SubmissionError> {
        tokio::time::sleep(self.latency).await;
        Ok(())
    }
}

/// Identifies one accepted submission, so that late timer events from an
/// earlier one can be told apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubmissionAttempt(u64);

/// What `Page::submit` did with the click
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Handed to the backend
    Accepted(SubmissionAttempt),
    /// Not a valid email; an error notification was shown
    Rejected,
    /// A submission is still playing out; nothing happened
    Blocked,
    /// The document has no email form
    Detached,
}

#[derive(Debug)]
pub enum BeginSubmit {
    Accepted {
        attempt: SubmissionAttempt,
        email: SubscriberEmail,
    },
    Rejected,
    Blocked,
}

#[derive(Debug)]
pub struct SubscriptionForm {
    email_text: String,
    status: SubscriptionStatus,
    attempts: u64,
}

impl Default for SubscriptionForm {
    fn default() -> Self {
        Self {
            email_text: String::new(),
            status: SubscriptionStatus::Empty,
            attempts: 0,
        }
    }
}

impl SubscriptionForm {
    pub fn email_text(&self) -> &str { &self.email_text }

    pub fn status(&self) -> SubscriptionStatus { self.status }

    /// A keystroke. The text is always updated, but while a submission owns
    /// the form the status stays put.
    pub fn input(
        &mut self,
        text: String,
    ) -> SubscriptionStatus {
        self.email_text = text;
        if !self.status.is_locked() {
            self.status = classify(&self.email_text).into();
        }
        self.status
    }

    pub fn begin_submit(&mut self) -> BeginSubmit {
        if self.status.is_locked() {
            return BeginSubmit::Blocked;
        }

        // classify afresh rather than trusting `status`, the text is the
        // source of truth
        let email = match SubscriberEmail::parse(self.email_text.clone()) {
            Ok(email) => email,
            Err(_) => return BeginSubmit::Rejected,
        };

        self.attempts += 1;
        self.status = SubscriptionStatus::Submitting;
        BeginSubmit::Accepted {
            attempt: SubmissionAttempt(self.attempts),
            email,
        }
    }

    /// The backend answered. Returns `None` if `attempt` is not the
    /// submission in flight.
    pub fn finish(
        &mut self,
        attempt: SubmissionAttempt,
        result: Result<(), SubmissionError>,
    ) -> Option<Result<(), SubmissionError>> {
        if self.status != SubscriptionStatus::Submitting || !self.is_current(attempt) {
            return None;
        }
        self.status = match result {
            Ok(()) => SubscriptionStatus::Submitted,
            // the user may have kept typing while we waited
            Err(_) => classify(&self.email_text).into(),
        };
        Some(result)
    }

    /// The success display window is over: clear the input. Returns whether
    /// the form was reset.
    pub fn reset(
        &mut self,
        attempt: SubmissionAttempt,
    ) -> bool {
        if self.status != SubscriptionStatus::Submitted || !self.is_current(attempt) {
            return false;
        }
        self.email_text.clear();
        self.status = SubscriptionStatus::Empty;
        true
    }

    fn is_current(
        &self,
        attempt: SubmissionAttempt,
    ) -> bool {
        attempt.0 == self.attempts
    }
}
