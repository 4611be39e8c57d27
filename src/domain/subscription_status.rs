use serde::Serialize;

use super::EmailClassification;

/// Where the subscription form currently is.
///
/// ```text
/// Empty/Invalid/Valid --submit (Valid)--> Submitting --ok--> Submitted --reset--> Empty
///                                             |
///                                             +--err--> (classification of the input)
/// ```
///
/// The first three variants simply mirror the classification of the input;
/// the last two are only reachable through a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionStatus {
    Empty,
    Invalid,
    Valid,
    /// Waiting on the backend; further submissions are blocked
    Submitting,
    /// Success is on display until the reset window elapses
    Submitted,
}

impl SubscriptionStatus {
    /// `Submitting` and `Submitted` own the form until the submission has
    /// played out; neither typing nor submitting moves them.
    pub fn is_locked(self) -> bool { matches!(self, Self::Submitting | Self::Submitted) }

    /// Whether the submit control should be clickable
    pub fn can_submit(self) -> bool { matches!(self, Self::Empty | Self::Valid) }
}

impl From<EmailClassification> for SubscriptionStatus {
    fn from(value: EmailClassification) -> Self {
        match value {
            EmailClassification::Empty => Self::Empty,
            EmailClassification::Invalid => Self::Invalid,
            EmailClassification::Valid => Self::Valid,
        }
    }
}
