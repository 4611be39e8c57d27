use super::classify;
use super::EmailClassification;

/// An email address that has passed the form's validation. This is the only
/// thing a `SubscriptionBackend` is ever handed, so backends never see raw
/// input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubscriberEmail(String);

impl SubscriberEmail {
    pub fn parse(email: String) -> Result<Self, String> {
        match classify(&email) {
            EmailClassification::Valid => Ok(Self(email)),
            EmailClassification::Empty | EmailClassification::Invalid => {
                Err(format!("Invalid email: {email:?}"))
            }
        }
    }
}

impl AsRef<str> for SubscriberEmail {
    fn as_ref(&self) -> &str { &self.0 }
}

impl std::fmt::Display for SubscriberEmail {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
