mod email_classification;
mod subscriber_email;
mod subscription_status;
// allow external `use` statements to skip `email_classification` etc
pub use email_classification::classify;
pub use email_classification::EmailClassification;
pub use subscriber_email::SubscriberEmail;
pub use subscription_status::SubscriptionStatus;
