use crate::effects::EasterEggActivation;
use crate::notification::NotificationId;
use crate::subscription::SubmissionAttempt;
use crate::subscription::SubmissionError;

/// Everything that reaches a `Page` from its timers. User input does not go
/// through here; it is applied synchronously by the `Page` methods.
#[derive(Debug, Clone, PartialEq)]
pub enum PageEvent {
    /// Fill the progress bar for the first time
    ProgressStarted,
    ProgressTick,
    /// Type the next character of the title
    TitleTick,
    /// The backend answered
    SubmissionFinished {
        attempt: SubmissionAttempt,
        result: Result<(), SubmissionError>,
    },
    /// The success display window is over
    ResetElapsed { attempt: SubmissionAttempt },
    NotificationExpired(NotificationId),
    EasterEggExpired(EasterEggActivation),
}
