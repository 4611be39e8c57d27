use crate::domain::SubscriptionStatus;
use crate::effects::CustomCursor;
use crate::effects::EasterEgg;
use crate::effects::Parallax;
use crate::effects::ProgressBar;
use crate::effects::ScrollReveal;
use crate::effects::Typewriter;
use crate::notification::Notification;
use crate::notification::Notifier;
use crate::subscription::SubscriptionForm;

/// Everything on the page that can change. Owned by `Page`; read by
/// `render`.
///
/// Effects the document cannot host (no progress bar, narrow viewport...) are
/// `None`.
#[derive(Debug)]
pub struct PageState {
    pub(crate) form_attached: bool,
    pub(crate) form: SubscriptionForm,
    /// The button's text when idle
    pub(crate) button_label: String,
    pub(crate) notifier: Notifier,
    pub(crate) progress: Option<ProgressBar>,
    pub(crate) title: Option<Typewriter>,
    pub(crate) parallax: Option<Parallax>,
    pub(crate) reveal: ScrollReveal,
    pub(crate) cursor: Option<CustomCursor>,
    pub(crate) easter_egg: EasterEgg,
}

impl PageState {
    pub fn is_form_attached(&self) -> bool { self.form_attached }

    pub fn email_text(&self) -> &str { self.form.email_text() }

    pub fn status(&self) -> SubscriptionStatus { self.form.status() }

    pub fn active_notification(&self) -> Option<&Notification> { self.notifier.active() }

    /// Total number of notifications shown since the page was attached
    pub fn notifications_shown(&self) -> u64 { self.notifier.shown() }

    pub fn progress(&self) -> Option<&ProgressBar> { self.progress.as_ref() }

    pub fn title(&self) -> Option<&Typewriter> { self.title.as_ref() }

    pub fn parallax(&self) -> Option<&Parallax> { self.parallax.as_ref() }

    pub fn reveal(&self) -> &ScrollReveal { &self.reveal }

    pub fn cursor(&self) -> Option<&CustomCursor> { self.cursor.as_ref() }

    pub fn easter_egg_active(&self) -> bool { self.easter_egg.is_active() }
}
