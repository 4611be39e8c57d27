//! The page controller: binds to a document, owns all page state, and turns
//! user input and timer events into state transitions.
//!
//! Timers are tasks that sleep, then post a `PageEvent` back to the page over
//! a channel. The page applies events one at a time (`step`, `run_until`,
//! `run_for`), so no state is ever shared with a task.

mod events;
mod state;

use std::sync::Arc;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::runtime::Handle;
use tokio::runtime::TryCurrentError;
use tokio::sync::mpsc;
use tracing::Instrument;

pub use events::PageEvent;
pub use state::PageState;

use crate::configuration::PageSettings;
use crate::document::Document;
use crate::domain::SubscriptionStatus;
use crate::effects::CustomCursor;
use crate::effects::EasterEgg;
use crate::effects::Parallax;
use crate::effects::PointerTarget;
use crate::effects::ProgressBar;
use crate::effects::Rect;
use crate::effects::ScrollReveal;
use crate::effects::Typewriter;
use crate::notification::NotificationKind;
use crate::notification::Notifier;
use crate::render::render;
use crate::render::PageView;
use crate::subscription::BeginSubmit;
use crate::subscription::SimulatedBackend;
use crate::subscription::SubmissionAttempt;
use crate::subscription::SubmissionError;
use crate::subscription::SubmitOutcome;
use crate::subscription::SubscriptionBackend;
use crate::subscription::SubscriptionForm;

#[derive(Debug, thiserror::Error)]
pub enum AttachError {
    /// The form is there, but one of the elements it needs is not
    #[error("{form} is present, but {missing} is missing")]
    MissingElement { form: String, missing: String },

    #[error("a page must be attached from within a tokio runtime")]
    NoRuntime(#[source] TryCurrentError),
}

pub struct Page {
    state: PageState,
    settings: PageSettings,
    backend: Arc<dyn SubscriptionBackend>,
    runtime: Handle,
    events_tx: mpsc::UnboundedSender<PageEvent>,
    events_rx: mpsc::UnboundedReceiver<PageEvent>,
}

impl std::fmt::Debug for Page {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        f.debug_struct("Page")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl Page {
    /// Bind to `document` and start the load-time timers (progress bar,
    /// title). Must be called from within a tokio runtime.
    ///
    /// Behavior is attached for whatever the document provides: no email
    /// form means no subscription, no progress bar means no progress
    /// animation, and so on. The only hard failure is a form without its
    /// input or button.
    #[tracing::instrument(
        name = "Attaching page",
        skip_all,
        fields(viewport_width = document.viewport_width())
    )]
    pub fn attach<D: Document>(
        document: &D,
        settings: PageSettings,
        backend: Arc<dyn SubscriptionBackend>,
    ) -> Result<Self, AttachError> {
        let runtime = Handle::try_current().map_err(AttachError::NoRuntime)?;
        let selectors = &settings.selectors;
        let viewport_width = document.viewport_width();

        let form_attached = document.contains(&selectors.email_form);
        if form_attached {
            for required in [&selectors.email_input, &selectors.notify_button] {
                if !document.contains(required) {
                    return Err(AttachError::MissingElement {
                        form: selectors.email_form.clone(),
                        missing: required.clone(),
                    });
                }
            }
        } else {
            tracing::warn!(selector = %selectors.email_form, "no email form, subscription disabled");
        }

        let button_label = document
            .text_content(&selectors.notify_button)
            .map(|label| label.trim().to_string())
            .filter(|label| !label.is_empty())
            .unwrap_or_else(|| settings.messages.button_label.clone());

        let progress = document.contains(&selectors.progress_fill).then(|| {
            ProgressBar::new(
                settings.progress.clone(),
                document
                    .text_content(&selectors.progress_text)
                    .unwrap_or_default(),
                StdRng::from_entropy(),
            )
        });

        // the title is blanked straight away, then typed back in
        let title = document
            .text_content(&selectors.title)
            .map(|text| Typewriter::new(&text));

        let parallax = match document.contains(&selectors.floating_elements) {
            true => Parallax::for_viewport(&settings.parallax, viewport_width),
            false => None,
        };

        let state = PageState {
            form_attached,
            form: SubscriptionForm::default(),
            button_label,
            notifier: Notifier::default(),
            progress,
            title,
            parallax,
            reveal: ScrollReveal::new(&settings.reveal, document.count(&selectors.feature_card)),
            cursor: CustomCursor::for_viewport(&settings.cursor, viewport_width),
            easter_egg: EasterEgg::new(&settings.easter_egg.code),
        };

        let (events_tx, events_rx) = mpsc::unbounded_channel();
        let page = Self {
            state,
            settings,
            backend,
            runtime,
            events_tx,
            events_rx,
        };
        page.load();
        tracing::info!(
            form = page.state.form_attached,
            progress = page.state.progress.is_some(),
            title = page.state.title.is_some(),
            parallax = page.state.parallax.is_some(),
            cursor = page.state.cursor.is_some(),
            "page attached"
        );
        Ok(page)
    }

    /// `attach` with a `SimulatedBackend` using the configured latency
    pub fn with_simulated_backend<D: Document>(
        document: &D,
        settings: PageSettings,
    ) -> Result<Self, AttachError> {
        let backend = Arc::new(SimulatedBackend::new(settings.subscription.latency()));
        Self::attach(document, settings, backend)
    }

    fn load(&self) {
        if self.state.progress.is_some() {
            self.schedule(self.settings.progress.start_delay(), PageEvent::ProgressStarted);
            self.schedule(self.settings.progress.tick_interval(), PageEvent::ProgressTick);
        }
        if self.state.title.is_some() {
            self.schedule(self.settings.typewriter.start_delay(), PageEvent::TitleTick);
        }
    }

    pub fn state(&self) -> &PageState { &self.state }

    pub fn settings(&self) -> &PageSettings { &self.settings }

    /// Everything a host needs to paint the page right now
    pub fn view(&self) -> PageView { render(&self.state, &self.settings.messages) }

    /// The email input changed. Returns the resulting status.
    pub fn input(
        &mut self,
        text: impl Into<String>,
    ) -> SubscriptionStatus {
        if !self.state.form_attached {
            return self.state.status();
        }
        self.state.form.input(text.into())
    }

    /// The form was submitted (button click or enter key).
    #[tracing::instrument(
        name = "Submitting subscription",
        skip(self),
        fields(subscriber_email = tracing::field::Empty)
    )]
    pub fn submit(&mut self) -> SubmitOutcome {
        if !self.state.form_attached {
            return SubmitOutcome::Detached;
        }
        tracing::Span::current().record(
            "subscriber_email",
            tracing::field::display(self.state.form.email_text()),
        );

        match self.state.form.begin_submit() {
            BeginSubmit::Accepted { attempt, email } => {
                let backend = Arc::clone(&self.backend);
                let events = self.events_tx.clone();
                self.runtime.spawn(
                    async move {
                        let result = backend.subscribe(&email).await;
                        // the page may have been dropped in the meantime
                        let _ = events.send(PageEvent::SubmissionFinished { attempt, result });
                    }
                    .in_current_span(),
                );
                tracing::info!(?attempt, "submission accepted");
                SubmitOutcome::Accepted(attempt)
            }
            BeginSubmit::Rejected => {
                tracing::info!("rejecting invalid email");
                let message = self.settings.messages.invalid_email.clone();
                self.notify(NotificationKind::Error, message);
                SubmitOutcome::Rejected
            }
            BeginSubmit::Blocked => {
                tracing::debug!(status = ?self.state.status(), "submission already in progress");
                SubmitOutcome::Blocked
            }
        }
    }

    /// Vertical scroll position of the window changed
    pub fn scroll(
        &mut self,
        scroll_y: f64,
    ) {
        if let Some(parallax) = &mut self.state.parallax {
            parallax.scroll(scroll_y);
        }
    }

    /// Feature card `index` is at `card` while the viewport is `viewport`.
    /// Returns whether the card was revealed by this.
    pub fn intersect(
        &mut self,
        index: usize,
        card: Rect,
        viewport: Rect,
    ) -> bool {
        self.state.reveal.observe(index, &card, &viewport)
    }

    pub fn pointer_move(
        &mut self,
        x: f64,
        y: f64,
    ) {
        if let Some(cursor) = &mut self.state.cursor {
            cursor.move_to(x, y);
        }
    }

    pub fn pointer_enter(
        &mut self,
        target: PointerTarget,
    ) {
        if let Some(cursor) = &mut self.state.cursor {
            cursor.enter(target);
        }
    }

    pub fn pointer_leave(
        &mut self,
        target: PointerTarget,
    ) {
        if let Some(cursor) = &mut self.state.cursor {
            cursor.leave(target);
        }
    }

    /// A key was pressed anywhere on the page (`KeyboardEvent.key`). Returns
    /// whether this completed the easter egg code.
    pub fn key_down(
        &mut self,
        key: &str,
    ) -> bool {
        match self.state.easter_egg.key(key) {
            Some(activation) => {
                self.schedule(
                    self.settings.easter_egg.active_for(),
                    PageEvent::EasterEggExpired(activation),
                );
                true
            }
            None => false,
        }
    }

    /// Wait for the next timer event and apply it.
    ///
    /// The page keeps a sender of its own, so this only returns `None` if the
    /// channel is somehow closed; a page with nothing scheduled waits forever.
    pub async fn step(&mut self) -> Option<PageEvent> {
        let event = self.events_rx.recv().await?;
        self.apply(&event);
        Some(event)
    }

    /// Apply events until `done` holds. Returns `false` if events ran out
    /// first.
    pub async fn run_until<F>(
        &mut self,
        mut done: F,
    ) -> bool
    where
        F: FnMut(&PageState) -> bool,
    {
        while !done(&self.state) {
            if self.step().await.is_none() {
                return false;
            }
        }
        true
    }

    /// Apply every event that arrives within `duration`.
    pub async fn run_for(
        &mut self,
        duration: Duration,
    ) {
        let deadline = tokio::time::Instant::now() + duration;
        while let Ok(Some(event)) = tokio::time::timeout_at(deadline, self.events_rx.recv()).await {
            self.apply(&event);
        }
    }

    fn apply(
        &mut self,
        event: &PageEvent,
    ) {
        tracing::trace!(?event, "applying page event");
        match event {
            PageEvent::ProgressStarted => {
                if let Some(progress) = &mut self.state.progress {
                    progress.start();
                }
            }
            PageEvent::ProgressTick => {
                if let Some(progress) = &mut self.state.progress {
                    progress.tick();
                    self.schedule(self.settings.progress.tick_interval(), PageEvent::ProgressTick);
                }
            }
            PageEvent::TitleTick => {
                if let Some(title) = &mut self.state.title {
                    if title.advance() && !title.is_done() {
                        self.schedule(self.settings.typewriter.interval(), PageEvent::TitleTick);
                    }
                }
            }
            PageEvent::SubmissionFinished { attempt, result } => {
                self.finish_submission(*attempt, result.clone());
            }
            PageEvent::ResetElapsed { attempt } => {
                if self.state.form.reset(*attempt) {
                    tracing::info!(?attempt, "form reset");
                }
            }
            PageEvent::NotificationExpired(id) => {
                if self.state.notifier.expire(*id) {
                    tracing::debug!(?id, "notification dismissed");
                }
            }
            PageEvent::EasterEggExpired(activation) => {
                self.state.easter_egg.expire(*activation);
            }
        }
    }

    fn finish_submission(
        &mut self,
        attempt: SubmissionAttempt,
        result: Result<(), SubmissionError>,
    ) {
        match self.state.form.finish(attempt, result) {
            None => tracing::warn!(?attempt, "ignoring result of a stale submission"),
            Some(Ok(())) => {
                tracing::info!(?attempt, "subscribed");
                let message = self.settings.messages.subscribed.clone();
                self.notify(NotificationKind::Success, message);
                self.schedule(
                    self.settings.subscription.reset_after(),
                    PageEvent::ResetElapsed { attempt },
                );
            }
            Some(Err(e)) => {
                tracing::error!(
                    error.cause_chain = ?e,
                    error.message = %e,
                    ?attempt,
                    "subscription failed"
                );
                self.notify(NotificationKind::Error, e.to_string());
            }
        }
    }

    /// Show a notification and schedule its dismissal.
    fn notify(
        &mut self,
        kind: NotificationKind,
        message: String,
    ) {
        let id = self.state.notifier.show(kind, message);
        self.schedule(self.settings.notification.ttl(), PageEvent::NotificationExpired(id));
    }

    /// Post `event` back to this page after `after`. Timers cannot be
    /// cancelled; events that have become irrelevant are ignored on arrival.
    fn schedule(
        &self,
        after: Duration,
        event: PageEvent,
    ) {
        let events = self.events_tx.clone();
        self.runtime.spawn(async move {
            tokio::time::sleep(after).await;
            let _ = events.send(event);
        });
    }
}
