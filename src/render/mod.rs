//! Pure functions from page state to what should be on screen. Nothing here
//! mutates anything; a host diffs the `PageView` against the real document.

use once_cell::sync::Lazy;
use serde::Serialize;
use tera::Context;
use tera::Tera;

use crate::configuration::MessageSettings;
use crate::domain::SubscriptionStatus;
use crate::notification::Notification;
use crate::page::PageState;

const NOTIFICATION_TEMPLATE: &str = "notification.html";

/// Templates are compiled once. The `.html` suffix turns on autoescaping, so
/// messages can never inject markup.
static TEMPLATES: Lazy<Tera> = Lazy::new(|| {
    let mut tera = Tera::default();
    if let Err(e) = tera.add_raw_template(NOTIFICATION_TEMPLATE, include_str!("./notification.html")) {
        // rendering will then fail with "template not found", see `RenderError`
        tracing::error!(error.cause_chain = ?e, "could not compile notification template");
    }
    tera
});

#[derive(Debug, thiserror::Error)]
#[error("could not render {template}")]
pub struct RenderError {
    template: &'static str,
    #[source]
    source: tera::Error,
}

/// Visual state of an input or a button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Normal,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InputView {
    pub value: String,
    pub tone: Tone,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ButtonView {
    pub label: String,
    pub enabled: bool,
    pub tone: Tone,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormView {
    pub input: InputView,
    pub button: ButtonView,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgressView {
    /// CSS width of the fill, e.g. `"50%"`
    pub width: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CursorView {
    /// `None` until the pointer has moved
    pub position: Option<(f64, f64)>,
    pub hover: bool,
}

/// A snapshot of everything visible. Parts the document cannot host are
/// `None`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageView {
    pub form: Option<FormView>,
    pub notification: Option<Notification>,
    pub progress: Option<ProgressView>,
    pub title: Option<String>,
    /// CSS transform of the floating elements
    pub parallax_transform: Option<String>,
    pub cursor: Option<CursorView>,
    /// Indices of the feature cards carrying `animate-in`
    pub revealed_cards: Vec<usize>,
    pub easter_egg_active: bool,
}

impl PageView {
    /// For a host bridge that only speaks JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> { serde_json::to_string(self) }
}

pub fn render(
    state: &PageState,
    messages: &MessageSettings,
) -> PageView {
    PageView {
        form: state
            .is_form_attached()
            .then(|| render_form(state, messages)),
        notification: state.active_notification().cloned(),
        progress: state.progress().map(|p| ProgressView {
            width: p.width(),
            label: p.label().to_string(),
        }),
        title: state.title().map(|t| t.text()),
        parallax_transform: state.parallax().map(|p| p.transform()),
        cursor: state.cursor().map(|c| CursorView {
            position: c.position(),
            hover: c.is_hovering(),
        }),
        revealed_cards: state.reveal().revealed(),
        easter_egg_active: state.easter_egg_active(),
    }
}

fn render_form(
    state: &PageState,
    messages: &MessageSettings,
) -> FormView {
    let status = state.status();

    let input_tone = match status {
        SubscriptionStatus::Empty => Tone::Normal,
        SubscriptionStatus::Invalid => Tone::Error,
        SubscriptionStatus::Valid | SubscriptionStatus::Submitting | SubscriptionStatus::Submitted => {
            Tone::Success
        }
    };

    let (label, tone) = match status {
        SubscriptionStatus::Submitting => (messages.submitting_label.clone(), Tone::Normal),
        SubscriptionStatus::Submitted => (messages.subscribed_label.clone(), Tone::Success),
        _ => (state.button_label.clone(), Tone::Normal),
    };

    FormView {
        input: InputView {
            value: state.email_text().to_string(),
            tone: input_tone,
        },
        button: ButtonView {
            label,
            enabled: status.can_submit(),
            tone,
        },
    }
}

/// The notification's markup, to be appended to `<body>`
pub fn render_notification(notification: &Notification) -> Result<String, RenderError> {
    let mut context = Context::new();
    context.insert("kind", notification.kind.as_str());
    context.insert("icon", notification.kind.icon());
    context.insert("message", &notification.message);
    TEMPLATES
        .render(NOTIFICATION_TEMPLATE, &context)
        .map_err(|source| RenderError {
            template: NOTIFICATION_TEMPLATE,
            source,
        })
}
