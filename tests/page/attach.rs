use std::sync::Arc;

use claims::assert_err;
use claims::assert_matches;
use claims::assert_none;
use under_construction::configuration::PageSettings;
use under_construction::configuration::SelectorSettings;
use under_construction::document::StaticDocument;
use under_construction::domain::SubscriptionStatus;
use under_construction::subscription::SimulatedBackend;
use under_construction::subscription::SubmitOutcome;
use under_construction::AttachError;
use under_construction::Page;

use crate::helpers::landing_document;
use crate::helpers::spawn_page_with;

#[tokio::test(start_paused = true)]
async fn no_form_no_subscription() {
    let document = landing_document().without(".email-form");
    let mut app = spawn_page_with(&document, PageSettings::default());

    assert!(!app.page.state().is_form_attached());
    assert_none!(app.page.view().form);
    assert_eq!(app.page.input("foo@bar.com"), SubscriptionStatus::Empty);
    assert_eq!(app.page.submit(), SubmitOutcome::Detached);
    assert_eq!(app.page.state().notifications_shown(), 0);
}

#[tokio::test(start_paused = true)]
async fn form_without_button_is_an_error() {
    let document = landing_document().without(".notify-btn");
    let backend = Arc::new(SimulatedBackend::new(Default::default()));
    let e = assert_err!(Page::attach(&document, PageSettings::default(), backend));
    assert_matches!(
        &e,
        AttachError::MissingElement { form, missing }
            if form == ".email-form" && missing == ".notify-btn"
    );
    assert_eq!(e.to_string(), ".email-form is present, but .notify-btn is missing");
}

#[test]
fn outside_runtime_is_an_error() {
    let backend = Arc::new(SimulatedBackend::new(Default::default()));
    let e = assert_err!(Page::attach(&landing_document(), PageSettings::default(), backend));
    assert_matches!(e, AttachError::NoRuntime(_));
}

#[tokio::test(start_paused = true)]
async fn bare_document_attaches() {
    // nothing but a viewport: every effect is simply skipped
    let document = StaticDocument::new(1280.0);
    let app = spawn_page_with(&document, PageSettings::default());
    let view = app.page.view();

    assert_none!(view.form);
    assert_none!(view.progress);
    assert_none!(view.title);
    assert_none!(view.parallax_transform);
    assert!(view.revealed_cards.is_empty());
    // the custom cursor brings its own element
    assert!(view.cursor.is_some());
}

#[tokio::test(start_paused = true)]
async fn custom_selectors_and_button_label() {
    let selectors = SelectorSettings {
        email_form: "#signup".to_string(),
        email_input: "#signup-email".to_string(),
        notify_button: "#signup-go".to_string(),
        ..Default::default()
    };
    let document = StaticDocument::new(1280.0)
        .with_element("#signup", "")
        .with_element("#signup-email", "")
        .with_element("#signup-go", "  Keep me posted ");
    let settings = PageSettings {
        selectors,
        ..Default::default()
    };
    let mut app = spawn_page_with(&document, settings);

    assert_eq!(app.page.view().form.unwrap().button.label, "Keep me posted");
    app.page.input("foo@bar.com");
    assert_matches!(app.page.submit(), SubmitOutcome::Accepted(_));
}

#[tokio::test(start_paused = true)]
async fn blank_button_falls_back_to_configured_label() {
    let document = landing_document()
        .without(".notify-btn")
        .with_element(".notify-btn", "");
    let app = spawn_page_with(&document, PageSettings::default());
    assert_eq!(app.page.view().form.unwrap().button.label, "Notify Me");
}
