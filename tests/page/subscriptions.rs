use claims::assert_matches;
use claims::assert_none;
use claims::assert_some;
use under_construction::configuration::PageSettings;
use under_construction::domain::SubscriptionStatus;
use under_construction::notification::NotificationKind;
use under_construction::render::Tone;
use under_construction::subscription::SubmissionError;
use under_construction::subscription::SubmitOutcome;
use under_construction::Page;

use crate::helpers::landing_document;
use crate::helpers::ms;
use crate::helpers::spawn_page;

/// foo@bar.com -> submit -> disabled -> success after the delay -> reset
/// after the display window, using the built-in simulated backend
#[tokio::test(start_paused = true)]
async fn subscribe_ok() {
    let mut page = Page::with_simulated_backend(&landing_document(), PageSettings::default()).unwrap();

    assert_eq!(page.input("foo@bar.com"), SubscriptionStatus::Valid);
    let form = page.view().form.unwrap();
    assert_eq!(form.input.tone, Tone::Success);
    assert!(form.button.enabled);

    assert_matches!(page.submit(), SubmitOutcome::Accepted(_));

    // disabled immediately
    assert_eq!(page.state().status(), SubscriptionStatus::Submitting);
    let form = page.view().form.unwrap();
    assert!(!form.button.enabled);
    assert_eq!(form.button.label, "Subscribing...");
    assert_none!(page.state().active_notification());

    // still waiting just before the simulated latency is up
    page.run_for(ms(1400)).await;
    assert_eq!(page.state().status(), SubscriptionStatus::Submitting);
    assert_none!(page.state().active_notification());

    page.run_for(ms(200)).await; // t = 1.6 s
    assert_eq!(page.state().status(), SubscriptionStatus::Submitted);
    let notification = assert_some!(page.state().active_notification());
    assert_eq!(notification.kind, NotificationKind::Success);
    assert_eq!(
        notification.message,
        "Thanks! You'll be notified when the portfolio is ready."
    );
    let form = page.view().form.unwrap();
    assert_eq!(form.button.label, "✓ Subscribed!");
    assert_eq!(form.button.tone, Tone::Success);
    assert!(!form.button.enabled);
    assert_eq!(form.input.value, "foo@bar.com");

    page.run_for(ms(2800)).await; // t = 4.4 s
    assert_eq!(page.state().status(), SubscriptionStatus::Submitted);

    page.run_for(ms(200)).await; // t = 4.6 s
    assert_eq!(page.state().status(), SubscriptionStatus::Empty);
    let form = page.view().form.unwrap();
    assert_eq!(form.input.value, "");
    assert_eq!(form.input.tone, Tone::Normal);
    assert_eq!(form.button.label, "Notify Me");
    assert_eq!(form.button.tone, Tone::Normal);
    assert!(form.button.enabled);
}

/// "foo" -> submit -> immediate error, no transition
#[tokio::test(start_paused = true)]
async fn subscribe_invalid() {
    let mut app = spawn_page();

    assert_eq!(app.page.input("foo"), SubscriptionStatus::Invalid);
    let form = app.page.view().form.unwrap();
    assert_eq!(form.input.tone, Tone::Error);
    assert!(!form.button.enabled);

    // the enter key still submits a disabled form
    assert_eq!(app.page.submit(), SubmitOutcome::Rejected);
    assert_eq!(app.page.state().status(), SubscriptionStatus::Invalid);
    assert_eq!(app.page.state().notifications_shown(), 1);
    let notification = assert_some!(app.page.state().active_notification());
    assert_eq!(notification.kind, NotificationKind::Error);
    assert_eq!(notification.message, "Please enter a valid email address");

    app.page.run_for(ms(3000)).await;
    assert_eq!(app.page.state().status(), SubscriptionStatus::Invalid);
    assert!(app.backend.received().is_empty());
}

#[tokio::test(start_paused = true)]
async fn subscribe_empty() {
    let mut app = spawn_page();

    assert_eq!(app.page.submit(), SubmitOutcome::Rejected);
    assert_eq!(app.page.state().status(), SubscriptionStatus::Empty);
    assert_eq!(app.page.state().notifications_shown(), 1);
    assert_eq!(
        assert_some!(app.page.state().active_notification()).kind,
        NotificationKind::Error
    );
    assert!(app.backend.received().is_empty());
}

#[tokio::test(start_paused = true)]
async fn rejections_never_change_status() {
    let mut app = spawn_page();

    for (input, status) in [
        ("", SubscriptionStatus::Empty),
        ("not-an-email", SubscriptionStatus::Invalid),
        ("a@b", SubscriptionStatus::Invalid),
        ("foo @bar.com", SubscriptionStatus::Invalid),
    ] {
        let shown = app.page.state().notifications_shown();
        app.page.input(input);
        assert_eq!(app.page.submit(), SubmitOutcome::Rejected, "{input:?}");
        assert_eq!(app.page.state().status(), status, "{input:?}");
        // exactly one notification per rejection
        assert_eq!(app.page.state().notifications_shown(), shown + 1, "{input:?}");
    }
}

#[tokio::test(start_paused = true)]
async fn double_submit_is_blocked() {
    let mut app = spawn_page();
    app.page.input("foo@bar.com");

    assert_matches!(app.page.submit(), SubmitOutcome::Accepted(_));
    assert_eq!(app.page.submit(), SubmitOutcome::Blocked);

    // typing while submitting does not unlock the button
    assert_eq!(app.page.input("bar@baz.com"), SubscriptionStatus::Submitting);
    assert!(!app.page.view().form.unwrap().button.enabled);
    assert_eq!(app.page.submit(), SubmitOutcome::Blocked);
    // blocked clicks are silent
    assert_eq!(app.page.state().notifications_shown(), 0);

    app.page.run_until(|s| s.status() == SubscriptionStatus::Submitted).await;
    // nor does the success window accept another submission
    assert_eq!(app.page.submit(), SubmitOutcome::Blocked);

    assert_eq!(app.backend.received(), vec!["foo@bar.com".to_string()]);
    assert_eq!(app.backend.max_in_flight(), 1);
}

#[tokio::test(start_paused = true)]
async fn resubmit_after_reset() {
    let mut app = spawn_page();

    for email in ["foo@bar.com", "bar@baz.org"] {
        app.page.input(email);
        assert_matches!(app.page.submit(), SubmitOutcome::Accepted(_));
        app.page.run_until(|s| s.status() == SubscriptionStatus::Submitted).await;
        app.page.run_until(|s| s.status() == SubscriptionStatus::Empty).await;
        assert_eq!(app.page.state().email_text(), "");
    }

    assert_eq!(
        app.backend.received(),
        vec!["foo@bar.com".to_string(), "bar@baz.org".to_string()]
    );
}

#[tokio::test(start_paused = true)]
async fn backend_failure_is_reported() {
    let mut app = spawn_page();
    app.backend
        .fail_with(SubmissionError::Unavailable("connection reset".to_string()));

    app.page.input("foo@bar.com");
    assert_matches!(app.page.submit(), SubmitOutcome::Accepted(_));
    app.page.run_for(ms(1600)).await;

    // back to where we were, with an explanation
    assert_eq!(app.page.state().status(), SubscriptionStatus::Valid);
    assert_eq!(app.page.state().email_text(), "foo@bar.com");
    let notification = assert_some!(app.page.state().active_notification());
    assert_eq!(notification.kind, NotificationKind::Error);
    assert_eq!(
        notification.message,
        "Subscription service is unavailable: connection reset"
    );
    let form = app.page.view().form.unwrap();
    assert!(form.button.enabled);
    assert_eq!(form.button.label, "Notify Me");

    // no reset is pending: the input survives the display window
    app.page.run_for(ms(4000)).await;
    assert_eq!(app.page.state().email_text(), "foo@bar.com");

    // and the user can simply try again
    app.backend.succeed();
    assert_matches!(app.page.submit(), SubmitOutcome::Accepted(_));
    app.page.run_for(ms(1600)).await;
    assert_eq!(app.page.state().status(), SubscriptionStatus::Submitted);
    assert_eq!(app.backend.received().len(), 2);
}

#[tokio::test(start_paused = true)]
async fn pages_are_independent() {
    let mut first = spawn_page();
    let mut second = spawn_page();

    first.page.input("foo@bar.com");
    second.page.input("nope");
    assert_matches!(first.page.submit(), SubmitOutcome::Accepted(_));
    assert_eq!(second.page.submit(), SubmitOutcome::Rejected);

    first.page.run_for(ms(1600)).await;
    assert_eq!(first.page.state().status(), SubscriptionStatus::Submitted);
    assert_eq!(second.page.state().status(), SubscriptionStatus::Invalid);
    assert_eq!(
        assert_some!(second.page.state().active_notification()).kind,
        NotificationKind::Error
    );
    assert!(second.backend.received().is_empty());
}
