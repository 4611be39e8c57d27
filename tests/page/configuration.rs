use std::path::Path;

use claims::assert_ok;
use under_construction::configuration::get_configuration;
use under_construction::configuration::get_configuration_from;
use under_construction::configuration::Environment;

/// The shipped yaml files must agree with the built-in defaults, so that a
/// page without configuration behaves the same.
#[test]
fn shipped_configuration_loads() {
    let settings = assert_ok!(get_configuration());
    let page = &settings.page;

    assert_eq!(page.subscription.latency_ms, 1500);
    assert_eq!(page.subscription.reset_after_ms, 3000);
    assert_eq!(page.notification.ttl_ms, 5000);
    assert_eq!(page.messages.invalid_email, "Please enter a valid email address");
    assert_eq!(
        page.messages.subscribed,
        "Thanks! You'll be notified when the portfolio is ready."
    );
    assert_eq!(page.messages.subscribed_label, "✓ Subscribed!");
    assert_eq!(page.progress.cap_percent, 69.0);
    assert_eq!(page.parallax.factor, 0.5);
    assert_eq!(page.reveal.threshold, 0.1);
    assert_eq!(page.easter_egg.code, "portfolio");
    assert_eq!(page.selectors.email_form, ".email-form");
    assert_eq!(settings.telemetry.name, "under-construction");
}

#[test]
fn environment_overrides_base() {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("configuration");

    let local = assert_ok!(get_configuration_from(&dir, Environment::Local));
    assert_eq!(local.telemetry.level, "debug");

    let production = assert_ok!(get_configuration_from(&dir, Environment::Production));
    assert_eq!(production.telemetry.level, "warn");
    // untouched by production.yaml
    assert_eq!(production.page.subscription.latency_ms, 1500);
}
