use std::env;
use std::env::current_dir;
use std::fmt::Display;
use std::path::Path;
use std::time::Duration;

use config::Config;
use config::ConfigError;
use serde::Deserialize;
use serde_aux::field_attributes::deserialize_number_from_string;

/// Global configuration, loaded from `configuration/*.yaml`. See
/// `get_configuration`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub page: PageSettings,
    pub telemetry: TelemetrySettings,
}

/// Logging configuration, passed to `telemetry::get_subscriber`
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TelemetrySettings {
    /// Bunyan `name` field
    pub name: String,
    /// Fallback filter when `RUST_LOG` is unset
    pub level: String,
}

impl Default for TelemetrySettings {
    fn default() -> Self {
        Self {
            name: "under-construction".to_string(),
            level: "info".to_string(),
        }
    }
}

/// Everything `Page::attach` needs. Every field has a default, so a partial
/// (or missing) yaml file is fine.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PageSettings {
    pub selectors: SelectorSettings,
    pub subscription: SubscriptionSettings,
    pub notification: NotificationSettings,
    pub messages: MessageSettings,
    pub progress: ProgressSettings,
    pub typewriter: TypewriterSettings,
    pub parallax: ParallaxSettings,
    pub reveal: RevealSettings,
    pub cursor: CursorSettings,
    pub easter_egg: EasterEggSettings,
}

/// Class selectors the page binds to. The document must provide elements
/// matching these for the corresponding behavior to attach.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SelectorSettings {
    pub email_form: String,
    pub email_input: String,
    pub notify_button: String,
    pub progress_fill: String,
    pub progress_text: String,
    pub feature_card: String,
    pub floating_elements: String,
    pub title: String,
}

impl Default for SelectorSettings {
    fn default() -> Self {
        Self {
            email_form: ".email-form".to_string(),
            email_input: ".email-input".to_string(),
            notify_button: ".notify-btn".to_string(),
            progress_fill: ".progress-fill".to_string(),
            progress_text: ".progress-text".to_string(),
            feature_card: ".feature-card".to_string(),
            floating_elements: ".floating-elements".to_string(),
            title: ".gradient-text".to_string(),
        }
    }
}

/// Timings of the (simulated) submission
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SubscriptionSettings {
    /// How long `SimulatedBackend` takes to "subscribe"
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub latency_ms: u64,

    /// How long the success state stays up before the form resets
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub reset_after_ms: u64,
}

impl SubscriptionSettings {
    pub fn latency(&self) -> Duration { Duration::from_millis(self.latency_ms) }

    pub fn reset_after(&self) -> Duration { Duration::from_millis(self.reset_after_ms) }
}

impl Default for SubscriptionSettings {
    fn default() -> Self {
        Self {
            latency_ms: 1500,
            reset_after_ms: 3000,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NotificationSettings {
    /// Lifetime of a notification, regardless of kind
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub ttl_ms: u64,
}

impl NotificationSettings {
    pub fn ttl(&self) -> Duration { Duration::from_millis(self.ttl_ms) }
}

impl Default for NotificationSettings {
    fn default() -> Self { Self { ttl_ms: 5000 } }
}

/// User-facing copy
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MessageSettings {
    pub invalid_email: String,
    pub subscribed: String,
    /// Used when the document's button has no text of its own
    pub button_label: String,
    pub submitting_label: String,
    pub subscribed_label: String,
}

impl Default for MessageSettings {
    fn default() -> Self {
        Self {
            invalid_email: "Please enter a valid email address".to_string(),
            subscribed: "Thanks! You'll be notified when the portfolio is ready.".to_string(),
            button_label: "Notify Me".to_string(),
            submitting_label: "Subscribing...".to_string(),
            subscribed_label: "✓ Subscribed!".to_string(),
        }
    }
}

/// The progress bar is purely cosmetic: it fills to `initial_percent`, then
/// wanders in `[jitter_base, min(jitter_base + jitter_spread, cap_percent)]`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ProgressSettings {
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub start_delay_ms: u64,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub initial_percent: f64,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub tick_interval_ms: u64,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub jitter_base: f64,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub jitter_spread: f64,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub cap_percent: f64,
}

impl ProgressSettings {
    pub fn start_delay(&self) -> Duration { Duration::from_millis(self.start_delay_ms) }

    pub fn tick_interval(&self) -> Duration { Duration::from_millis(self.tick_interval_ms) }
}

impl Default for ProgressSettings {
    fn default() -> Self {
        Self {
            start_delay_ms: 500,
            initial_percent: 50.0,
            tick_interval_ms: 10_000,
            jitter_base: 50.0,
            jitter_spread: 10.0,
            cap_percent: 69.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TypewriterSettings {
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub start_delay_ms: u64,
    /// Delay between two revealed characters
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub interval_ms: u64,
}

impl TypewriterSettings {
    pub fn start_delay(&self) -> Duration { Duration::from_millis(self.start_delay_ms) }

    pub fn interval(&self) -> Duration { Duration::from_millis(self.interval_ms) }
}

impl Default for TypewriterSettings {
    fn default() -> Self {
        Self {
            start_delay_ms: 1000,
            interval_ms: 100,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ParallaxSettings {
    /// Offset per scrolled pixel
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub factor: f64,
    /// Viewports at or below this width get no parallax
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub min_viewport_width: f64,
}

impl Default for ParallaxSettings {
    fn default() -> Self {
        Self {
            factor: 0.5,
            min_viewport_width: 768.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RevealSettings {
    /// Fraction of a card that must be visible before it is revealed
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub threshold: f64,
    /// The viewport is shrunk by this much at the bottom
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub bottom_margin_px: f64,
}

impl Default for RevealSettings {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            bottom_margin_px: 50.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CursorSettings {
    /// Viewports at or below this width keep the native cursor
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub min_viewport_width: f64,
}

impl Default for CursorSettings {
    fn default() -> Self { Self { min_viewport_width: 768.0 } }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EasterEggSettings {
    /// Key sequence, compared case-insensitively
    pub code: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub active_ms: u64,
}

impl EasterEggSettings {
    pub fn active_for(&self) -> Duration { Duration::from_millis(self.active_ms) }
}

impl Default for EasterEggSettings {
    fn default() -> Self {
        Self {
            code: "portfolio".to_string(),
            active_ms: 3000,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Local,
    Production,
}

impl Display for Environment {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Environment::Local => "local",
                Environment::Production => "production",
            }
        )?;
        Ok(())
    }
}

impl TryFrom<String> for Environment {
    type Error = String;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "production" => Ok(Self::Production),
            e => Err(format!("Invalid environment: {e}")),
        }
    }
}

/// Load yaml configuration files at `<project_root>/configuration`, for the
/// environment named by `APP_ENVIRONMENT` (default: `local`).
pub fn get_configuration() -> Result<Settings, ConfigError> {
    let cfg_dir = current_dir()
        .map_err(|e| ConfigError::Foreign(Box::new(e)))?
        .join("configuration");

    let env: Environment = env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".to_string())
        .try_into()
        .map_err(ConfigError::Message)?;

    get_configuration_from(&cfg_dir, env)
}

/// Layering, lowest priority first: `base.yaml`, `{env}.yaml`, then `APP_`
/// env vars, e.g. `APP_PAGE__SUBSCRIPTION__LATENCY_MS=200` ->
/// `Settings.page.subscription.latency_ms`. Env vars are always strings,
/// hence `serde-aux` on the numeric fields.
pub fn get_configuration_from(
    cfg_dir: &Path,
    env: Environment,
) -> Result<Settings, ConfigError> {
    tracing::info!(%env, dir = %cfg_dir.display(), "loading configuration");

    let settings = Config::builder()
        .add_source(config::File::from(cfg_dir.join("base.yaml")))
        .add_source(config::File::from(cfg_dir.join(format!("{env}.yaml"))).required(false))
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    settings.try_deserialize::<Settings>()
}
