use rand::rngs::StdRng;
use rand::Rng;

use crate::configuration::ProgressSettings;

/// A progress bar that never finishes: it fills to `initial_percent` shortly
/// after load, then wanders a little on every tick to look busy.
#[derive(Debug)]
pub struct ProgressBar {
    percent: f64,
    label: String,
    settings: ProgressSettings,
    rng: StdRng,
}

impl ProgressBar {
    /// `label` is whatever the document's progress text says initially; it is
    /// left alone until the first tick.
    pub fn new(
        settings: ProgressSettings,
        label: String,
        rng: StdRng,
    ) -> Self {
        Self {
            percent: 0.0,
            label,
            settings,
            rng,
        }
    }

    /// The initial fill, `start_delay` after load
    pub fn start(&mut self) { self.percent = self.settings.initial_percent; }

    /// Jump to a random value in `[base, base + spread)`, capped.
    pub fn tick(&mut self) -> f64 {
        let r: f64 = self.rng.gen();
        let percent =
            (self.settings.jitter_base + r * self.settings.jitter_spread).min(self.settings.cap_percent);
        self.percent = percent;
        self.label = format!("{}% Complete", percent.round() as i64);
        tracing::trace!(percent, "progress tick");
        percent
    }

    pub fn percent(&self) -> f64 { self.percent }

    /// CSS `width` of the fill
    pub fn width(&self) -> String { format!("{}%", self.percent) }

    pub fn label(&self) -> &str { &self.label }
}
