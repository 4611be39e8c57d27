use crate::configuration::ParallaxSettings;

/// Floating decorations drift at a fraction of the scroll speed.
#[derive(Debug)]
pub struct Parallax {
    factor: f64,
    offset: f64,
}

impl Parallax {
    /// `None` on narrow (mobile) viewports, where the effect is skipped.
    pub fn for_viewport(
        settings: &ParallaxSettings,
        viewport_width: f64,
    ) -> Option<Self> {
        (viewport_width > settings.min_viewport_width).then_some(Self {
            factor: settings.factor,
            offset: 0.0,
        })
    }

    pub fn scroll(
        &mut self,
        scroll_y: f64,
    ) {
        self.offset = scroll_y * self.factor;
    }

    pub fn offset(&self) -> f64 { self.offset }

    /// CSS `transform` of the floating elements
    pub fn transform(&self) -> String { format!("translateY({}px)", self.offset) }
}
