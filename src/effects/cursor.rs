use serde::Serialize;

use crate::configuration::CursorSettings;

/// What the pointer just entered or left
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PointerTarget {
    Link,
    Button,
    FeatureCard,
    Other,
}

impl PointerTarget {
    /// Links, buttons and feature cards enlarge the cursor
    pub fn is_interactive(self) -> bool { !matches!(self, Self::Other) }
}

/// A dot that follows the pointer, growing over interactive elements.
#[derive(Debug, Default)]
pub struct CustomCursor {
    position: Option<(f64, f64)>,
    hover: bool,
}

impl CustomCursor {
    /// `None` on narrow (touch) viewports, which keep the native cursor.
    pub fn for_viewport(
        settings: &CursorSettings,
        viewport_width: f64,
    ) -> Option<Self> {
        (viewport_width > settings.min_viewport_width).then(Self::default)
    }

    /// Client coordinates of the pointer
    pub fn move_to(
        &mut self,
        x: f64,
        y: f64,
    ) {
        self.position = Some((x, y));
    }

    pub fn enter(
        &mut self,
        target: PointerTarget,
    ) {
        if target.is_interactive() {
            self.hover = true;
        }
    }

    pub fn leave(
        &mut self,
        target: PointerTarget,
    ) {
        if target.is_interactive() {
            self.hover = false;
        }
    }

    /// `None` until the pointer has moved at least once
    pub fn position(&self) -> Option<(f64, f64)> { self.position }

    pub fn is_hovering(&self) -> bool { self.hover }
}
