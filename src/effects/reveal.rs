use serde::Serialize;

use crate::configuration::RevealSettings;

/// An axis-aligned rectangle in viewport (client) coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    ) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn area(&self) -> f64 { self.width * self.height }

    /// Edge-inclusive: rectangles that merely touch intersect in a
    /// zero-area rectangle.
    pub fn intersection(
        &self,
        other: &Rect,
    ) -> Option<Rect> {
        let left = self.x.max(other.x);
        let top = self.y.max(other.y);
        let right = (self.x + self.width).min(other.x + other.width);
        let bottom = (self.y + self.height).min(other.y + other.height);
        (right >= left && bottom >= top).then(|| Rect::new(left, top, right - left, bottom - top))
    }
}

/// Feature cards fade in the first time enough of them scrolls into view, and
/// stay revealed from then on.
#[derive(Debug)]
pub struct ScrollReveal {
    threshold: f64,
    bottom_margin: f64,
    revealed: Vec<bool>,
}

impl ScrollReveal {
    pub fn new(
        settings: &RevealSettings,
        cards: usize,
    ) -> Self {
        Self {
            threshold: settings.threshold,
            bottom_margin: settings.bottom_margin_px,
            revealed: vec![false; cards],
        }
    }

    /// Fraction of `card` inside `viewport`, once the latter has lost its
    /// bottom margin. A zero-area card counts as fully visible if it touches
    /// the viewport at all.
    pub fn visible_ratio(
        &self,
        card: &Rect,
        viewport: &Rect,
    ) -> f64 {
        let root = Rect {
            height: (viewport.height - self.bottom_margin).max(0.0),
            ..*viewport
        };
        match card.intersection(&root) {
            None => 0.0,
            Some(_) if card.area() <= 0.0 => 1.0,
            Some(visible) => visible.area() / card.area(),
        }
    }

    /// Report where card `index` currently is. Returns whether this revealed
    /// it.
    pub fn observe(
        &mut self,
        index: usize,
        card: &Rect,
        viewport: &Rect,
    ) -> bool {
        let ratio = self.visible_ratio(card, viewport);
        let Some(revealed) = self.revealed.get_mut(index) else {
            tracing::warn!(index, "observed a feature card that does not exist");
            return false;
        };
        if *revealed || ratio < self.threshold {
            return false;
        }
        *revealed = true;
        tracing::debug!(index, ratio, "revealing feature card");
        true
    }

    pub fn is_revealed(
        &self,
        index: usize,
    ) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }

    /// Indices of the revealed cards, in document order
    pub fn revealed(&self) -> Vec<usize> {
        self.revealed
            .iter()
            .enumerate()
            .filter_map(|(i, r)| r.then_some(i))
            .collect()
    }
}
