//! What the page needs to know about the document it is attached to.

use std::collections::HashMap;

use crate::configuration::SelectorSettings;

/// Read-only view of the host document. A browser bridge would answer these
/// with `querySelectorAll` and `window.innerWidth`.
pub trait Document {
    /// Number of elements matching `selector`
    fn count(
        &self,
        selector: &str,
    ) -> usize;

    /// `textContent` of the first element matching `selector`
    fn text_content(
        &self,
        selector: &str,
    ) -> Option<String>;

    /// Width of the viewport in CSS pixels
    fn viewport_width(&self) -> f64;

    fn contains(
        &self,
        selector: &str,
    ) -> bool {
        self.count(selector) > 0
    }
}

/// An in-memory document: a flat list of (selector, text) pairs. Good enough
/// for a page that only ever looks elements up by class.
#[derive(Debug, Clone, Default)]
pub struct StaticDocument {
    elements: HashMap<String, Vec<String>>,
    viewport_width: f64,
}

impl StaticDocument {
    pub fn new(viewport_width: f64) -> Self {
        Self {
            elements: HashMap::new(),
            viewport_width,
        }
    }

    /// The landing page as shipped: form, progress bar, title, floating
    /// decorations and three feature cards.
    pub fn landing_page(
        selectors: &SelectorSettings,
        viewport_width: f64,
    ) -> Self {
        Self::new(viewport_width)
            .with_element(&selectors.email_form, "")
            .with_element(&selectors.email_input, "")
            .with_element(&selectors.notify_button, "Notify Me")
            .with_element(&selectors.progress_fill, "")
            .with_element(&selectors.progress_text, "50% Complete")
            .with_element(&selectors.title, "Coming Soon")
            .with_element(&selectors.floating_elements, "")
            .with_element(&selectors.feature_card, "Projects")
            .with_element(&selectors.feature_card, "Experience")
            .with_element(&selectors.feature_card, "Contact")
    }

    /// Add one element matching `selector`.
    pub fn with_element(
        mut self,
        selector: &str,
        text: &str,
    ) -> Self {
        self.elements
            .entry(selector.to_string())
            .or_default()
            .push(text.to_string());
        self
    }

    /// Drop every element matching `selector`.
    pub fn without(
        mut self,
        selector: &str,
    ) -> Self {
        self.elements.remove(selector);
        self
    }
}

impl Document for StaticDocument {
    fn count(
        &self,
        selector: &str,
    ) -> usize {
        self.elements.get(selector).map_or(0, Vec::len)
    }

    fn text_content(
        &self,
        selector: &str,
    ) -> Option<String> {
        self.elements.get(selector)?.first().cloned()
    }

    fn viewport_width(&self) -> f64 { self.viewport_width }
}
