use unicode_segmentation::UnicodeSegmentation;

/// Reveals a title one grapheme cluster at a time, so that emoji and
/// combining marks never show up half-typed.
#[derive(Debug)]
pub struct Typewriter {
    graphemes: Vec<String>,
    shown: usize,
}

impl Typewriter {
    pub fn new(text: &str) -> Self {
        Self {
            graphemes: text.graphemes(true).map(str::to_string).collect(),
            shown: 0,
        }
    }

    /// Reveal one more grapheme. Returns `false` once there is nothing left.
    pub fn advance(&mut self) -> bool {
        if self.is_done() {
            return false;
        }
        self.shown += 1;
        true
    }

    pub fn is_done(&self) -> bool { self.shown >= self.graphemes.len() }

    /// What is on screen right now
    pub fn text(&self) -> String { self.graphemes[..self.shown].concat() }

    pub fn len(&self) -> usize { self.graphemes.len() }

    pub fn is_empty(&self) -> bool { self.graphemes.is_empty() }
}
