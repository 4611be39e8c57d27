use std::collections::VecDeque;

/// Returned when the code is typed; only the latest activation may end the
/// effect, so typing the code twice in a row extends it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EasterEggActivation(u64);

/// Watches key presses for a fixed (case-insensitive) code.
#[derive(Debug)]
pub struct EasterEgg {
    code: Vec<char>,
    recent: VecDeque<char>,
    activations: u64,
    active: bool,
}

impl EasterEgg {
    pub fn new(code: &str) -> Self {
        let code: Vec<char> = code.to_lowercase().chars().collect();
        Self {
            recent: VecDeque::with_capacity(code.len()),
            code,
            activations: 0,
            active: false,
        }
    }

    /// Feed one key press, as reported by `KeyboardEvent.key`. Named keys
    /// ("Shift", "Enter"...) are fed character by character, like any other
    /// text.
    pub fn key(
        &mut self,
        key: &str,
    ) -> Option<EasterEggActivation> {
        if self.code.is_empty() {
            return None;
        }
        for c in key.to_lowercase().chars() {
            if self.recent.len() == self.code.len() {
                self.recent.pop_front();
            }
            self.recent.push_back(c);
        }
        if !self.recent.iter().eq(self.code.iter()) {
            return None;
        }

        self.activations += 1;
        self.active = true;
        tracing::info!("easter egg found");
        Some(EasterEggActivation(self.activations))
    }

    /// End the effect, unless it has been re-triggered since `activation`.
    pub fn expire(
        &mut self,
        activation: EasterEggActivation,
    ) -> bool {
        if !self.active || activation.0 != self.activations {
            return false;
        }
        self.active = false;
        true
    }

    pub fn is_active(&self) -> bool { self.active }
}
