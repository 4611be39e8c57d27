//! Purely presentational behavior. None of it has any bearing on the
//! subscription; each effect is a small state machine that `Page` feeds with
//! timer ticks or user input, and that `render` reads back.

mod cursor;
mod easter_egg;
mod parallax;
mod progress;
mod reveal;
mod typewriter;

pub use cursor::CustomCursor;
pub use cursor::PointerTarget;
pub use easter_egg::EasterEgg;
pub use easter_egg::EasterEggActivation;
pub use parallax::Parallax;
pub use progress::ProgressBar;
pub use reveal::Rect;
pub use reveal::ScrollReveal;
pub use typewriter::Typewriter;
