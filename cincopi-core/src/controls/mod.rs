//! Operator-facing controls: the display toggle and automatic brightness

mod brightness;
mod toggle;

pub use brightness::BrightnessController;
pub use toggle::{Feedback, ToggleController};
