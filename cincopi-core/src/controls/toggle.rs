//! Display on/off toggle driven by the joystick
//!
//! ```text
//!        up: Pressed | Held
//!   ┌──────────────────────────┐
//!   │                          ▼
//!  On ◄────────────────────── Off
//!        up: Pressed | Held
//! ```
//!
//! `Released` never toggles, so a press followed by its release flips the
//! display exactly once. Every transition yields a [`Feedback`] message that
//! the station scrolls across the matrix.

use crate::traits::{StickAction, StickDirection, StickEvent};

/// Transient message shown after a toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    /// Display was just enabled
    On,
    /// Display was just disabled; the matrix is cleared first
    Off,
}

impl Feedback {
    /// Text scrolled across the matrix
    pub fn message(&self) -> &'static str {
        match self {
            Self::On => "On",
            Self::Off => "Off",
        }
    }
}

/// Holds the display-enabled flag
#[derive(Debug, Clone)]
pub struct ToggleController {
    enabled: bool,
}

impl Default for ToggleController {
    fn default() -> Self {
        Self::new()
    }
}

impl ToggleController {
    /// Start with the display enabled
    pub fn new() -> Self {
        Self { enabled: true }
    }

    /// Whether glyphs should be drawn
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Apply an action from the toggle control
    pub fn handle(&mut self, action: StickAction) -> Option<Feedback> {
        if action == StickAction::Released {
            return None;
        }

        self.enabled = !self.enabled;
        let feedback = if self.enabled { Feedback::On } else { Feedback::Off };
        log::info!("Display toggled {}", feedback.message());
        Some(feedback)
    }

    /// Apply a joystick event; only the up direction is the toggle control
    pub fn handle_event(&mut self, event: &StickEvent) -> Option<Feedback> {
        match event.direction {
            StickDirection::Up => self.handle(event.action),
            _ => None,
        }
    }
}
