//! Ambient-light driven low-light mode
//!
//! A single threshold on the colour sensor's clear channel. There is no
//! hysteresis: readings hovering around the threshold switch the mode on
//! every sample.

use crate::constants::sensors::DEFAULT_LOW_LIGHT_CLEAR_THRESHOLD;

/// Decides whether the matrix runs in low-light mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrightnessController {
    threshold: u32,
}

impl Default for BrightnessController {
    fn default() -> Self {
        Self::new(DEFAULT_LOW_LIGHT_CLEAR_THRESHOLD)
    }
}

impl BrightnessController {
    /// Create a controller switching below `threshold` clear counts
    pub fn new(threshold: u32) -> Self {
        Self { threshold }
    }

    /// Low-light mode for a clear-channel count
    pub fn low_light(&self, clear: u32) -> bool {
        clear < self.threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dark_room_enables_low_light() {
        let brightness = BrightnessController::default();
        assert!(brightness.low_light(0));
        assert!(brightness.low_light(49));
    }

    #[test]
    fn threshold_itself_is_bright() {
        let brightness = BrightnessController::default();
        assert!(!brightness.low_light(50));
        assert!(!brightness.low_light(5000));
    }

    #[test]
    fn flips_without_hysteresis() {
        let brightness = BrightnessController::default();
        let modes: Vec<bool> = [49, 50, 49, 50].iter().map(|&c| brightness.low_light(c)).collect();
        assert_eq!(modes, [true, false, true, false]);
    }
}
