//! Display state selection
//!
//! Maps a heat index and the toggle's enabled flag to what the LED matrix
//! should show:
//!
//! | condition              | state       |
//! |------------------------|-------------|
//! | display disabled       | `Blank`     |
//! | `hi < cold`            | `Snowflake` |
//! | `hi > hot`             | `Flame`     |
//! | otherwise (inclusive)  | `Happy`     |
//!
//! Both comparisons are strict, so a heat index exactly on either threshold
//! is `Happy`.

pub mod glyphs;

pub use glyphs::{Glyph, Rgb, FLAME, HAPPY, SNOWFLAKE};

use crate::constants::comfort::{DEFAULT_COLD_THRESHOLD_C, DEFAULT_HOT_THRESHOLD_C};

/// What the matrix shows for one cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DisplayState {
    /// Cold
    Snowflake,
    /// Hot
    Flame,
    /// Comfortable
    Happy,
    /// Display switched off; the matrix is left untouched
    Blank,
}

impl DisplayState {
    /// Bitmap to draw, `None` for [`DisplayState::Blank`]
    pub fn glyph(&self) -> Option<&'static Glyph> {
        match self {
            Self::Snowflake => Some(&SNOWFLAKE),
            Self::Flame => Some(&FLAME),
            Self::Happy => Some(&HAPPY),
            Self::Blank => None,
        }
    }
}

/// Heat-index thresholds for glyph selection
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayClassifier {
    cold_c: f64,
    hot_c: f64,
}

impl Default for DisplayClassifier {
    fn default() -> Self {
        Self::new(DEFAULT_COLD_THRESHOLD_C, DEFAULT_HOT_THRESHOLD_C)
    }
}

impl DisplayClassifier {
    /// Create a classifier; thresholds are used exactly as given
    pub fn new(cold_c: f64, hot_c: f64) -> Self {
        Self { cold_c, hot_c }
    }

    /// Cold threshold (°C)
    pub fn cold(&self) -> f64 {
        self.cold_c
    }

    /// Hot threshold (°C)
    pub fn hot(&self) -> f64 {
        self.hot_c
    }

    /// Pick the display state for a heat index
    pub fn classify(&self, heat_index: f64, enabled: bool) -> DisplayState {
        if !enabled {
            DisplayState::Blank
        } else if heat_index < self.cold_c {
            DisplayState::Snowflake
        } else if heat_index > self.hot_c {
            DisplayState::Flame
        } else {
            DisplayState::Happy
        }
    }
}
