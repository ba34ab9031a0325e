//! Colour Sensor Settings
//!
//! The ambient light sensor on the Sense HAT v2 is a TCS34725-style colour
//! sensor. Its integration time grows linearly with the configured number of
//! integration cycles; the station sleeps for a multiple of it each loop so
//! that every light sample covers a fresh integration window.

use core::time::Duration;

/// Gain applied to the colour sensor at startup.
pub const DEFAULT_COLOR_GAIN: u8 = 64;

/// Integration cycles configured at startup.
pub const DEFAULT_COLOR_INTEGRATION_CYCLES: u16 = 256;

/// Duration of a single integration cycle (microseconds).
///
/// Source: TCS34725 datasheet, ATIME register (2.4 ms per cycle)
pub const INTEGRATION_CYCLE_US: u64 = 2_400;

/// Number of integration windows the loop sleeps between light samples.
pub const LIGHT_SAMPLE_WINDOWS: u32 = 3;

/// Clear-channel count below which the matrix switches to low-light mode.
pub const DEFAULT_LOW_LIGHT_CLEAR_THRESHOLD: u32 = 50;

/// Integration time for a number of cycles.
///
/// ```rust
/// use cincopi_core::constants::sensors::integration_time;
/// use std::time::Duration;
///
/// assert_eq!(integration_time(256), Duration::from_micros(614_400));
/// ```
pub const fn integration_time(cycles: u16) -> Duration {
    Duration::from_micros(cycles as u64 * INTEGRATION_CYCLE_US)
}
