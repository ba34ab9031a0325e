//! Constants for cincopi
//!
//! Numeric values used by the station logic, grouped by domain:
//! - **Comfort**: heat-index regression and display thresholds
//! - **Sensors**: colour-sensor timing and low-light threshold
//! - **Time**: logging and telemetry cadence
//!
//! Most of these are only defaults. Deployments override them through
//! [`StationConfig`](crate::config::StationConfig).

/// Heat-index regression coefficients and comfort thresholds.
pub mod comfort;

/// Colour-sensor timing and brightness thresholds.
pub mod sensors;

/// Logging and telemetry cadence.
pub mod time;

pub use comfort::{ALTERNATE_HOT_THRESHOLD_C, DEFAULT_COLD_THRESHOLD_C, DEFAULT_HOT_THRESHOLD_C};
pub use sensors::{
    DEFAULT_COLOR_GAIN, DEFAULT_COLOR_INTEGRATION_CYCLES, DEFAULT_LOW_LIGHT_CLEAR_THRESHOLD,
};
pub use time::{DEFAULT_HTTP_TIMEOUT_SECS, DEFAULT_PERSIST_EVERY_MINUTES, DEFAULT_WRITE_FREQUENCY};
