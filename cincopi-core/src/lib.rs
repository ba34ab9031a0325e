//! Decision logic for the cincopi environmental station
//!
//! A Sense HAT style board samples temperature, humidity, pressure and
//! ambient light. This crate turns those samples into:
//! - a perceived temperature ([`heat_index`])
//! - one of three glyphs on the LED matrix ([`display`])
//! - a per-minute CSV log, written in batches ([`record`])
//! - a per-minute live relay and a periodic persist to remote endpoints
//!   ([`throttle`], [`traits::TelemetrySink`])
//!
//! Hardware and network access stay behind the traits in [`traits`], so the
//! whole loop runs against mocks in tests.
//!
//! ```no_run
//! use std::sync::mpsc;
//! use cincopi_core::{
//!     config::StationConfig,
//!     record::{CsvLogFile, SampleBatcher},
//!     station::{Station, StationSettings},
//!     time::SystemClock,
//!     traits::{EnvironmentSensor, LedMatrix, NullTelemetry},
//! };
//!
//! fn start<S, D>(sensor: S, matrix: D) -> Result<(), Box<dyn std::error::Error>>
//! where
//!     S: EnvironmentSensor,
//!     D: LedMatrix,
//! {
//!     let config = StationConfig::load()?;
//!     let (_input, events) = mpsc::channel();
//!     let log = CsvLogFile::create("readings.csv")?;
//!
//!     let mut station = Station::new(
//!         StationSettings::from(&config),
//!         sensor,
//!         matrix,
//!         NullTelemetry,
//!         SampleBatcher::new(config.write_frequency, log),
//!         SystemClock,
//!         events,
//!     );
//!     station.run()?;
//!     Ok(())
//! }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod config;
pub mod constants;
pub mod controls;
pub mod display;
pub mod errors;
pub mod heat_index;
pub mod reading;
pub mod record;
pub mod station;
pub mod throttle;
pub mod time;
pub mod traits;

// Public API
pub use config::StationConfig;
pub use controls::{BrightnessController, Feedback, ToggleController};
pub use display::{DisplayClassifier, DisplayState};
pub use errors::{StationError, StationResult};
pub use heat_index::heat_index;
pub use reading::{Measurement, Reading};
pub use record::{CsvLogFile, LogSink, MemoryLog, SampleBatcher};
pub use station::{Station, StationSettings, StationStats};
pub use throttle::{Dispatch, MinuteMarker, TelemetryThrottle};
pub use traits::{
    EnvironmentSensor, LedMatrix, StickAction, StickDirection, StickEvent, TelemetrySink,
};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
