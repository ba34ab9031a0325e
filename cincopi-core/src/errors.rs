//! Error Types for the Station Loop
//!
//! ## Error Categories
//!
//! Failures fall into three groups, each handled differently by the
//! [`Station`](crate::station::Station) loop:
//!
//! ### Cycle-fatal
//! - [`SensorError`]: no reading could be produced. There is no safe default
//!   sample, so the cycle is skipped rather than fabricating data.
//! - [`DisplayError`]: the LED matrix rejected a write. The cycle is skipped.
//!
//! ### Best-effort
//! - Telemetry failures are reported by the [`TelemetrySink`](crate::traits::TelemetrySink)
//!   as its own error type, logged, and swallowed. The next minute boundary
//!   attempts again.
//!
//! ### Process-fatal
//! - [`LogFileError`]: the CSV log could not be created or appended to. The
//!   pending batch stays in memory and the error is surfaced to the caller of
//!   [`Station::run`](crate::station::Station::run).
//!
//! ```rust
//! use cincopi_core::errors::{StationError, SensorError};
//!
//! fn describe(err: &StationError) -> &'static str {
//!     match err {
//!         StationError::Sensor(_) | StationError::Display(_) => "skip this cycle",
//!         StationError::LogFile(_) => "stop the station",
//!         StationError::Config(_) => "fix the configuration",
//!     }
//! }
//!
//! let err = StationError::from(SensorError::NotFinite { quantity: "humidity" });
//! assert_eq!(describe(&err), "skip this cycle");
//! ```

use std::path::PathBuf;

use thiserror::Error;

/// Result type for station operations
pub type StationResult<T> = Result<T, StationError>;

/// Failure to acquire a sample from the environment sensor
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SensorError {
    /// The driver could not complete the read
    #[error("Failed to read {quantity}: {reason}")]
    ReadFailed {
        /// Which quantity was being read
        quantity: &'static str,
        /// Driver-provided description
        reason: String,
    },

    /// The driver returned NaN or infinity
    #[error("Sensor returned a non-finite {quantity}")]
    NotFinite {
        /// Which quantity was being read
        quantity: &'static str,
    },
}

/// Failure to drive the LED matrix
#[derive(Error, Debug, Clone, PartialEq)]
#[error("LED matrix error: {reason}")]
pub struct DisplayError {
    /// Driver-provided description
    pub reason: String,
}

impl DisplayError {
    /// Create a display error from any description
    pub fn new(reason: impl Into<String>) -> Self {
        Self { reason: reason.into() }
    }
}

/// Failure to create or append to the CSV log
#[derive(Error, Debug)]
pub enum LogFileError {
    /// The log could not be created or its header written
    #[error("Cannot create log {path}: {source}")]
    Create {
        /// Log file path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A batch could not be appended; the records are still buffered
    #[error("Cannot append {pending} records to {path}: {source}")]
    Append {
        /// Log file path
        path: PathBuf,
        /// Records that were pending when the write failed
        pending: usize,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

/// Invalid or unreadable configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Configuration file could not be read
    #[error("Cannot read config {path}: {source}")]
    Io {
        /// Config file path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Configuration file is not valid JSON for [`StationConfig`](crate::config::StationConfig)
    #[error("Cannot parse config {path}: {source}")]
    Parse {
        /// Config file path
        path: PathBuf,
        /// Underlying parse error
        #[source]
        source: serde_json::Error,
    },

    /// An environment override could not be parsed
    #[error("Invalid value {value:?} for {key}")]
    InvalidEnv {
        /// Environment variable name
        key: &'static str,
        /// Offending value
        value: String,
    },

    /// Values are individually fine but inconsistent
    #[error("Invalid configuration: {0}")]
    Invalid(&'static str),
}

/// Umbrella error returned by the station loop
#[derive(Error, Debug)]
pub enum StationError {
    /// Sample acquisition failed
    #[error(transparent)]
    Sensor(#[from] SensorError),

    /// LED matrix write failed
    #[error(transparent)]
    Display(#[from] DisplayError),

    /// CSV log write failed
    #[error(transparent)]
    LogFile(#[from] LogFileError),

    /// Configuration rejected
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl StationError {
    /// Whether the loop may continue with the next cycle after this error
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::Sensor(_) | Self::Display(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sensor_and_display_errors_are_recoverable() {
        let sensor = StationError::from(SensorError::NotFinite { quantity: "pressure" });
        let display = StationError::from(DisplayError::new("i2c nack"));
        assert!(sensor.is_recoverable());
        assert!(display.is_recoverable());
    }

    #[test]
    fn log_file_errors_are_fatal() {
        let err = StationError::from(LogFileError::Append {
            path: PathBuf::from("/tmp/log.csv"),
            pending: 16,
            source: std::io::Error::new(std::io::ErrorKind::Other, "disk full"),
        });
        assert!(!err.is_recoverable());
        assert!(err.to_string().contains("16 records"));
    }
}
