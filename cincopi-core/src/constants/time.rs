//! Logging and Telemetry Cadence
//!
//! The station produces at most one record per wall-clock minute. These
//! constants control how those per-minute records are persisted and relayed.

/// Buffered records tolerated before the batch is written to the CSV log.
///
/// A flush happens once the buffer holds *more* than this many records, so
/// with the default the log is written every 16 minutes.
pub const DEFAULT_WRITE_FREQUENCY: usize = 15;

/// Periodic persist fires on minutes divisible by this value.
pub const DEFAULT_PERSIST_EVERY_MINUTES: u32 = 10;

/// Upper bound on a single telemetry request (seconds).
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 5;

/// Scroll speed for the "On"/"Off" feedback messages (seconds per column).
pub const DEFAULT_SCROLL_SPEED: f32 = 0.03;

/// `strftime` layout for record timestamps and log file names.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";
