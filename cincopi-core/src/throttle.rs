//! Minute-boundary detection and telemetry cadence
//!
//! The station loop runs every couple of seconds, but logging and telemetry
//! happen at most once per wall-clock minute. [`MinuteMarker`] turns the
//! stream of observed minute values into one event per boundary crossing, and
//! [`TelemetryThrottle`] decides what each crossing dispatches:
//!
//! ```text
//! minute:   ..  28   29   30   31  ..
//! relay:         ✓    ✓    ✓    ✓        every crossing
//! persist:                 ✓             minute % 10 == 0
//! ```

use crate::constants::time::DEFAULT_PERSIST_EVERY_MINUTES;

/// Remembers the last wall-clock minute a boundary was handled for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinuteMarker {
    last: u32,
}

impl MinuteMarker {
    /// Start from the minute observed at startup; that minute never fires
    pub fn new(minute: u32) -> Self {
        Self { last: minute }
    }

    /// Last minute recorded
    pub fn last(&self) -> u32 {
        self.last
    }

    /// Report a crossing if `minute` differs from the last one seen
    ///
    /// Returns the new minute at most once per boundary, however many times
    /// the same minute is observed.
    pub fn observe(&mut self, minute: u32) -> Option<u32> {
        if minute == self.last {
            return None;
        }
        self.last = minute;
        Some(minute)
    }
}

/// What to send for one minute crossing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Dispatch {
    /// Continuous relay to the monitoring endpoint
    pub relay: bool,
    /// Periodic persist to the collector
    pub persist: bool,
}

/// Decides which telemetry calls a minute crossing triggers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TelemetryThrottle {
    persist_every: u32,
}

impl Default for TelemetryThrottle {
    fn default() -> Self {
        Self::new(DEFAULT_PERSIST_EVERY_MINUTES)
    }
}

impl TelemetryThrottle {
    /// Persist on minutes divisible by `persist_every` (clamped to at least 1)
    pub fn new(persist_every: u32) -> Self {
        Self {
            persist_every: persist_every.max(1),
        }
    }

    /// Cadence for the minute just crossed into
    pub fn schedule(&self, minute: u32) -> Dispatch {
        Dispatch {
            relay: true,
            persist: minute % self.persist_every == 0,
        }
    }
}
