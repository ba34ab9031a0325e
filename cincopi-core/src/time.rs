//! Wall-clock access for the station loop
//!
//! The loop needs two things from time: the local wall-clock (to detect
//! minute boundaries and stamp readings) and a way to block for the colour
//! sensor's integration window. Both go through [`Clock`] so tests can drive
//! many simulated minutes without sleeping.

use core::cell::Cell;
use core::time::Duration;

use chrono::{Local, NaiveDateTime};

/// Source of local time and the loop's only suspension point
pub trait Clock {
    /// Current local wall-clock time
    fn now(&self) -> NaiveDateTime;

    /// Block the calling thread
    fn sleep(&self, duration: Duration);
}

/// The host's real clock
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }

    fn sleep(&self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// Manually driven clock for tests; sleeping advances it
#[derive(Debug, Clone)]
pub struct FixedClock {
    now: Cell<NaiveDateTime>,
    slept: Cell<Duration>,
}

impl FixedClock {
    /// Start at `start`
    pub fn new(start: NaiveDateTime) -> Self {
        Self {
            now: Cell::new(start),
            slept: Cell::new(Duration::ZERO),
        }
    }

    /// Move forward without counting it as sleep
    pub fn advance(&self, by: Duration) {
        let by = chrono::Duration::from_std(by).unwrap_or_else(|_| chrono::Duration::zero());
        self.now.set(self.now.get() + by);
    }

    /// Total time spent in [`Clock::sleep`]
    pub fn total_slept(&self) -> Duration {
        self.slept.get()
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.now.get()
    }

    fn sleep(&self, duration: Duration) {
        self.slept.set(self.slept.get() + duration);
        self.advance(duration);
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> NaiveDateTime {
        (**self).now()
    }

    fn sleep(&self, duration: Duration) {
        (**self).sleep(duration)
    }
}
