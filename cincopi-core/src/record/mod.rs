//! Local CSV logging of per-minute readings
//!
//! Records are buffered by [`SampleBatcher`] and written in batches to a
//! [`LogSink`]: [`CsvLogFile`] on the device, [`MemoryLog`] in tests.

mod batcher;
mod file;
mod memory;

pub use batcher::SampleBatcher;
pub use file::{log_file_name, CsvLogFile};
pub use memory::MemoryLog;

use crate::errors::LogFileError;

/// Append-only destination for batches of CSV records
pub trait LogSink {
    /// Append every record as one line, in order
    ///
    /// Either all lines are written or an error is returned; callers keep the
    /// batch on error.
    fn append(&mut self, records: &[String]) -> Result<(), LogFileError>;

    /// Human-readable location, for log messages
    fn describe(&self) -> String;
}

impl<S: LogSink + ?Sized> LogSink for &mut S {
    fn append(&mut self, records: &[String]) -> Result<(), LogFileError> {
        (**self).append(records)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}
