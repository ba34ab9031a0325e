//! Count-triggered batching of log records
//!
//! One record is appended per minute crossing. Once the buffer holds more
//! than `write_frequency` records, the whole buffer is written to the sink
//! and cleared, so the buffer never grows past `write_frequency + 1`.

use crate::constants::time::DEFAULT_WRITE_FREQUENCY;
use crate::errors::LogFileError;
use crate::reading::Reading;

use super::LogSink;

/// Buffers CSV records and flushes them to a [`LogSink`] in batches
///
/// ## Example
/// ```rust
/// use cincopi_core::record::{MemoryLog, SampleBatcher};
/// use cincopi_core::reading::Reading;
/// use chrono::NaiveDate;
///
/// let ts = NaiveDate::from_ymd_opt(2024, 7, 1).unwrap().and_hms_opt(9, 0, 0).unwrap();
/// let reading = Reading::from_measurements(21.0, 40.0, 1010.0, ts).unwrap();
///
/// let mut batcher = SampleBatcher::new(2, MemoryLog::new());
/// assert_eq!(batcher.push(&reading).unwrap(), None);
/// assert_eq!(batcher.push(&reading).unwrap(), None);
/// assert_eq!(batcher.push(&reading).unwrap(), Some(3));
/// assert!(batcher.is_empty());
/// assert_eq!(batcher.sink().lines().len(), 3);
/// ```
pub struct SampleBatcher<S: LogSink> {
    /// Destination of flushed batches
    sink: S,
    /// Flush once the buffer holds more than this many records
    write_frequency: usize,
    /// Records not yet written
    batch: Vec<String>,
}

impl<S: LogSink> SampleBatcher<S> {
    /// Create a batcher flushing to `sink`
    pub fn new(write_frequency: usize, sink: S) -> Self {
        Self {
            sink,
            write_frequency,
            batch: Vec::with_capacity(write_frequency + 1),
        }
    }

    /// Batcher with the default threshold of 15
    pub fn with_default_frequency(sink: S) -> Self {
        Self::new(DEFAULT_WRITE_FREQUENCY, sink)
    }

    /// Buffer one reading, flushing if the threshold is exceeded
    ///
    /// Returns the number of records written when a flush happened.
    pub fn push(&mut self, reading: &Reading) -> Result<Option<usize>, LogFileError> {
        self.batch.push(reading.to_record());

        if self.batch.len() > self.write_frequency {
            return self.flush().map(Some);
        }
        Ok(None)
    }

    /// Write every buffered record and clear the buffer
    ///
    /// On failure the records stay buffered.
    pub fn flush(&mut self) -> Result<usize, LogFileError> {
        if self.batch.is_empty() {
            return Ok(0);
        }

        log::info!("Writing {} records to {}", self.batch.len(), self.sink.describe());
        self.sink.append(&self.batch)?;

        let written = self.batch.len();
        self.batch.clear();
        Ok(written)
    }

    /// Records waiting for the next flush
    pub fn pending(&self) -> &[String] {
        &self.batch
    }

    /// Number of buffered records
    pub fn len(&self) -> usize {
        self.batch.len()
    }

    /// Whether nothing is buffered
    pub fn is_empty(&self) -> bool {
        self.batch.is_empty()
    }

    /// Configured threshold
    pub fn write_frequency(&self) -> usize {
        self.write_frequency
    }

    /// The underlying sink
    pub fn sink(&self) -> &S {
        &self.sink
    }
}
