//! In-memory log sink

use std::path::PathBuf;

use crate::errors::LogFileError;

use super::LogSink;

/// Collects flushed records in memory
///
/// Used by tests and by stations that should not touch the filesystem.
#[derive(Debug, Default, Clone)]
pub struct MemoryLog {
    lines: Vec<String>,
    batches: usize,
    fail: bool,
}

impl MemoryLog {
    /// Empty log accepting every batch
    pub fn new() -> Self {
        Self::default()
    }

    /// Log that rejects every batch, simulating a full disk
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// Every record written so far
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Number of successful appends
    pub fn batches(&self) -> usize {
        self.batches
    }
}

impl LogSink for MemoryLog {
    fn append(&mut self, records: &[String]) -> Result<(), LogFileError> {
        if self.fail {
            return Err(LogFileError::Append {
                path: PathBuf::from("<memory>"),
                pending: records.len(),
                source: std::io::Error::new(std::io::ErrorKind::Other, "memory log rejects writes"),
            });
        }
        self.lines.extend_from_slice(records);
        self.batches += 1;
        Ok(())
    }

    fn describe(&self) -> String {
        "<memory>".to_string()
    }
}
