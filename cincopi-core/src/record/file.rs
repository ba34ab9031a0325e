//! CSV log file on disk
//!
//! The file is created (truncating any previous one) with a single header
//! line when the station starts. Each flush reopens it in append mode and
//! writes the whole batch with one `write_all`.
//!
//! ```csv
//! temperature,humidity,heat_index,pressure,datetime
//! 23.41,47.9,23.41,1008.32,2024-07-01 14:31:00.412337
//! ```

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;

use crate::constants::time::TIMESTAMP_FORMAT;
use crate::errors::LogFileError;
use crate::reading::CSV_HEADER;

use super::LogSink;

/// Base name used when none is configured
const FALLBACK_BASENAME: &str = "SenseLog";

/// Path of the log for a station started at `started`
///
/// `<dir>/<basename>-<timestamp>.csv`, or `<dir>/SenseLog-<timestamp>.csv`
/// when `basename` is empty.
pub fn log_file_name(dir: &Path, basename: &str, started: NaiveDateTime) -> PathBuf {
    let basename = if basename.is_empty() { FALLBACK_BASENAME } else { basename };
    let stamp = started.format(TIMESTAMP_FORMAT);
    dir.join(format!("{}-{}.csv", basename, stamp))
}

/// Append-only CSV log
#[derive(Debug, Clone)]
pub struct CsvLogFile {
    path: PathBuf,
}

impl CsvLogFile {
    /// Create (or truncate) the file and write the header line
    pub fn create(path: impl Into<PathBuf>) -> Result<Self, LogFileError> {
        let path = path.into();

        let mut file = File::create(&path).map_err(|source| LogFileError::Create {
            path: path.clone(),
            source,
        })?;
        writeln!(file, "{}", CSV_HEADER).map_err(|source| LogFileError::Create {
            path: path.clone(),
            source,
        })?;

        log::info!("Logging readings to {}", path.display());
        Ok(Self { path })
    }

    /// Location of the log
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LogSink for CsvLogFile {
    fn append(&mut self, records: &[String]) -> Result<(), LogFileError> {
        let mut chunk = String::with_capacity(records.iter().map(|r| r.len() + 1).sum());
        for record in records {
            chunk.push_str(record);
            chunk.push('\n');
        }

        let to_error = |source| LogFileError::Append {
            path: self.path.clone(),
            pending: records.len(),
            source,
        };

        let mut file = OpenOptions::new()
            .append(true)
            .open(&self.path)
            .map_err(to_error)?;
        file.write_all(chunk.as_bytes()).map_err(to_error)?;
        file.flush().map_err(to_error)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
