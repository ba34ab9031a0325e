//! Telemetry connectors for the cincopi station
//!
//! ## Overview
//!
//! Every minute the station relays its latest reading to a monitoring
//! endpoint, and every few minutes it also persists the reading to a
//! collector. Both are plain HTTP calls:
//!
//! | Endpoint  | Method | Encoding                 | Cadence            |
//! |-----------|--------|--------------------------|--------------------|
//! | monitor   | GET    | URL query parameters     | every minute       |
//! | collector | POST   | form-encoded body        | `minute % 10 == 0` |
//!
//! Both carry the same six fields: `temperature`, `humidity`, `heat_index`,
//! `pressure`, `time` and `sensor`.
//!
//! ## Failure model
//!
//! Each call is a single attempt bounded by the configured timeout. Failures
//! are returned as [`ConnectorError`]; the station logs them and moves on.
//! There is no retry and no buffering of missed readings.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use cincopi_connectors::http::{HttpConfig, HttpConnector};
//!
//! let config = HttpConfig::new(
//!     "http://monitor.local:8000/monitor",
//!     "http://monitor.local:8000/post_data",
//! )
//! .timeout_secs(5);
//! let connector = HttpConnector::new(config)?;
//! # Ok::<(), cincopi_connectors::ConnectorError>(())
//! ```

pub mod http;

pub use http::{HttpConfig, HttpConnector};

use thiserror::Error;

/// Common connector errors
#[derive(Debug, Error)]
pub enum ConnectorError {
    /// Endpoint is not an http:// or https:// URL
    #[error("Invalid endpoint URL: {0}")]
    InvalidUrl(String),

    /// Connection, DNS, TLS or timeout failure
    #[error("Request to {url} failed: {reason}")]
    Transport {
        /// Endpoint that was called
        url: String,
        /// Transport-level description
        reason: String,
    },

    /// Endpoint answered with a non-success status
    #[error("{url} answered with status {status}")]
    Status {
        /// Endpoint that was called
        url: String,
        /// HTTP status code
        status: u16,
    },
}

/// Connection statistics common to all connectors
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConnectionStats {
    /// Total requests that succeeded
    pub messages_sent: u64,
    /// Total requests that failed
    pub messages_failed: u64,
    /// Last error message
    pub last_error: Option<String>,
}
