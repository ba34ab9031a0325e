//! Station configuration
//!
//! Every field has a default, so an empty JSON object is a valid config.
//! Values are resolved in this order, later sources winning:
//!
//! 1. built-in defaults
//! 2. the JSON file named by `CINCOPI_CONFIG`, if set
//! 3. individual `CINCOPI_*` environment overrides
//!
//! ```rust
//! use cincopi_core::config::StationConfig;
//!
//! let config: StationConfig = serde_json::from_str(r#"{ "hot_threshold_c": 33.0 }"#).unwrap();
//! assert_eq!(config.hot_threshold_c, 33.0);
//! assert_eq!(config.write_frequency, 15);
//! assert!(config.validate().is_ok());
//! ```

use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::{comfort, sensors, time};
use crate::errors::ConfigError;

/// Environment variable naming the JSON config file
pub const CONFIG_PATH_ENV: &str = "CINCOPI_CONFIG";

/// Tunable parameters for one station
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StationConfig {
    // --- Logging ---
    /// Flush the CSV batch once it holds more than this many records
    pub write_frequency: usize,
    /// CSV file base name; the startup timestamp is appended
    pub log_basename: String,
    /// Directory holding the CSV log
    pub log_dir: PathBuf,

    // --- Display ---
    /// Heat index (°C) below which the snowflake is shown
    pub cold_threshold_c: f64,
    /// Heat index (°C) above which the flame is shown
    pub hot_threshold_c: f64,
    /// Clear-channel count below which low-light mode is enabled
    pub low_light_clear_threshold: u32,
    /// Scroll speed of the "On"/"Off" feedback
    pub message_scroll_speed: f32,

    // --- Colour sensor ---
    /// Gain applied at startup
    pub color_gain: u8,
    /// Integration cycles applied at startup
    pub color_integration_cycles: u16,

    // --- Telemetry ---
    /// Monitoring endpoint (GET, every minute)
    pub monitor_url: String,
    /// Collector endpoint (POST, periodic)
    pub collector_url: String,
    /// Persist on minutes divisible by this value
    pub persist_every_minutes: u32,
    /// Station identifier sent with every reading
    pub sensor_name: String,
    /// Upper bound on a single request (seconds)
    pub http_timeout_secs: u64,
}

impl Default for StationConfig {
    fn default() -> Self {
        Self {
            write_frequency: time::DEFAULT_WRITE_FREQUENCY,
            log_basename: "cincopi_startfrom_".to_string(),
            log_dir: PathBuf::from("."),

            cold_threshold_c: comfort::DEFAULT_COLD_THRESHOLD_C,
            hot_threshold_c: comfort::DEFAULT_HOT_THRESHOLD_C,
            low_light_clear_threshold: sensors::DEFAULT_LOW_LIGHT_CLEAR_THRESHOLD,
            message_scroll_speed: time::DEFAULT_SCROLL_SPEED,

            color_gain: sensors::DEFAULT_COLOR_GAIN,
            color_integration_cycles: sensors::DEFAULT_COLOR_INTEGRATION_CYCLES,

            monitor_url: "http://127.0.0.1:8000/monitor".to_string(),
            collector_url: "http://127.0.0.1:8000/post_data".to_string(),
            persist_every_minutes: time::DEFAULT_PERSIST_EVERY_MINUTES,
            sensor_name: "Sensehat".to_string(),
            http_timeout_secs: time::DEFAULT_HTTP_TIMEOUT_SECS,
        }
    }
}

impl StationConfig {
    /// Resolve the configuration from the process environment
    pub fn load() -> Result<Self, ConfigError> {
        let config = match std::env::var_os(CONFIG_PATH_ENV) {
            Some(path) => Self::from_file(Path::new(&path))?,
            None => Self::default(),
        };
        let config = config.apply_env(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Read a JSON config file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Apply `CINCOPI_*` overrides looked up through `lookup`
    pub fn apply_env<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup("CINCOPI_WRITE_FREQUENCY") {
            self.write_frequency = parse_env("CINCOPI_WRITE_FREQUENCY", v)?;
        }
        if let Some(v) = lookup("CINCOPI_LOG_BASENAME") {
            self.log_basename = v;
        }
        if let Some(v) = lookup("CINCOPI_LOG_DIR") {
            self.log_dir = PathBuf::from(v);
        }
        if let Some(v) = lookup("CINCOPI_COLD") {
            self.cold_threshold_c = parse_env("CINCOPI_COLD", v)?;
        }
        if let Some(v) = lookup("CINCOPI_HOT") {
            self.hot_threshold_c = parse_env("CINCOPI_HOT", v)?;
        }
        if let Some(v) = lookup("CINCOPI_MONITOR_URL") {
            self.monitor_url = v;
        }
        if let Some(v) = lookup("CINCOPI_COLLECTOR_URL") {
            self.collector_url = v;
        }
        Ok(self)
    }

    /// Reject inconsistent values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.write_frequency == 0 {
            return Err(ConfigError::Invalid("write_frequency must be at least 1"));
        }
        if self.persist_every_minutes == 0 {
            return Err(ConfigError::Invalid("persist_every_minutes must be at least 1"));
        }
        if self.cold_threshold_c > self.hot_threshold_c {
            return Err(ConfigError::Invalid("cold threshold exceeds hot threshold"));
        }
        if !is_http_url(&self.monitor_url) || !is_http_url(&self.collector_url) {
            return Err(ConfigError::Invalid("endpoint URLs must start with http:// or https://"));
        }
        Ok(())
    }

    /// Request timeout as a [`Duration`]
    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_secs)
    }
}

fn parse_env<T: FromStr>(key: &'static str, value: String) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidEnv { key, value })
}

fn is_http_url(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}
