//! One sample of the environment, as produced once per poll cycle
//!
//! A [`Reading`] is immutable once built. Values are rounded to two decimals
//! when the reading is produced; the heat index is computed from the raw
//! temperature and humidity before that rounding.

use chrono::{NaiveDateTime, Timelike};

use crate::constants::time::TIMESTAMP_FORMAT;
use crate::errors::SensorError;
use crate::heat_index::{heat_index, round2};

/// Column header written once at the top of every CSV log
pub const CSV_HEADER: &str = "temperature,humidity,heat_index,pressure,datetime";

/// Environment sample with its derived heat index
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reading {
    /// Air temperature (°C)
    pub temperature: f64,
    /// Relative humidity (%)
    pub humidity: f64,
    /// Perceived temperature (°C)
    pub heat_index: f64,
    /// Barometric pressure (hPa)
    pub pressure: f64,
    /// Local wall-clock time of the sample
    pub timestamp: NaiveDateTime,
}

impl Reading {
    /// Build a reading from raw sensor values
    ///
    /// Rejects non-finite inputs: there is no safe default sample.
    pub fn from_measurements(
        temperature: f64,
        humidity: f64,
        pressure: f64,
        timestamp: NaiveDateTime,
    ) -> Result<Self, SensorError> {
        check_finite("temperature", temperature)?;
        check_finite("humidity", humidity)?;
        check_finite("pressure", pressure)?;

        Ok(Self {
            temperature: round2(temperature),
            humidity: round2(humidity),
            heat_index: heat_index(temperature, humidity),
            pressure: round2(pressure),
            timestamp,
        })
    }

    /// Wall-clock minute (0-59) the reading was taken in
    pub fn minute(&self) -> u32 {
        self.timestamp.minute()
    }

    /// Timestamp in the log/telemetry layout
    pub fn timestamp_string(&self) -> String {
        self.timestamp.format(TIMESTAMP_FORMAT).to_string()
    }

    /// Comma-joined CSV record matching [`CSV_HEADER`]
    ///
    /// ```rust
    /// use cincopi_core::reading::Reading;
    /// use chrono::NaiveDate;
    ///
    /// let ts = NaiveDate::from_ymd_opt(2024, 7, 1).unwrap().and_hms_opt(14, 30, 0).unwrap();
    /// let reading = Reading::from_measurements(23.5, 48.123, 1013.0, ts).unwrap();
    /// assert_eq!(reading.to_record(), "23.5,48.12,23.5,1013.0,2024-07-01 14:30:00.000000");
    /// ```
    pub fn to_record(&self) -> String {
        format!(
            "{:?},{:?},{:?},{:?},{}",
            self.temperature,
            self.humidity,
            self.heat_index,
            self.pressure,
            self.timestamp_string(),
        )
    }
}

fn check_finite(quantity: &'static str, value: f64) -> Result<(), SensorError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(SensorError::NotFinite { quantity })
    }
}

/// A reading labelled with the station that produced it, as sent to the
/// monitoring and collector endpoints
#[derive(Debug, Clone, Copy)]
pub struct Measurement<'a> {
    /// The reading being relayed
    pub reading: &'a Reading,
    /// Fixed station identifier
    pub sensor: &'a str,
}

impl<'a> Measurement<'a> {
    /// Label a reading
    pub fn new(reading: &'a Reading, sensor: &'a str) -> Self {
        Self { reading, sensor }
    }

    /// Field names and values, in wire order
    pub fn fields(&self) -> [(&'static str, String); 6] {
        [
            ("temperature", format!("{:?}", self.reading.temperature)),
            ("humidity", format!("{:?}", self.reading.humidity)),
            ("heat_index", format!("{:?}", self.reading.heat_index)),
            ("pressure", format!("{:?}", self.reading.pressure)),
            ("time", self.reading.timestamp_string()),
            ("sensor", self.sensor.to_string()),
        ]
    }
}
