//! Perceived temperature ("heat index") from air temperature and humidity
//!
//! Applies the Rothfusz regression when the air is warm and humid enough for
//! it to be meaningful, and falls back to the ambient temperature otherwise:
//! - `F < 80` or `RH < 40` → ambient temperature, rounded to 2 decimals
//! - otherwise → regression result converted back to Celsius, rounded
//!
//! The function is total over finite inputs. NaN or infinite sensor values
//! must be rejected before calling it (see [`Reading`](crate::reading::Reading)).

use crate::constants::comfort::*;

/// Convert Celsius to Fahrenheit
#[inline]
pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    celsius * 9.0 / 5.0 + 32.0
}

/// Convert Fahrenheit to Celsius
#[inline]
pub fn fahrenheit_to_celsius(fahrenheit: f64) -> f64 {
    (fahrenheit - 32.0) * 5.0 / 9.0
}

/// Round to two decimal places
///
/// Rounds the exact binary value, so `15.045` (stored as 15.04499…) becomes
/// `15.04`; exact ties go to even.
pub fn round2(value: f64) -> f64 {
    format!("{:.2}", value).parse().unwrap_or(value)
}

/// Whether the regression applies to this temperature (°F) and humidity (%)
#[inline]
pub fn in_regression_domain(fahrenheit: f64, humidity: f64) -> bool {
    !(fahrenheit < HEAT_INDEX_MIN_F || humidity < HEAT_INDEX_MIN_HUMIDITY_PCT)
}

/// Heat index in °C for a temperature in °C and relative humidity in %
///
/// ```rust
/// use cincopi_core::heat_index::heat_index;
///
/// // Mild air: the ambient temperature is returned unchanged
/// assert_eq!(heat_index(21.456, 55.0), 21.46);
///
/// // Hot and humid: perceived temperature is well above ambient
/// assert!(heat_index(35.0, 60.0) > 44.0);
/// ```
pub fn heat_index(temperature_c: f64, humidity: f64) -> f64 {
    let f = celsius_to_fahrenheit(temperature_c);

    if !in_regression_domain(f, humidity) {
        return round2(temperature_c);
    }

    let h = humidity;
    let hi_f = ROTHFUSZ_C1
        + ROTHFUSZ_C2 * f
        + ROTHFUSZ_C3 * h
        + ROTHFUSZ_C4 * f * h
        + ROTHFUSZ_C5 * f * f
        + ROTHFUSZ_C6 * h * h
        + ROTHFUSZ_C7 * f * f * h
        + ROTHFUSZ_C8 * f * h * h
        + ROTHFUSZ_C9 * f * f * h * h;

    round2(fahrenheit_to_celsius(hi_f))
}
