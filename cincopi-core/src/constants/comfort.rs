//! Heat Index and Comfort Thresholds
//!
//! The heat index uses the Rothfusz regression published by the US National
//! Weather Service. The regression is fitted in Fahrenheit and only holds for
//! warm, humid air; below [`HEAT_INDEX_MIN_F`] or [`HEAT_INDEX_MIN_HUMIDITY_PCT`]
//! the ambient temperature is used as-is.
//!
//! Source: NWS Technical Attachment SR 90-23 (Rothfusz, 1990)

// ===== REGRESSION DOMAIN =====

/// Lowest air temperature (°F) at which the regression is applied.
pub const HEAT_INDEX_MIN_F: f64 = 80.0;

/// Lowest relative humidity (%) at which the regression is applied.
pub const HEAT_INDEX_MIN_HUMIDITY_PCT: f64 = 40.0;

// ===== ROTHFUSZ COEFFICIENTS =====
// T in °F, RH in %

/// Constant term.
pub const ROTHFUSZ_C1: f64 = -42.379;
/// Coefficient of `T`.
pub const ROTHFUSZ_C2: f64 = 2.04901523;
/// Coefficient of `RH`.
pub const ROTHFUSZ_C3: f64 = 10.14333127;
/// Coefficient of `T·RH`.
pub const ROTHFUSZ_C4: f64 = -0.22475541;
/// Coefficient of `T²`.
pub const ROTHFUSZ_C5: f64 = -0.00683783;
/// Coefficient of `RH²`.
pub const ROTHFUSZ_C6: f64 = -0.05481717;
/// Coefficient of `T²·RH`.
pub const ROTHFUSZ_C7: f64 = 0.00122874;
/// Coefficient of `T·RH²`.
pub const ROTHFUSZ_C8: f64 = 0.00085282;
/// Coefficient of `T²·RH²`.
pub const ROTHFUSZ_C9: f64 = -0.00000199;

// ===== DISPLAY THRESHOLDS =====

/// Heat index (°C) below which the snowflake is shown.
pub const DEFAULT_COLD_THRESHOLD_C: f64 = 22.0;

/// Heat index (°C) above which the flame is shown.
///
/// Two deployments of the station disagreed here: one used 28 °C, the other
/// 33 °C. 28 °C is the default; [`ALTERNATE_HOT_THRESHOLD_C`] is kept so the
/// other profile can be selected through configuration.
pub const DEFAULT_HOT_THRESHOLD_C: f64 = 28.0;

/// The warmer "hot" threshold used by the second deployment.
pub const ALTERNATE_HOT_THRESHOLD_C: f64 = 33.0;
