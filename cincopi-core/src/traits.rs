//! Interfaces to the station's external collaborators
//!
//! The decision logic never talks to hardware or the network directly. A
//! deployment provides one implementation of each trait here: the Sense HAT
//! drivers on a Raspberry Pi, the simulated board in `cincopi-station`, or
//! the recording mocks used by the tests.

use core::time::Duration;

use crate::display::Glyph;
use crate::errors::{DisplayError, SensorError};
use crate::reading::Measurement;

/// Raw colour-sensor sample
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AmbientColor {
    /// Red channel count
    pub red: u32,
    /// Green channel count
    pub green: u32,
    /// Blue channel count
    pub blue: u32,
    /// Unfiltered channel count, used for brightness
    pub clear: u32,
}

/// Temperature, humidity, pressure and ambient-light source
pub trait EnvironmentSensor {
    /// Air temperature in °C
    fn read_temperature(&mut self) -> Result<f64, SensorError>;

    /// Relative humidity in %
    fn read_humidity(&mut self) -> Result<f64, SensorError>;

    /// Barometric pressure in hPa
    fn read_pressure(&mut self) -> Result<f64, SensorError>;

    /// Most recent colour-sensor integration
    fn read_ambient_color(&mut self) -> Result<AmbientColor, SensorError>;

    /// Apply colour-sensor gain and integration cycles
    fn configure_color(&mut self, gain: u8, integration_cycles: u16) -> Result<(), SensorError>;

    /// Length of one colour-sensor integration window
    fn light_integration_time(&self) -> Duration;
}

/// 8×8 RGB LED matrix
pub trait LedMatrix {
    /// Draw a full-matrix bitmap
    fn set_pixels(&mut self, glyph: &Glyph) -> Result<(), DisplayError>;

    /// Turn every pixel off
    fn clear(&mut self) -> Result<(), DisplayError>;

    /// Scroll a text message; blocks until it has scrolled past
    fn show_message(&mut self, text: &str, scroll_speed: f32) -> Result<(), DisplayError>;

    /// Dim the matrix for dark rooms
    fn set_low_light(&mut self, low_light: bool) -> Result<(), DisplayError>;
}

/// Remote receiver of readings
///
/// Both calls are single best-effort attempts. Implementations must bound
/// how long they block and report failure through `Err`; the station logs
/// and discards it.
pub trait TelemetrySink {
    /// Error reported for a failed attempt
    type Error: core::fmt::Display;

    /// Live relay for dashboards, once per minute
    fn notify(&mut self, measurement: &Measurement<'_>) -> Result<(), Self::Error>;

    /// Write into the remote store, on the periodic cadence only
    fn persist(&mut self, measurement: &Measurement<'_>) -> Result<(), Self::Error>;
}

/// Joystick direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StickDirection {
    /// Up; doubles as the display toggle
    Up,
    /// Down
    Down,
    /// Left
    Left,
    /// Right
    Right,
    /// Centre push
    Middle,
}

/// What happened to the joystick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StickAction {
    /// Initial press
    Pressed,
    /// Repeated while held down
    Held,
    /// Let go
    Released,
}

/// One joystick event, delivered over the station's input channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StickEvent {
    /// Direction pushed
    pub direction: StickDirection,
    /// Press, hold or release
    pub action: StickAction,
}

impl StickEvent {
    /// Create an event
    pub fn new(direction: StickDirection, action: StickAction) -> Self {
        Self { direction, action }
    }
}

/// A telemetry sink that drops everything, for stations without a network
#[derive(Debug, Default, Clone, Copy)]
pub struct NullTelemetry;

impl TelemetrySink for NullTelemetry {
    type Error = core::convert::Infallible;

    fn notify(&mut self, _measurement: &Measurement<'_>) -> Result<(), Self::Error> {
        Ok(())
    }

    fn persist(&mut self, _measurement: &Measurement<'_>) -> Result<(), Self::Error> {
        Ok(())
    }
}
