//! Simulated Sense HAT for running the station without hardware
//!
//! The sensor drifts slowly around a comfortable room climate with small
//! per-read noise; the matrix logs what it would have drawn.

use std::time::Duration;

use cincopi_core::constants::sensors::{integration_time, DEFAULT_COLOR_INTEGRATION_CYCLES};
use cincopi_core::display::{Glyph, FLAME, HAPPY, SNOWFLAKE};
use cincopi_core::errors::{DisplayError, SensorError};
use cincopi_core::traits::{AmbientColor, EnvironmentSensor, LedMatrix};

/// Small xorshift generator; deterministic for a given seed
#[derive(Debug, Clone)]
struct Noise(u64);

impl Noise {
    fn new(seed: u64) -> Self {
        Self(seed.max(1))
    }

    /// Uniform value in [-1, 1]
    fn next(&mut self) -> f64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        (x >> 11) as f64 / (1u64 << 52) as f64 - 1.0
    }
}

/// Environment sensor producing a plausible indoor climate
#[derive(Debug, Clone)]
pub struct SimulatedHat {
    temperature: f64,
    humidity: f64,
    pressure: f64,
    clear: f64,
    gain: u8,
    integration_time: Duration,
    noise: Noise,
}

impl SimulatedHat {
    /// Start at `temperature` °C, `humidity` %
    pub fn new(temperature: f64, humidity: f64, seed: u64) -> Self {
        Self {
            temperature,
            humidity,
            pressure: 1013.25,
            clear: 300.0,
            gain: 1,
            integration_time: integration_time(DEFAULT_COLOR_INTEGRATION_CYCLES),
            noise: Noise::new(seed),
        }
    }

    /// Gain last applied by the station
    pub fn gain(&self) -> u8 {
        self.gain
    }

    fn drift(&mut self, value: f64, step: f64, min: f64, max: f64) -> f64 {
        (value + self.noise.next() * step).clamp(min, max)
    }
}

impl EnvironmentSensor for SimulatedHat {
    fn read_temperature(&mut self) -> Result<f64, SensorError> {
        self.temperature = self.drift(self.temperature, 0.05, 10.0, 40.0);
        Ok(self.temperature + self.noise.next() * 0.02)
    }

    fn read_humidity(&mut self) -> Result<f64, SensorError> {
        self.humidity = self.drift(self.humidity, 0.1, 20.0, 95.0);
        Ok(self.humidity)
    }

    fn read_pressure(&mut self) -> Result<f64, SensorError> {
        self.pressure = self.drift(self.pressure, 0.02, 980.0, 1040.0);
        Ok(self.pressure)
    }

    fn read_ambient_color(&mut self) -> Result<AmbientColor, SensorError> {
        self.clear = self.drift(self.clear, 15.0, 0.0, 1000.0);
        let clear = self.clear as u32;
        Ok(AmbientColor {
            red: clear * 2 / 5,
            green: clear * 2 / 5,
            blue: clear / 5,
            clear,
        })
    }

    fn configure_color(&mut self, gain: u8, integration_cycles: u16) -> Result<(), SensorError> {
        self.gain = gain;
        self.integration_time = integration_time(integration_cycles);
        Ok(())
    }

    fn light_integration_time(&self) -> Duration {
        self.integration_time
    }
}

/// LED matrix that logs instead of lighting pixels
#[derive(Debug, Default)]
pub struct ConsoleMatrix {
    shown: Option<&'static str>,
    low_light: Option<bool>,
}

impl ConsoleMatrix {
    /// Blank matrix
    pub fn new() -> Self {
        Self::default()
    }
}

fn glyph_name(glyph: &Glyph) -> &'static str {
    if glyph == &SNOWFLAKE {
        "snowflake"
    } else if glyph == &FLAME {
        "flame"
    } else if glyph == &HAPPY {
        "happy face"
    } else {
        "custom glyph"
    }
}

impl LedMatrix for ConsoleMatrix {
    fn set_pixels(&mut self, glyph: &Glyph) -> Result<(), DisplayError> {
        let name = glyph_name(glyph);
        if self.shown != Some(name) {
            log::info!("Matrix: {}", name);
            self.shown = Some(name);
        }
        Ok(())
    }

    fn clear(&mut self) -> Result<(), DisplayError> {
        log::info!("Matrix: cleared");
        self.shown = None;
        Ok(())
    }

    fn show_message(&mut self, text: &str, scroll_speed: f32) -> Result<(), DisplayError> {
        log::info!("Matrix: scrolling {:?} at {}s/column", text, scroll_speed);
        self.shown = None;
        Ok(())
    }

    fn set_low_light(&mut self, low_light: bool) -> Result<(), DisplayError> {
        if self.low_light != Some(low_light) {
            log::info!("Matrix: low light {}", if low_light { "on" } else { "off" });
            self.low_light = Some(low_light);
        }
        Ok(())
    }
}
