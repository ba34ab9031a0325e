//! Common test doubles for station integration tests
//!
//! - [`ScriptedSensor`]: fixed environment values, scripted light levels,
//!   switchable failure
//! - [`RecordingMatrix`]: remembers every call made to the LED matrix
//! - [`RecordingTelemetry`]: remembers every relay/persist, optionally failing
//! - [`station_start`]: a fixed starting time half way through a minute

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use chrono::{NaiveDate, NaiveDateTime, Timelike};

use cincopi_core::{
    constants::sensors::integration_time,
    display::{Glyph, FLAME, HAPPY, SNOWFLAKE},
    errors::{DisplayError, SensorError},
    reading::Measurement,
    traits::{AmbientColor, EnvironmentSensor, LedMatrix, TelemetrySink},
    DisplayState,
};

/// 10:00:30 on a fixed day
pub fn station_start() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 6, 21)
        .unwrap()
        .and_hms_opt(10, 0, 30)
        .unwrap()
}

/// Values the scripted sensor returns
#[derive(Debug, Clone)]
pub struct SensorScript {
    pub temperature: f64,
    pub humidity: f64,
    pub pressure: f64,
    /// Clear-channel values returned in order; the last one repeats
    pub clear: Vec<u32>,
    pub fail: bool,
    /// Fail only the colour sensor, after the loop has slept
    pub fail_color: bool,
    pub integration_time: Duration,
    pub configured: Option<(u8, u16)>,
    pub reads: usize,
}

/// Sensor whose values are controlled through a shared [`SensorScript`]
#[derive(Clone)]
pub struct ScriptedSensor {
    pub script: Rc<RefCell<SensorScript>>,
}

impl ScriptedSensor {
    /// Comfortable room, bright light, one-minute loop sleep
    pub fn new() -> Self {
        Self {
            script: Rc::new(RefCell::new(SensorScript {
                temperature: 24.0,
                humidity: 45.0,
                pressure: 1013.25,
                clear: vec![400],
                fail: false,
                fail_color: false,
                integration_time: Duration::from_secs(20),
                configured: None,
                reads: 0,
            })),
        }
    }

    pub fn set_climate(&self, temperature: f64, humidity: f64) {
        let mut script = self.script.borrow_mut();
        script.temperature = temperature;
        script.humidity = humidity;
    }

    pub fn set_clear(&self, clear: Vec<u32>) {
        self.script.borrow_mut().clear = clear;
    }

    pub fn set_failing(&self, fail: bool) {
        self.script.borrow_mut().fail = fail;
    }

    pub fn set_color_failing(&self, fail: bool) {
        self.script.borrow_mut().fail_color = fail;
    }

    pub fn set_integration_time(&self, integration_time: Duration) {
        self.script.borrow_mut().integration_time = integration_time;
    }

    pub fn configured(&self) -> Option<(u8, u16)> {
        self.script.borrow().configured
    }

    pub fn reads(&self) -> usize {
        self.script.borrow().reads
    }

    fn read(
        &self,
        quantity: &'static str,
        pick: fn(&SensorScript) -> f64,
    ) -> Result<f64, SensorError> {
        let mut script = self.script.borrow_mut();
        if script.fail {
            return Err(SensorError::ReadFailed {
                quantity,
                reason: "i2c timeout".to_string(),
            });
        }
        script.reads += 1;
        Ok(pick(&*script))
    }
}

impl EnvironmentSensor for ScriptedSensor {
    fn read_temperature(&mut self) -> Result<f64, SensorError> {
        self.read("temperature", |s| s.temperature)
    }

    fn read_humidity(&mut self) -> Result<f64, SensorError> {
        self.read("humidity", |s| s.humidity)
    }

    fn read_pressure(&mut self) -> Result<f64, SensorError> {
        self.read("pressure", |s| s.pressure)
    }

    fn read_ambient_color(&mut self) -> Result<AmbientColor, SensorError> {
        let mut script = self.script.borrow_mut();
        if script.fail || script.fail_color {
            return Err(SensorError::ReadFailed {
                quantity: "colour",
                reason: "i2c timeout".to_string(),
            });
        }
        let clear = if script.clear.len() > 1 {
            script.clear.remove(0)
        } else {
            script.clear.first().copied().unwrap_or(0)
        };
        Ok(AmbientColor {
            red: clear / 3,
            green: clear / 3,
            blue: clear / 3,
            clear,
        })
    }

    fn configure_color(&mut self, gain: u8, integration_cycles: u16) -> Result<(), SensorError> {
        let mut script = self.script.borrow_mut();
        script.configured = Some((gain, integration_cycles));
        script.integration_time = integration_time(integration_cycles);
        Ok(())
    }

    fn light_integration_time(&self) -> Duration {
        self.script.borrow().integration_time
    }
}

/// One call made to the matrix
#[derive(Debug, Clone, PartialEq)]
pub enum MatrixOp {
    Pixels(DisplayState),
    Clear,
    Message(String),
    LowLight(bool),
}

/// Matrix that records calls instead of lighting LEDs
#[derive(Debug, Default)]
pub struct RecordingMatrix {
    pub ops: Vec<MatrixOp>,
    pub fail: bool,
}

impl RecordingMatrix {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn glyphs(&self) -> Vec<DisplayState> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                MatrixOp::Pixels(state) => Some(*state),
                _ => None,
            })
            .collect()
    }

    pub fn messages(&self) -> Vec<String> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                MatrixOp::Message(text) => Some(text.clone()),
                _ => None,
            })
            .collect()
    }
}

fn state_of(glyph: &Glyph) -> DisplayState {
    if glyph == &SNOWFLAKE {
        DisplayState::Snowflake
    } else if glyph == &FLAME {
        DisplayState::Flame
    } else if glyph == &HAPPY {
        DisplayState::Happy
    } else {
        panic!("unknown glyph drawn")
    }
}

impl LedMatrix for RecordingMatrix {
    fn set_pixels(&mut self, glyph: &Glyph) -> Result<(), DisplayError> {
        if self.fail {
            return Err(DisplayError::new("matrix unplugged"));
        }
        self.ops.push(MatrixOp::Pixels(state_of(glyph)));
        Ok(())
    }

    fn clear(&mut self) -> Result<(), DisplayError> {
        self.ops.push(MatrixOp::Clear);
        Ok(())
    }

    fn show_message(&mut self, text: &str, _scroll_speed: f32) -> Result<(), DisplayError> {
        self.ops.push(MatrixOp::Message(text.to_string()));
        Ok(())
    }

    fn set_low_light(&mut self, low_light: bool) -> Result<(), DisplayError> {
        self.ops.push(MatrixOp::LowLight(low_light));
        Ok(())
    }
}

/// Telemetry sink recording the minute of every reading it receives
#[derive(Debug, Default)]
pub struct RecordingTelemetry {
    pub notified: Vec<u32>,
    pub persisted: Vec<u32>,
    pub sensors: Vec<String>,
    pub fail: bool,
}

impl RecordingTelemetry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }
}

impl TelemetrySink for RecordingTelemetry {
    type Error = String;

    fn notify(&mut self, measurement: &Measurement<'_>) -> Result<(), Self::Error> {
        if self.fail {
            return Err("connection refused".to_string());
        }
        self.notified.push(measurement.reading.timestamp.minute());
        self.sensors.push(measurement.sensor.to_string());
        Ok(())
    }

    fn persist(&mut self, measurement: &Measurement<'_>) -> Result<(), Self::Error> {
        if self.fail {
            return Err("connection refused".to_string());
        }
        self.persisted.push(measurement.reading.timestamp.minute());
        Ok(())
    }
}
