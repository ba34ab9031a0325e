//! The station loop
//!
//! One [`Station`] owns every piece of cross-iteration state: the toggle
//! flag, the minute marker, the CSV batch and the latest reading. Each call
//! to [`Station::tick`] runs one cycle:
//!
//! ```text
//! ┌────────────┐   ┌──────────────┐   ┌────────┐   ┌───────┐   ┌────────────┐   ┌───────┐
//! │  acquire   │──▶│ minute edge? │──▶│ render │──▶│ sleep │──▶│ brightness │──▶│ input │
//! │  reading   │   │ log + relay  │   │ glyph  │   │ 3×int │   │  low-light │   │ drain │
//! └────────────┘   └──────────────┘   └────────┘   └───────┘   └────────────┘   └───────┘
//! ```
//!
//! Joystick events arrive on an `mpsc` channel filled by the input driver and
//! are drained once per cycle, so the toggle flag is only ever touched on the
//! loop's own thread.
//!
//! ## Failure handling
//! - Sensor or display failures abort the cycle; [`Station::run`] logs them
//!   and carries on. A cycle that failed before its sleep still sleeps once.
//! - Telemetry failures are logged and counted, never propagated.
//! - Log-file failures stop the station.

use core::convert::Infallible;
use core::time::Duration;
use std::sync::mpsc::{Receiver, TryRecvError};

use crate::config::StationConfig;
use crate::constants::sensors::LIGHT_SAMPLE_WINDOWS;
use crate::controls::{BrightnessController, Feedback, ToggleController};
use crate::display::{DisplayClassifier, DisplayState};
use crate::errors::{StationError, StationResult};
use crate::reading::{Measurement, Reading};
use crate::record::{LogSink, SampleBatcher};
use crate::throttle::{Dispatch, MinuteMarker, TelemetryThrottle};
use crate::time::Clock;
use crate::traits::{EnvironmentSensor, LedMatrix, StickEvent, TelemetrySink};

/// Decision parameters for a station, usually derived from [`StationConfig`]
#[derive(Debug, Clone, PartialEq)]
pub struct StationSettings {
    /// Glyph thresholds
    pub classifier: DisplayClassifier,
    /// Low-light threshold
    pub brightness: BrightnessController,
    /// Persist cadence
    pub throttle: TelemetryThrottle,
    /// Station identifier sent with every reading
    pub sensor_name: String,
    /// Scroll speed of toggle feedback
    pub scroll_speed: f32,
    /// Colour-sensor gain applied by [`Station::init`]
    pub color_gain: u8,
    /// Colour-sensor integration cycles applied by [`Station::init`]
    pub color_integration_cycles: u16,
}

impl Default for StationSettings {
    fn default() -> Self {
        Self::from(&StationConfig::default())
    }
}

impl From<&StationConfig> for StationSettings {
    fn from(config: &StationConfig) -> Self {
        Self {
            classifier: DisplayClassifier::new(config.cold_threshold_c, config.hot_threshold_c),
            brightness: BrightnessController::new(config.low_light_clear_threshold),
            throttle: TelemetryThrottle::new(config.persist_every_minutes),
            sensor_name: config.sensor_name.clone(),
            scroll_speed: config.message_scroll_speed,
            color_gain: config.color_gain,
            color_integration_cycles: config.color_integration_cycles,
        }
    }
}

/// Counters for what the station has done since startup
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct StationStats {
    /// Completed cycles
    pub cycles: u64,
    /// Cycles aborted by a sensor or display error
    pub skipped_cycles: u64,
    /// Minute crossings handled
    pub minutes: u64,
    /// Successful monitoring relays
    pub relays_sent: u64,
    /// Failed monitoring relays
    pub relay_failures: u64,
    /// Successful collector persists
    pub persists_sent: u64,
    /// Failed collector persists
    pub persist_failures: u64,
    /// CSV batches written
    pub flushes: u64,
    /// Records written across all batches
    pub records_flushed: u64,
    /// Toggle transitions
    pub toggles: u64,
}

/// Outcome of one minute crossing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinuteReport {
    /// Minute crossed into
    pub minute: u32,
    /// Records written if this crossing flushed the batch
    pub flushed: Option<usize>,
    /// Telemetry attempted
    pub dispatch: Dispatch,
}

/// Outcome of one cycle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CycleReport {
    /// Reading acquired at the start of the cycle
    pub reading: Reading,
    /// What the matrix was told to show
    pub state: DisplayState,
    /// Set when the cycle crossed a minute boundary
    pub minute: Option<MinuteReport>,
    /// Low-light mode after the brightness step
    pub low_light: bool,
}

/// The environmental station
pub struct Station<S, D, T, L, C>
where
    S: EnvironmentSensor,
    D: LedMatrix,
    T: TelemetrySink,
    L: LogSink,
    C: Clock,
{
    sensor: S,
    matrix: D,
    telemetry: T,
    batcher: SampleBatcher<L>,
    clock: C,
    events: Receiver<StickEvent>,

    settings: StationSettings,
    toggle: ToggleController,
    marker: MinuteMarker,
    latest: Option<Reading>,
    low_light: Option<bool>,
    input_closed: bool,
    /// Set once the current cycle has slept
    slept: bool,
    stats: StationStats,
}

impl<S, D, T, L, C> Station<S, D, T, L, C>
where
    S: EnvironmentSensor,
    D: LedMatrix,
    T: TelemetrySink,
    L: LogSink,
    C: Clock,
{
    /// Assemble a station; the current minute becomes the first marker
    pub fn new(
        settings: StationSettings,
        sensor: S,
        matrix: D,
        telemetry: T,
        batcher: SampleBatcher<L>,
        clock: C,
        events: Receiver<StickEvent>,
    ) -> Self {
        let marker = MinuteMarker::new(chrono::Timelike::minute(&clock.now()));

        Self {
            sensor,
            matrix,
            telemetry,
            batcher,
            clock,
            events,
            settings,
            toggle: ToggleController::new(),
            marker,
            latest: None,
            low_light: None,
            input_closed: false,
            slept: false,
            stats: StationStats::default(),
        }
    }

    /// Configure the colour sensor
    pub fn init(&mut self) -> StationResult<()> {
        self.sensor
            .configure_color(self.settings.color_gain, self.settings.color_integration_cycles)?;
        log::info!(
            "Colour sensor: gain {}, {} integration cycles, loop sleep {:?}",
            self.settings.color_gain,
            self.settings.color_integration_cycles,
            self.sleep_duration(),
        );
        Ok(())
    }

    /// Run forever; returns only on a fatal error
    pub fn run(&mut self) -> StationResult<Infallible> {
        self.init()?;

        loop {
            match self.tick() {
                Ok(_) => {}
                Err(err) if err.is_recoverable() => {
                    log::error!("Cycle skipped: {}", err);
                    self.stats.skipped_cycles += 1;
                    if !self.slept {
                        self.clock.sleep(self.sleep_duration());
                    }
                }
                Err(err) => {
                    log::error!("Station stopping: {}", err);
                    return Err(err);
                }
            }
        }
    }

    /// Run one full cycle
    pub fn tick(&mut self) -> StationResult<CycleReport> {
        self.slept = false;
        let reading = self.refresh()?;

        let minute = match self.marker.observe(reading.minute()) {
            Some(minute) => Some(self.on_minute(&reading, minute)?),
            None => None,
        };

        let state = self.render(&reading)?;

        self.clock.sleep(self.sleep_duration());
        self.slept = true;

        let color = self.sensor.read_ambient_color()?;
        let low_light = self.apply_brightness(color.clear)?;

        self.drain_input()?;
        self.refresh()?;

        self.stats.cycles += 1;
        Ok(CycleReport {
            reading,
            state,
            minute,
            low_light,
        })
    }

    /// Log and relay a reading for the minute just crossed into
    pub fn on_minute(&mut self, reading: &Reading, minute: u32) -> StationResult<MinuteReport> {
        self.stats.minutes += 1;

        let flushed = self.batcher.push(reading)?;
        if let Some(count) = flushed {
            self.stats.flushes += 1;
            self.stats.records_flushed += count as u64;
        }

        let dispatch = self.settings.throttle.schedule(minute);
        let measurement = Measurement::new(reading, &self.settings.sensor_name);

        if dispatch.relay {
            match self.telemetry.notify(&measurement) {
                Ok(()) => self.stats.relays_sent += 1,
                Err(err) => {
                    log::warn!("Monitor relay failed at minute {}: {}", minute, err);
                    self.stats.relay_failures += 1;
                }
            }
        }

        if dispatch.persist {
            match self.telemetry.persist(&measurement) {
                Ok(()) => self.stats.persists_sent += 1,
                Err(err) => {
                    log::warn!("Collector persist failed at minute {}: {}", minute, err);
                    self.stats.persist_failures += 1;
                }
            }
        }

        Ok(MinuteReport {
            minute,
            flushed,
            dispatch,
        })
    }

    /// Acquire a fresh reading and cache it
    pub fn refresh(&mut self) -> StationResult<Reading> {
        let temperature = self.sensor.read_temperature()?;
        let humidity = self.sensor.read_humidity()?;
        let pressure = self.sensor.read_pressure()?;

        let now = self.clock.now();
        let reading = Reading::from_measurements(temperature, humidity, pressure, now)?;
        self.latest = Some(reading);
        Ok(reading)
    }

    /// Apply one joystick event
    pub fn handle_event(&mut self, event: StickEvent) -> StationResult<()> {
        if let Some(feedback) = self.toggle.handle_event(&event) {
            self.stats.toggles += 1;
            self.show_feedback(feedback)?;
        }
        self.refresh()?;
        Ok(())
    }

    /// How long each cycle sleeps for the light sensor
    pub fn sleep_duration(&self) -> Duration {
        self.sensor.light_integration_time() * LIGHT_SAMPLE_WINDOWS
    }

    /// Most recently acquired reading
    pub fn latest_reading(&self) -> Option<&Reading> {
        self.latest.as_ref()
    }

    /// Whether glyphs are currently drawn
    pub fn display_enabled(&self) -> bool {
        self.toggle.is_enabled()
    }

    /// Records waiting for the next CSV flush
    pub fn pending_records(&self) -> usize {
        self.batcher.len()
    }

    /// Counters since startup
    pub fn stats(&self) -> &StationStats {
        &self.stats
    }

    /// Minute the last boundary was handled for
    pub fn last_minute(&self) -> u32 {
        self.marker.last()
    }

    /// The LED matrix
    pub fn matrix(&self) -> &D {
        &self.matrix
    }

    /// The telemetry sink
    pub fn telemetry(&self) -> &T {
        &self.telemetry
    }

    /// The CSV sink
    pub fn log_sink(&self) -> &L {
        self.batcher.sink()
    }

    fn render(&mut self, reading: &Reading) -> StationResult<DisplayState> {
        let state = self
            .settings
            .classifier
            .classify(reading.heat_index, self.toggle.is_enabled());

        if let Some(glyph) = state.glyph() {
            self.matrix.set_pixels(glyph)?;
        }
        Ok(state)
    }

    fn apply_brightness(&mut self, clear: u32) -> StationResult<bool> {
        let low_light = self.settings.brightness.low_light(clear);
        if self.low_light != Some(low_light) {
            log::debug!("Low-light mode {} (clear = {})", low_light, clear);
        }
        self.matrix.set_low_light(low_light)?;
        self.low_light = Some(low_light);
        Ok(low_light)
    }

    fn show_feedback(&mut self, feedback: Feedback) -> Result<(), StationError> {
        if feedback == Feedback::Off {
            self.matrix.clear()?;
        }
        self.matrix
            .show_message(feedback.message(), self.settings.scroll_speed)?;
        Ok(())
    }

    fn drain_input(&mut self) -> StationResult<()> {
        loop {
            match self.events.try_recv() {
                Ok(event) => self.handle_event(event)?,
                Err(TryRecvError::Empty) => return Ok(()),
                Err(TryRecvError::Disconnected) => {
                    if !self.input_closed {
                        log::warn!("Joystick input closed; toggle disabled");
                        self.input_closed = true;
                    }
                    return Ok(());
                }
            }
        }
    }
}
