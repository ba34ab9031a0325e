//! cincopi station daemon
//!
//! Runs the station loop against the simulated Sense HAT, logging to a CSV
//! file and relaying readings over HTTP. Joystick events are typed on stdin
//! (see [`input`]).
//!
//! ```bash
//! RUST_LOG=debug CINCOPI_LOG_DIR=/tmp cincopi
//! ```

mod input;
mod sim;

use std::convert::Infallible;
use std::process::ExitCode;
use std::sync::mpsc;

use thiserror::Error;

use cincopi_connectors::{ConnectorError, HttpConfig, HttpConnector};
use cincopi_core::errors::{ConfigError, LogFileError, StationError};
use cincopi_core::record::{log_file_name, CsvLogFile, SampleBatcher};
use cincopi_core::station::{Station, StationSettings};
use cincopi_core::time::{Clock, SystemClock};
use cincopi_core::StationConfig;

use sim::{ConsoleMatrix, SimulatedHat};

/// Anything that stops the daemon
#[derive(Debug, Error)]
enum Fatal {
    #[error("configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("log file: {0}")]
    LogFile(#[from] LogFileError),

    #[error("telemetry: {0}")]
    Connector(#[from] ConnectorError),

    #[error("joystick input: {0}")]
    Input(#[from] std::io::Error),

    #[error(transparent)]
    Station(#[from] StationError),
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    match run() {
        Ok(never) => match never {},
        Err(err) => {
            log::error!("cincopi stopped: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<Infallible, Fatal> {
    let config = StationConfig::load()?;
    let clock = SystemClock;

    log::info!("cincopi {} starting", cincopi_core::VERSION);
    log::info!(
        "Thresholds: cold < {} °C, hot > {} °C; CSV flush every {} records",
        config.cold_threshold_c,
        config.hot_threshold_c,
        config.write_frequency,
    );
    log::info!(
        "Telemetry: relay {} every minute, persist {} every {} minutes",
        config.monitor_url,
        config.collector_url,
        config.persist_every_minutes,
    );

    let log_path = log_file_name(&config.log_dir, &config.log_basename, clock.now());
    let log = CsvLogFile::create(log_path)?;
    let http = HttpConnector::new(HttpConfig::from(&config))?;

    let (keys, events) = mpsc::channel();
    input::spawn_stdin(keys)?;

    let mut station = Station::new(
        StationSettings::from(&config),
        SimulatedHat::new(24.0, 45.0, seed(&clock)),
        ConsoleMatrix::new(),
        http,
        SampleBatcher::new(config.write_frequency, log),
        clock,
        events,
    );

    Ok(station.run()?)
}

fn seed(clock: &impl Clock) -> u64 {
    clock.now().and_utc().timestamp_nanos_opt().unwrap_or(1) as u64
}
