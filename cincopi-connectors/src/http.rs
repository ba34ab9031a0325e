//! HTTP connector for the monitoring and collector endpoints
//!
//! ## Design Decisions
//!
//! - Blocking `ureq` agent: the station loop is single-threaded and already
//!   blocks for the light sensor, so an async runtime buys nothing.
//! - One agent shared by both endpoints, so keep-alive connections are reused
//!   when both live on the same host.
//! - Single attempt per call. A missed relay is superseded by the next
//!   minute's reading anyway.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use cincopi_connectors::http::{HttpConnector, HttpConfig};
//! use cincopi_core::{Measurement, Reading, TelemetrySink};
//! use chrono::NaiveDate;
//!
//! let config = HttpConfig::new("http://127.0.0.1:8000/monitor", "http://127.0.0.1:8000/post_data")
//!     .timeout_secs(5);
//! let mut http = HttpConnector::new(config)?;
//!
//! let ts = NaiveDate::from_ymd_opt(2024, 7, 1).unwrap().and_hms_opt(14, 30, 0).unwrap();
//! let reading = Reading::from_measurements(23.5, 48.0, 1013.0, ts).unwrap();
//! http.notify(&Measurement::new(&reading, "Sensehat"))?;
//! # Ok::<(), cincopi_connectors::ConnectorError>(())
//! ```

use std::time::Duration;

use cincopi_core::config::StationConfig;
use cincopi_core::reading::Measurement;
use cincopi_core::traits::TelemetrySink;

use crate::{ConnectionStats, ConnectorError};

/// HTTP configuration
#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// Monitoring endpoint, called with GET every minute
    pub monitor_url: String,
    /// Collector endpoint, called with POST periodically
    pub collector_url: String,
    /// Request timeout
    pub timeout: Duration,
    /// User agent string
    pub user_agent: String,
}

impl HttpConfig {
    /// Create new configuration for the two endpoints
    pub fn new(monitor_url: impl Into<String>, collector_url: impl Into<String>) -> Self {
        Self {
            monitor_url: monitor_url.into(),
            collector_url: collector_url.into(),
            timeout: Duration::from_secs(cincopi_core::constants::time::DEFAULT_HTTP_TIMEOUT_SECS),
            user_agent: format!("cincopi/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    /// Set request timeout in seconds
    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.timeout = Duration::from_secs(secs);
        self
    }
}

impl From<&StationConfig> for HttpConfig {
    fn from(config: &StationConfig) -> Self {
        Self::new(config.monitor_url.clone(), config.collector_url.clone())
            .timeout_secs(config.http_timeout_secs)
    }
}

/// HTTP connector using lightweight ureq client
pub struct HttpConnector {
    config: HttpConfig,
    agent: ureq::Agent,
    stats: ConnectionStats,
}

impl HttpConnector {
    /// Create new HTTP connector
    pub fn new(config: HttpConfig) -> Result<Self, ConnectorError> {
        for url in [&config.monitor_url, &config.collector_url] {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ConnectorError::InvalidUrl(url.clone()));
            }
        }

        let agent = ureq::AgentBuilder::new()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build();

        Ok(Self {
            config,
            agent,
            stats: ConnectionStats::default(),
        })
    }

    /// Active configuration
    pub fn config(&self) -> &HttpConfig {
        &self.config
    }

    /// Counters since creation
    pub fn stats(&self) -> &ConnectionStats {
        &self.stats
    }

    /// GET the monitoring endpoint with the fields as query parameters
    pub fn send_query(&mut self, fields: &[(&str, &str)]) -> Result<(), ConnectorError> {
        let url = self.config.monitor_url.clone();
        let mut request = self.agent.get(&url);
        for (name, value) in fields {
            request = request.query(name, value);
        }
        let result = request.call();
        self.record(&url, result)
    }

    /// POST the fields to the collector endpoint as a form body
    pub fn send_form(&mut self, fields: &[(&str, &str)]) -> Result<(), ConnectorError> {
        let url = self.config.collector_url.clone();
        let result = self.agent.post(&url).send_form(fields);
        self.record(&url, result)
    }

    fn record(
        &mut self,
        url: &str,
        result: Result<ureq::Response, ureq::Error>,
    ) -> Result<(), ConnectorError> {
        let outcome = match result {
            Ok(response) => {
                log::debug!("{} -> {}", url, response.status());
                Ok(())
            }
            Err(ureq::Error::Status(status, _)) => Err(ConnectorError::Status {
                url: url.to_string(),
                status,
            }),
            Err(ureq::Error::Transport(transport)) => Err(ConnectorError::Transport {
                url: url.to_string(),
                reason: transport.to_string(),
            }),
        };

        match &outcome {
            Ok(()) => self.stats.messages_sent += 1,
            Err(err) => {
                self.stats.messages_failed += 1;
                self.stats.last_error = Some(err.to_string());
            }
        }
        outcome
    }
}

fn as_pairs<'a>(fields: &'a [(&'static str, String)]) -> Vec<(&'a str, &'a str)> {
    fields.iter().map(|(name, value)| (*name, value.as_str())).collect()
}

impl TelemetrySink for HttpConnector {
    type Error = ConnectorError;

    fn notify(&mut self, measurement: &Measurement<'_>) -> Result<(), Self::Error> {
        let fields = measurement.fields();
        self.send_query(&as_pairs(&fields))
    }

    fn persist(&mut self, measurement: &Measurement<'_>) -> Result<(), Self::Error> {
        let fields = measurement.fields();
        self.send_form(&as_pairs(&fields))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use cincopi_core::reading::Reading;
    use std::io::{BufRead, BufReader, Read, Write};
    use std::net::TcpListener;
    use std::sync::mpsc;
    use std::thread;
    use std::time::Instant;

    /// Accept one request, answer with `status`, and hand back the raw request
    fn stub_server(status: u16) -> (String, mpsc::Receiver<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let (tx, rx) = mpsc::channel();

        thread::spawn(move || {
            let (stream, _) = listener.accept().unwrap();
            let mut reader = BufReader::new(stream.try_clone().unwrap());

            let mut request = String::new();
            let mut content_length = 0;
            loop {
                let mut line = String::new();
                reader.read_line(&mut line).unwrap();
                if let Some(value) = line.to_ascii_lowercase().strip_prefix("content-length:") {
                    content_length = value.trim().parse().unwrap();
                }
                let end = line == "\r\n" || line.is_empty();
                request.push_str(&line);
                if end {
                    break;
                }
            }
            let mut body = vec![0u8; content_length];
            reader.read_exact(&mut body).unwrap();
            request.push_str(&String::from_utf8(body).unwrap());

            let mut stream = stream;
            write!(
                stream,
                "HTTP/1.1 {} Stub\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
                status
            )
            .unwrap();
            tx.send(request).unwrap();
        });

        (format!("http://{}", addr), rx)
    }

    fn reading() -> Reading {
        let ts = NaiveDate::from_ymd_opt(2024, 7, 1)
            .unwrap()
            .and_hms_opt(14, 30, 0)
            .unwrap();
        Reading::from_measurements(23.5, 48.0, 1013.25, ts).unwrap()
    }

    #[test]
    fn test_config_builder() {
        let config = HttpConfig::new("https://a.example/monitor", "https://a.example/post_data")
            .timeout_secs(60);

        assert_eq!(config.timeout, Duration::from_secs(60));
        assert!(config.user_agent.starts_with("cincopi/"));
    }

    #[test]
    fn test_config_from_station() {
        let config = HttpConfig::from(&StationConfig::default());
        assert_eq!(config.monitor_url, "http://127.0.0.1:8000/monitor");
        assert_eq!(config.collector_url, "http://127.0.0.1:8000/post_data");
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_url_validation() {
        let result = HttpConnector::new(HttpConfig::new("not-a-url", "http://valid.url"));
        assert!(matches!(result, Err(ConnectorError::InvalidUrl(url)) if url == "not-a-url"));

        let result = HttpConnector::new(HttpConfig::new("http://valid.url", "ftp://valid.url"));
        assert!(result.is_err());

        let result = HttpConnector::new(HttpConfig::new("https://valid.url", "http://valid.url"));
        assert!(result.is_ok());
    }

    #[test]
    fn notify_sends_query_parameters() {
        let (base, requests) = stub_server(200);
        let config = HttpConfig::new(format!("{}/monitor", base), format!("{}/post_data", base));
        let mut http = HttpConnector::new(config).unwrap();

        let reading = reading();
        http.notify(&Measurement::new(&reading, "Sensehat")).unwrap();

        let request = requests.recv().unwrap();
        let request_line = request.lines().next().unwrap();
        assert!(request_line.starts_with("GET /monitor?"));
        for pair in [
            "temperature=23.5",
            "humidity=48.0",
            "heat_index=23.5",
            "pressure=1013.25",
            "sensor=Sensehat",
        ] {
            assert!(request_line.contains(pair), "{} missing from {}", pair, request_line);
        }
        assert_eq!(http.stats().messages_sent, 1);
    }

    #[test]
    fn persist_posts_form_body() {
        let (base, requests) = stub_server(200);
        let config = HttpConfig::new(format!("{}/monitor", base), format!("{}/post_data", base));
        let mut http = HttpConnector::new(config).unwrap();

        let reading = reading();
        http.persist(&Measurement::new(&reading, "Sensehat")).unwrap();

        let request = requests.recv().unwrap();
        assert!(request.starts_with("POST /post_data "));
        assert!(request
            .to_ascii_lowercase()
            .contains("content-type: application/x-www-form-urlencoded"));
        let body = request.rsplit("\r\n").next().unwrap();
        assert!(body.starts_with(
            "temperature=23.5&humidity=48.0&heat_index=23.5&pressure=1013.25&time="
        ));
        assert!(body.ends_with("&sensor=Sensehat"));
    }

    #[test]
    fn error_status_is_reported() {
        let (base, _requests) = stub_server(500);
        let config = HttpConfig::new(format!("{}/monitor", base), format!("{}/post_data", base));
        let mut http = HttpConnector::new(config).unwrap();

        let reading = reading();
        let err = http.notify(&Measurement::new(&reading, "Sensehat")).unwrap_err();
        assert!(matches!(err, ConnectorError::Status { status: 500, .. }));
        assert_eq!(http.stats().messages_failed, 1);
        assert!(http.stats().last_error.is_some());
    }

    #[test]
    fn unreachable_endpoint_is_a_transport_error() {
        // Grab a free port, then close it so nothing listens there
        let port = TcpListener::bind("127.0.0.1:0").unwrap().local_addr().unwrap().port();
        let base = format!("http://127.0.0.1:{}", port);
        let config = HttpConfig::new(format!("{}/monitor", base), format!("{}/post_data", base))
            .timeout_secs(1);
        let mut http = HttpConnector::new(config).unwrap();

        let reading = reading();
        let err = http.persist(&Measurement::new(&reading, "Sensehat")).unwrap_err();
        assert!(matches!(err, ConnectorError::Transport { .. }));
    }

    #[test]
    fn silent_endpoint_times_out() {
        // Accept the connection but never answer
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let base = format!("http://{}", listener.local_addr().unwrap());
        thread::spawn(move || {
            let (_stream, _) = listener.accept().unwrap();
            thread::sleep(Duration::from_secs(5));
        });

        let config = HttpConfig::new(format!("{}/monitor", base), format!("{}/post_data", base))
            .timeout_secs(1);
        let mut http = HttpConnector::new(config).unwrap();

        let reading = reading();
        let started = Instant::now();
        let err = http.notify(&Measurement::new(&reading, "Sensehat")).unwrap_err();
        let elapsed = started.elapsed();

        assert!(matches!(err, ConnectorError::Transport { .. }));
        assert!(elapsed >= Duration::from_millis(900), "returned after {:?}", elapsed);
        assert!(elapsed < Duration::from_secs(4), "returned after {:?}", elapsed);
    }
}
