use crate::error::ConfigError;
use crate::logging::{LogFormat, LoggingConfig};
use chrono::{DateTime, Utc};
use std::time::Duration;

pub const DEFAULT_GEOLOCATION_API_URL: &str = "http://ip-api.com";

/// # Application Configuration
///
/// Runtime settings read from the process environment (and a `.env` file
/// when present).
///
/// | Variable | Default |
/// |---|---|
/// | `HOST` | `127.0.0.1` |
/// | `PORT` | `8080` |
/// | `PROBE_CONNECT_TIMEOUT_SECS` | `5` |
/// | `PROBE_REQUEST_TIMEOUT_SECS` | `10` |
/// | `GEOLOCATION_API_URL` | `http://ip-api.com` |
/// | `LOG_FORMAT` | `text` |
/// | `RUST_LOG` | `info` |
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub geolocation_api_url: String,
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            connect_timeout: Duration::from_secs(5),
            request_timeout: Duration::from_secs(10),
            geolocation_api_url: DEFAULT_GEOLOCATION_API_URL.to_string(),
            logging: LoggingConfig::default(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let port = match lookup("PORT") {
            Some(raw) => parse_number::<u16>("PORT", &raw)?,
            None => defaults.port,
        };
        let connect_timeout = match lookup("PROBE_CONNECT_TIMEOUT_SECS") {
            Some(raw) => Duration::from_secs(parse_number("PROBE_CONNECT_TIMEOUT_SECS", &raw)?),
            None => defaults.connect_timeout,
        };
        let request_timeout = match lookup("PROBE_REQUEST_TIMEOUT_SECS") {
            Some(raw) => Duration::from_secs(parse_number("PROBE_REQUEST_TIMEOUT_SECS", &raw)?),
            None => defaults.request_timeout,
        };

        let logging = LoggingConfig {
            format: lookup("LOG_FORMAT")
                .map(|v| LogFormat::parse(&v))
                .unwrap_or_default(),
            level: lookup("RUST_LOG").unwrap_or(defaults.logging.level),
        };

        Ok(Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port,
            connect_timeout,
            request_timeout,
            geolocation_api_url: lookup("GEOLOCATION_API_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.geolocation_api_url),
            logging,
        })
    }
}

fn parse_number<T: std::str::FromStr>(key: &str, raw: &str) -> Result<T, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::InvalidNumber {
        key: key.to_string(),
        value: raw.to_string(),
    })
}

/// # Application Context
///
/// Immutable values captured once at process start and shared with every
/// handler through `web::Data`.
#[derive(Debug, Clone)]
pub struct AppContext {
    pub started_at: DateTime<Utc>,
    pub version: &'static str,
}

impl AppContext {
    pub fn new(started_at: DateTime<Utc>) -> Self {
        Self {
            started_at,
            version: env!("CARGO_PKG_VERSION"),
        }
    }

    pub fn uptime_ms(&self, now: DateTime<Utc>) -> i64 {
        (now - self.started_at).num_milliseconds().max(0)
    }
}
