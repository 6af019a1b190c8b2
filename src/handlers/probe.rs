use crate::error::TransportError;
use crate::models::probe::{
    EndpointInfoOutcome, EndpointInfoResult, HealthCheckOutcome, HealthCheckResult, PingOutcome,
    PingResult, format_response_time,
};
use crate::transport::HttpTransport;
use reqwest::Method;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, warn};

/// # URL Probe Service
///
/// Issues one outbound request per call against a caller-supplied URL and
/// reports the outcome as a record. Failures are classified as
///
/// 1. HTTP error (4xx/5xx): the numeric status is kept
/// 2. transport failure (DNS, refused, timeout)
/// 3. anything else (malformed URL, unsupported scheme)
///
/// No retries are attempted.
#[derive(Clone)]
pub struct ProbeService {
    transport: Arc<dyn HttpTransport>,
}

impl ProbeService {
    pub fn new(transport: Arc<dyn HttpTransport>) -> Self {
        Self { transport }
    }

    /// `GET`s the URL and measures latency and body size.
    pub async fn ping_endpoint(&self, url: &str) -> PingResult {
        let started = Instant::now();
        let outcome = match self.transport.execute(Method::GET, url).await {
            Ok(response) => {
                let elapsed = started.elapsed().as_millis();
                debug!(
                    url,
                    method = "GET",
                    status = response.status,
                    elapsed_ms = elapsed as u64,
                    "probe succeeded"
                );
                PingOutcome::Success {
                    http_status: response.status,
                    response_time: format_response_time(elapsed),
                    response_length: response.body.chars().count(),
                    headers: response.headers,
                    message: "Endpoint is reachable".to_string(),
                }
            }
            Err(err) => {
                warn!(url, method = "GET", error = %err, "probe failed");
                PingOutcome::Error {
                    http_status: err.http_status(),
                    message: failure_message(&err, "Connection failed: "),
                }
            }
        };
        PingResult::new(url, outcome)
    }

    /// `HEAD`s the URL. Same classification as [`ping_endpoint`], labelled
    /// `HEALTHY`/`UNHEALTHY`.
    ///
    /// [`ping_endpoint`]: ProbeService::ping_endpoint
    pub async fn health_check(&self, url: &str) -> HealthCheckResult {
        let started = Instant::now();
        let outcome = match self.transport.execute(Method::HEAD, url).await {
            Ok(response) => {
                let elapsed = started.elapsed().as_millis();
                debug!(
                    url,
                    method = "HEAD",
                    status = response.status,
                    elapsed_ms = elapsed as u64,
                    "health check succeeded"
                );
                HealthCheckOutcome::Healthy {
                    http_status: response.status,
                    response_time: format_response_time(elapsed),
                    message: "Endpoint is healthy".to_string(),
                }
            }
            Err(err) => {
                warn!(url, method = "HEAD", error = %err, "health check failed");
                HealthCheckOutcome::Unhealthy {
                    http_status: err.http_status(),
                    message: failure_message(&err, "Health check failed: "),
                }
            }
        };
        HealthCheckResult::new(url, outcome)
    }

    /// Sends `OPTIONS` and extracts the `Allow` header.
    ///
    /// Failures use the same three classes as the other probes; every
    /// message is prefixed with `Could not retrieve endpoint info: `.
    pub async fn endpoint_info(&self, url: &str) -> EndpointInfoResult {
        let outcome = match self.transport.execute(Method::OPTIONS, url).await {
            Ok(response) => {
                debug!(
                    url,
                    method = "OPTIONS",
                    status = response.status,
                    "endpoint info retrieved"
                );
                let allowed_methods = response.header("allow").map(parse_allow_header);
                EndpointInfoOutcome::Success {
                    http_status: response.status,
                    allowed_methods,
                    headers: response.headers,
                    message: "Endpoint information retrieved".to_string(),
                }
            }
            Err(err) => {
                warn!(url, method = "OPTIONS", error = %err, "endpoint info failed");
                EndpointInfoOutcome::Error {
                    http_status: err.http_status(),
                    message: format!(
                        "Could not retrieve endpoint info: {}",
                        failure_message(&err, "Connection failed: ")
                    ),
                }
            }
        };
        EndpointInfoResult::new(url, outcome)
    }
}

/// Renders a transport failure. `connection_prefix` differs per operation.
pub(crate) fn failure_message(err: &TransportError, connection_prefix: &str) -> String {
    match err {
        TransportError::Status { .. } => format!("HTTP Error: {err}"),
        TransportError::Connection(detail) => format!("{connection_prefix}{detail}"),
        TransportError::Unexpected(detail) => format!("Unexpected error: {detail}"),
    }
}

fn parse_allow_header(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .map(str::to_string)
        .collect()
}
