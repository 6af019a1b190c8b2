use chrono::Utc;
use serde::Serialize;
use std::collections::BTreeMap;

/// Result of `GET` probing a URL (`/api/ping`).
#[derive(Serialize, Debug, PartialEq)]
pub struct PingResult {
    pub url: String,
    pub timestamp: String,
    #[serde(flatten)]
    pub outcome: PingOutcome,
}

#[derive(Serialize, Debug, PartialEq)]
#[serde(tag = "status", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PingOutcome {
    #[serde(rename_all = "camelCase")]
    Success {
        http_status: u16,
        response_time: String,
        response_length: usize,
        headers: BTreeMap<String, String>,
        message: String,
    },
    #[serde(rename_all = "camelCase")]
    Error {
        #[serde(skip_serializing_if = "Option::is_none")]
        http_status: Option<u16>,
        message: String,
    },
}

/// Result of `HEAD` probing a URL (`/api/health-check`).
#[derive(Serialize, Debug, PartialEq)]
pub struct HealthCheckResult {
    pub url: String,
    pub timestamp: String,
    #[serde(flatten)]
    pub outcome: HealthCheckOutcome,
}

#[derive(Serialize, Debug, PartialEq)]
#[serde(tag = "status", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HealthCheckOutcome {
    #[serde(rename_all = "camelCase")]
    Healthy {
        http_status: u16,
        response_time: String,
        message: String,
    },
    #[serde(rename_all = "camelCase")]
    Unhealthy {
        #[serde(skip_serializing_if = "Option::is_none")]
        http_status: Option<u16>,
        message: String,
    },
}

/// Result of `OPTIONS` probing a URL (`/api/endpoint-info`).
#[derive(Serialize, Debug, PartialEq)]
pub struct EndpointInfoResult {
    pub url: String,
    pub timestamp: String,
    #[serde(flatten)]
    pub outcome: EndpointInfoOutcome,
}

#[derive(Serialize, Debug, PartialEq)]
#[serde(tag = "status", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EndpointInfoOutcome {
    #[serde(rename_all = "camelCase")]
    Success {
        http_status: u16,
        allowed_methods: Option<Vec<String>>,
        headers: BTreeMap<String, String>,
        message: String,
    },
    #[serde(rename_all = "camelCase")]
    Error {
        #[serde(skip_serializing_if = "Option::is_none")]
        http_status: Option<u16>,
        message: String,
    },
}

macro_rules! probe_constructor {
    ($ty:ident, $outcome:ident) => {
        impl $ty {
            pub fn new(url: &str, outcome: $outcome) -> Self {
                Self {
                    url: url.to_string(),
                    timestamp: Utc::now().to_rfc3339(),
                    outcome,
                }
            }
        }
    };
}

probe_constructor!(PingResult, PingOutcome);
probe_constructor!(HealthCheckResult, HealthCheckOutcome);
probe_constructor!(EndpointInfoResult, EndpointInfoOutcome);

/// Formats a latency the way every probe record reports it.
pub fn format_response_time(elapsed_ms: u128) -> String {
    format!("{elapsed_ms}ms")
}
