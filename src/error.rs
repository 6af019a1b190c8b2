//! Error types shared by the outbound transport and the configuration layer.

use thiserror::Error;

/// Outcome classes of a failed outbound request.
///
/// Every probe and geolocation lookup maps these variants onto an in-body
/// failure record. None of them ever escapes a request handler.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// The remote answered with a 4xx or 5xx status.
    #[error("{status} {reason}")]
    Status {
        /// Numeric HTTP status code.
        status: u16,
        /// Canonical reason phrase, empty when unknown.
        reason: String,
    },

    /// DNS failure, refused connection, timeout or I/O error on the wire.
    #[error("{0}")]
    Connection(String),

    /// Anything else, e.g. a malformed URL or an unsupported scheme.
    #[error("{0}")]
    Unexpected(String),
}

impl TransportError {
    /// Builds a [`TransportError::Status`] from a numeric code.
    pub fn status(code: u16) -> Self {
        let reason = reqwest::StatusCode::from_u16(code)
            .ok()
            .and_then(|s| s.canonical_reason())
            .unwrap_or_default()
            .to_string();
        Self::Status {
            status: code,
            reason,
        }
    }

    /// Status code carried by an HTTP error, if any.
    pub fn http_status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            return Self::status(status.as_u16());
        }
        let detail = error_chain(&err);
        if err.is_connect() || err.is_timeout() || err.is_request() || err.is_body() {
            Self::Connection(detail)
        } else {
            Self::Unexpected(detail)
        }
    }
}

/// Joins an error and its `source()` chain with `": "`, skipping causes
/// already spelled out by the previous level.
pub(crate) fn error_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !text.is_empty() && !message.ends_with(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}

/// Startup configuration failures.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{key} must be a non-negative integer, got {value:?}")]
    InvalidNumber { key: String, value: String },
}
