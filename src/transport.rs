use crate::error::TransportError;
use async_trait::async_trait;
use reqwest::{Client, Method};
use std::collections::BTreeMap;
use std::time::Duration;

/// A fully read response from a successful (non 4xx/5xx) outbound request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransportResponse {
    pub status: u16,
    /// First value of every header, keyed by lowercase header name.
    pub headers: BTreeMap<String, String>,
    pub body: String,
}

impl TransportResponse {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }
}

/// # Outbound HTTP Transport
///
/// Single-attempt HTTP execution used by the probe and geolocation
/// handlers. A 4xx or 5xx answer is reported as
/// [`TransportError::Status`], never as a successful response.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn execute(&self, method: Method, url: &str)
    -> Result<TransportResponse, TransportError>;
}

/// [`HttpTransport`] backed by a shared `reqwest::Client`.
#[derive(Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new(
        connect_timeout: Duration,
        request_timeout: Duration,
    ) -> Result<Self, TransportError> {
        let client = Client::builder()
            .connect_timeout(connect_timeout)
            .timeout(request_timeout)
            .user_agent(concat!("api-playground/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| TransportError::Unexpected(e.to_string()))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn execute(
        &self,
        method: Method,
        url: &str,
    ) -> Result<TransportResponse, TransportError> {
        let response = self.client.request(method, url).send().await?;

        let status = response.status();
        if status.is_client_error() || status.is_server_error() {
            return Err(TransportError::status(status.as_u16()));
        }

        let mut headers = BTreeMap::new();
        for (name, value) in response.headers() {
            if let Ok(value) = value.to_str() {
                headers
                    .entry(name.as_str().to_string())
                    .or_insert_with(|| value.to_string());
            }
        }

        let body = response.text().await?;

        Ok(TransportResponse {
            status: status.as_u16(),
            headers,
            body,
        })
    }
}
