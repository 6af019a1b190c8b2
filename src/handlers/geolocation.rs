use crate::handlers::probe::failure_message;
use crate::models::geo::{GeoApiResponse, IpLocationOutcome, IpLocationResult};
use crate::models::probe::format_response_time;
use crate::transport::HttpTransport;
use crate::validation::ipv4::is_valid_ipv4;
use reqwest::Method;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, warn};

/// Fields requested from the provider, in ip-api.com naming.
pub const GEO_FIELDS: &str =
    "status,message,country,countryCode,region,regionName,city,zip,lat,lon,timezone,isp,org,as,query";

/// # IP Geolocation Service
///
/// Resolves an IPv4 literal to an approximate location through an
/// ip-api.com compatible provider. Invalid input never reaches the
/// network. Each lookup is a single fresh request: no caching, no rate
/// limiting, no retries.
#[derive(Clone)]
pub struct GeolocationService {
    transport: Arc<dyn HttpTransport>,
    base_url: String,
}

impl GeolocationService {
    pub fn new(transport: Arc<dyn HttpTransport>, base_url: impl Into<String>) -> Self {
        Self {
            transport,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn lookup_url(&self, ip: &str) -> String {
        format!("{}/json/{}?fields={}", self.base_url, ip, GEO_FIELDS)
    }

    pub async fn get_ip_location(&self, ip: Option<&str>) -> IpLocationResult {
        let outcome = match ip {
            Some(raw) if is_valid_ipv4(Some(raw)) => self.query_provider(raw.trim()).await,
            _ => IpLocationOutcome::Error {
                message: "Invalid IP address format".to_string(),
            },
        };
        IpLocationResult::new(ip, outcome)
    }

    async fn query_provider(&self, ip: &str) -> IpLocationOutcome {
        let url = self.lookup_url(ip);
        let started = Instant::now();

        let response = match self.transport.execute(Method::GET, &url).await {
            Ok(response) => response,
            Err(err) => {
                warn!(ip, error = %err, "geolocation request failed");
                return IpLocationOutcome::Error {
                    message: failure_message(&err, "Connection failed: "),
                };
            }
        };
        let elapsed = started.elapsed().as_millis();

        let payload: GeoApiResponse = match serde_json::from_str(&response.body) {
            Ok(payload) => payload,
            Err(err) => {
                warn!(ip, error = %err, "geolocation payload could not be parsed");
                return IpLocationOutcome::Error {
                    message: format!("Unexpected error: {err}"),
                };
            }
        };

        if payload.is_success() {
            debug!(
                ip,
                elapsed_ms = elapsed as u64,
                country = %payload.country,
                "geolocation resolved"
            );
            IpLocationOutcome::Success {
                response_time: format_response_time(elapsed),
                location: payload.location(),
                isp: payload.isp_info(),
                message: "IP location retrieved successfully".to_string(),
            }
        } else {
            debug!(ip, provider_status = %payload.status, "geolocation provider declined");
            IpLocationOutcome::Error {
                message: payload
                    .message
                    .unwrap_or_else(|| "Failed to get location data".to_string()),
            }
        }
    }
}
