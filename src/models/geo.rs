use chrono::Utc;
use serde::{Deserialize, Deserializer, Serialize};

/// # IP Location Result
///
/// Response record of `/api/ip-location`. `ip` echoes the caller's input
/// verbatim, `null` when none was supplied.
///
/// ## Example JSON
/// ```json
/// {
///   "ip": "8.8.8.8",
///   "timestamp": "2024-03-10T15:30:45.123456789+00:00",
///   "status": "SUCCESS",
///   "responseTime": "48ms",
///   "location": { "country": "United States", "city": "Mountain View", "...": "..." },
///   "isp": { "isp": "Google LLC", "organization": "Google Public DNS", "as": "AS15169 Google LLC" },
///   "message": "IP location retrieved successfully"
/// }
/// ```
#[derive(Serialize, Debug, PartialEq)]
pub struct IpLocationResult {
    pub ip: Option<String>,
    pub timestamp: String,
    #[serde(flatten)]
    pub outcome: IpLocationOutcome,
}

impl IpLocationResult {
    pub fn new(ip: Option<&str>, outcome: IpLocationOutcome) -> Self {
        Self {
            ip: ip.map(str::to_string),
            timestamp: Utc::now().to_rfc3339(),
            outcome,
        }
    }
}

#[derive(Serialize, Debug, PartialEq)]
#[serde(tag = "status", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IpLocationOutcome {
    #[serde(rename_all = "camelCase")]
    Success {
        response_time: String,
        location: Location,
        isp: IspInfo,
        message: String,
    },
    Error { message: String },
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub country: String,
    pub country_code: String,
    pub region: String,
    pub region_name: String,
    pub city: String,
    pub zip_code: String,
    pub latitude: f64,
    pub longitude: f64,
    pub timezone: String,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct IspInfo {
    pub isp: String,
    pub organization: String,
    #[serde(rename = "as")]
    pub as_name: String,
}

/// Payload returned by the geolocation provider (ip-api.com field names).
///
/// Absent or `null` fields deserialize to empty strings or `0.0`.
#[derive(Deserialize, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct GeoApiResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,
    pub message: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub country: String,
    #[serde(deserialize_with = "null_as_default")]
    pub country_code: String,
    #[serde(deserialize_with = "null_as_default")]
    pub region: String,
    #[serde(deserialize_with = "null_as_default")]
    pub region_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub city: String,
    #[serde(deserialize_with = "null_as_default")]
    pub zip: String,
    #[serde(deserialize_with = "null_as_default")]
    pub lat: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub lon: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub timezone: String,
    #[serde(deserialize_with = "null_as_default")]
    pub isp: String,
    #[serde(deserialize_with = "null_as_default")]
    pub org: String,
    #[serde(rename = "as", deserialize_with = "null_as_default")]
    pub as_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub query: String,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl GeoApiResponse {
    pub fn is_success(&self) -> bool {
        self.status == "success"
    }

    pub fn location(&self) -> Location {
        Location {
            country: self.country.clone(),
            country_code: self.country_code.clone(),
            region: self.region.clone(),
            region_name: self.region_name.clone(),
            city: self.city.clone(),
            zip_code: self.zip.clone(),
            latitude: self.lat,
            longitude: self.lon,
            timezone: self.timezone.clone(),
        }
    }

    pub fn isp_info(&self) -> IspInfo {
        IspInfo {
            isp: self.isp.clone(),
            organization: self.org.clone(),
            as_name: self.as_name.clone(),
        }
    }
}
