use serde::Serialize;

#[derive(Serialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EmailValidation {
    pub email: Option<String>,
    pub timestamp: String,
    pub valid: bool,
    pub reason: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub local_part: Option<String>,
}

#[derive(Serialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Base64Encoding {
    pub original_text: Option<String>,
    pub timestamp: String,
    pub encoded: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_length: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encoded_length: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Serialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Base64Decoding {
    pub encoded_text: Option<String>,
    pub timestamp: String,
    pub decoded: Option<String>,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Serialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RandomData {
    pub timestamp: String,
    pub count: usize,
    pub random_numbers: Vec<u32>,
    pub random_strings: Vec<String>,
    pub random_boolean: bool,
    pub random_double: f64,
}

/// Current time in a zone, or the reason the zone was rejected.
///
/// Both variants carry a `success` flag so the JSON is discriminated the
/// same way as the base64 decoder.
#[derive(Serialize, Debug, PartialEq)]
#[serde(untagged)]
pub enum CurrentTime {
    Resolved(ZonedTime),
    UnknownZone(UnknownZone),
}

#[derive(Serialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ZonedTime {
    pub timestamp: String,
    pub timezone: String,
    pub date_time: String,
    pub formatted: String,
    pub date: String,
    pub time: String,
    pub day_of_week: String,
    pub day_of_year: u32,
    pub success: bool,
}

#[derive(Serialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UnknownZone {
    pub timestamp: String,
    pub error: String,
    pub success: bool,
    pub available_timezones: Vec<String>,
}

#[derive(Serialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SystemInfo {
    pub timestamp: String,
    pub timezone: String,
    pub service_version: String,
    pub os_name: String,
    pub os_version: String,
    pub os_arch: String,
    pub available_processors: usize,
    pub total_memory: String,
    pub used_memory: String,
    pub free_memory: String,
}
