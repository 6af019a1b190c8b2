use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

/// `url` of the probe endpoints, as query string or JSON body.
#[derive(Deserialize, ToSchema, IntoParams, Debug, Default)]
#[into_params(parameter_in = Query)]
pub struct UrlRequest {
    pub url: Option<String>,
}

/// `ip` of `/api/ip-location`, as query string or JSON body.
#[derive(Deserialize, ToSchema, IntoParams, Debug, Default)]
#[into_params(parameter_in = Query)]
pub struct IpRequest {
    pub ip: Option<String>,
}

/// `email` of `/utils/validate-email`.
#[derive(Deserialize, ToSchema, IntoParams, Debug, Default)]
#[into_params(parameter_in = Query)]
pub struct EmailRequest {
    pub email: Option<String>,
}

/// `text` of `/utils/encode-base64`.
#[derive(Deserialize, ToSchema, IntoParams, Debug, Default)]
#[into_params(parameter_in = Query)]
pub struct TextRequest {
    pub text: Option<String>,
}

/// `encoded` of `/utils/decode-base64`.
#[derive(Deserialize, ToSchema, IntoParams, Debug, Default)]
#[into_params(parameter_in = Query)]
pub struct EncodedRequest {
    pub encoded: Option<String>,
}

#[derive(Deserialize, IntoParams, Debug, Default)]
#[into_params(parameter_in = Query)]
pub struct CountQuery {
    /// Number of values to generate, 1 to 100. Defaults to 5.
    pub count: Option<i64>,
}

#[derive(Deserialize, IntoParams, Debug, Default)]
#[into_params(parameter_in = Query)]
pub struct TimezoneQuery {
    /// IANA zone identifier such as `Europe/Paris`.
    pub timezone: Option<String>,
}

#[derive(Deserialize, IntoParams, Debug, Default)]
#[into_params(parameter_in = Query)]
pub struct NameQuery {
    pub name: Option<String>,
}

/// Returns the trimmed value when it is present and not blank.
pub fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
