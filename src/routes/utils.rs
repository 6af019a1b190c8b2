use crate::config::AppContext;
use crate::handlers::utility::{
    self, DEFAULT_RANDOM_COUNT, current_time, decode_base64, encode_base64,
    generate_random_data, is_valid_random_count, system_info, validate_email,
};
use crate::models::request::{
    CountQuery, EmailRequest, EncodedRequest, TextRequest, TimezoneQuery,
};
use actix_web::{HttpResponse, Responder, get, post, web};
use serde_json::json;

/// Host and runtime facts: zone, OS, CPU count and memory in MB.
#[utoipa::path(
    get,
    path = "/utils/system-info",
    responses((status = 200, description = "System information")),
    tag = "Utilities"
)]
#[get("/system-info")]
pub async fn get_system_info(context: web::Data<AppContext>) -> impl Responder {
    HttpResponse::Ok().json(system_info(context.version))
}

/// # Random Data Endpoint
///
/// ## Responses
/// - **200 OK**: `count` numbers and strings plus one boolean and one double
/// - **400 Bad Request**: `count` outside 1..=100
///
/// ```json
/// { "error": "Count must be between 1 and 100", "provided": 0 }
/// ```
#[utoipa::path(
    get,
    path = "/utils/random-data",
    params(CountQuery),
    responses(
        (status = 200, description = "Random values"),
        (status = 400, description = "Count must be between 1 and 100")
    ),
    tag = "Utilities"
)]
#[get("/random-data")]
pub async fn random_data(query: web::Query<CountQuery>) -> impl Responder {
    let count = query.count.unwrap_or(DEFAULT_RANDOM_COUNT);
    if !is_valid_random_count(count) {
        return HttpResponse::BadRequest().json(json!({
            "error": "Count must be between 1 and 100",
            "provided": count
        }));
    }
    HttpResponse::Ok().json(generate_random_data(count as usize))
}

/// Checks an address against the email pattern. Always 200; see `valid`.
#[utoipa::path(
    get,
    path = "/utils/validate-email",
    params(EmailRequest),
    responses((status = 200, description = "Validation verdict")),
    tag = "Utilities"
)]
#[get("/validate-email")]
pub async fn validate_email_query(query: web::Query<EmailRequest>) -> impl Responder {
    HttpResponse::Ok().json(validate_email(query.email.as_deref()))
}

#[utoipa::path(
    post,
    path = "/utils/validate-email",
    request_body = EmailRequest,
    responses((status = 200, description = "Validation verdict")),
    tag = "Utilities"
)]
#[post("/validate-email")]
pub async fn validate_email_body(body: web::Json<EmailRequest>) -> impl Responder {
    HttpResponse::Ok().json(validate_email(body.email.as_deref()))
}

#[utoipa::path(
    get,
    path = "/utils/encode-base64",
    params(TextRequest),
    responses((status = 200, description = "Standard base64 with padding")),
    tag = "Utilities"
)]
#[get("/encode-base64")]
pub async fn encode_base64_query(query: web::Query<TextRequest>) -> impl Responder {
    HttpResponse::Ok().json(encode_base64(query.text.as_deref()))
}

#[utoipa::path(
    post,
    path = "/utils/encode-base64",
    request_body = TextRequest,
    responses((status = 200, description = "Standard base64 with padding")),
    tag = "Utilities"
)]
#[post("/encode-base64")]
pub async fn encode_base64_body(body: web::Json<TextRequest>) -> impl Responder {
    HttpResponse::Ok().json(encode_base64(body.text.as_deref()))
}

/// Decodes standard base64, padding optional. Bad input is reported with
/// `success: false`, never as an HTTP error.
#[utoipa::path(
    get,
    path = "/utils/decode-base64",
    params(EncodedRequest),
    responses((status = 200, description = "Decoded text or decoding error")),
    tag = "Utilities"
)]
#[get("/decode-base64")]
pub async fn decode_base64_query(query: web::Query<EncodedRequest>) -> impl Responder {
    HttpResponse::Ok().json(decode_base64(query.encoded.as_deref()))
}

#[utoipa::path(
    post,
    path = "/utils/decode-base64",
    request_body = EncodedRequest,
    responses((status = 200, description = "Decoded text or decoding error")),
    tag = "Utilities"
)]
#[post("/decode-base64")]
pub async fn decode_base64_body(body: web::Json<EncodedRequest>) -> impl Responder {
    HttpResponse::Ok().json(decode_base64(body.encoded.as_deref()))
}

/// Current time in an IANA zone, or in the host zone when none is given.
#[utoipa::path(
    get,
    path = "/utils/current-time",
    params(TimezoneQuery),
    responses((status = 200, description = "Zoned time or unknown zone error")),
    tag = "Utilities"
)]
#[get("/current-time")]
pub async fn get_current_time(query: web::Query<TimezoneQuery>) -> impl Responder {
    HttpResponse::Ok().json(current_time(query.timezone.as_deref()))
}

#[utoipa::path(
    get,
    path = "/utils/help",
    responses((status = 200, description = "Static index of utility endpoints")),
    tag = "Utilities"
)]
#[get("/help")]
pub async fn help() -> impl Responder {
    HttpResponse::Ok().json(json!({
        "message": "Available utility endpoints",
        "endpoints": {
            "system-info": {
                "method": "GET",
                "path": "/utils/system-info",
                "description": "Get system information"
            },
            "random-data": {
                "method": "GET",
                "path": "/utils/random-data?count=10",
                "description": format!(
                    "Generate random data (count: {}-{})",
                    utility::MIN_RANDOM_COUNT,
                    utility::MAX_RANDOM_COUNT
                )
            },
            "validate-email": {
                "method": "GET/POST",
                "path": "/utils/validate-email?email=test@example.com",
                "description": "Validate email format"
            },
            "encode-base64": {
                "method": "GET/POST",
                "path": "/utils/encode-base64?text=hello",
                "description": "Encode text to Base64"
            },
            "decode-base64": {
                "method": "GET/POST",
                "path": "/utils/decode-base64?encoded=aGVsbG8=",
                "description": "Decode Base64 to text"
            },
            "current-time": {
                "method": "GET",
                "path": "/utils/current-time?timezone=UTC",
                "description": "Get current time in specified timezone"
            }
        },
        "examples": {
            "POST_email_validation": {
                "url": "/utils/validate-email",
                "body": r#"{ "email": "user@example.com" }"#
            },
            "POST_base64_encode": {
                "url": "/utils/encode-base64",
                "body": r#"{ "text": "Hello World" }"#
            }
        }
    }))
}

/// Registers the utility endpoints. Mounted under `/utils`.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(get_system_info)
        .service(random_data)
        .service(validate_email_query)
        .service(validate_email_body)
        .service(encode_base64_query)
        .service(encode_base64_body)
        .service(decode_base64_query)
        .service(decode_base64_body)
        .service(get_current_time)
        .service(help);
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, test};
    use chrono::Utc;
    use serde_json::Value;

    async fn create_test_app() -> impl actix_web::dev::Service<
        actix_http::Request,
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
    > {
        test::init_service(
            App::new()
                .app_data(web::Data::new(AppContext::new(Utc::now())))
                .service(web::scope("/utils").configure(configure_routes)),
        )
        .await
    }

    async fn get_json(uri: &str) -> (u16, Value) {
        let app = create_test_app().await;
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status().as_u16();
        let body = test::read_body(resp).await;
        (status, serde_json::from_slice(&body).unwrap())
    }

    async fn post_json(uri: &str, payload: Value) -> (u16, Value) {
        let app = create_test_app().await;
        let req = test::TestRequest::post()
            .uri(uri)
            .set_json(payload)
            .to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status().as_u16();
        let body = test::read_body(resp).await;
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[actix_web::test]
    async fn test_random_data_default_count() {
        let (status, body) = get_json("/utils/random-data").await;
        assert_eq!(status, 200);
        assert_eq!(body["count"], 5);
        assert_eq!(body["randomNumbers"].as_array().unwrap().len(), 5);
        assert_eq!(body["randomStrings"].as_array().unwrap().len(), 5);
    }

    #[actix_web::test]
    async fn test_random_data_bounds() {
        for count in [1, 100] {
            let (status, body) = get_json(&format!("/utils/random-data?count={count}")).await;
            assert_eq!(status, 200);
            assert_eq!(body["randomNumbers"].as_array().unwrap().len(), count);
        }
    }

    #[actix_web::test]
    async fn test_random_data_out_of_range_is_rejected() {
        for count in [0, 101, -3] {
            let (status, body) = get_json(&format!("/utils/random-data?count={count}")).await;
            assert_eq!(status, 400);
            assert_eq!(body["error"], "Count must be between 1 and 100");
            assert_eq!(body["provided"], count);
        }
    }

    #[actix_web::test]
    async fn test_validate_email_get_and_post() {
        let (status, body) = get_json("/utils/validate-email?email=user@example.com").await;
        assert_eq!(status, 200);
        assert_eq!(body["valid"], true);
        assert_eq!(body["domain"], "example.com");
        assert_eq!(body["localPart"], "user");

        let (status, body) = post_json("/utils/validate-email", json!({ "email": "bad" })).await;
        assert_eq!(status, 200);
        assert_eq!(body["valid"], false);
        assert_eq!(body["reason"], "Invalid email format");
    }

    #[actix_web::test]
    async fn test_validate_email_without_address() {
        let (status, body) = post_json("/utils/validate-email", json!({})).await;
        assert_eq!(status, 200);
        assert_eq!(body["valid"], false);
        assert_eq!(body["reason"], "Email is empty or null");
    }

    #[actix_web::test]
    async fn test_encode_then_decode_over_http() {
        let (status, body) = get_json("/utils/encode-base64?text=hello").await;
        assert_eq!(status, 200);
        assert_eq!(body["encoded"], "aGVsbG8=");
        assert_eq!(body["originalLength"], 5);
        assert_eq!(body["encodedLength"], 8);

        let (status, body) =
            post_json("/utils/decode-base64", json!({ "encoded": "aGVsbG8" })).await;
        assert_eq!(status, 200);
        assert_eq!(body["success"], true);
        assert_eq!(body["decoded"], "hello");
    }

    #[actix_web::test]
    async fn test_decode_invalid_input_is_soft_failure() {
        let (status, body) =
            post_json("/utils/decode-base64", json!({ "encoded": "not-valid-base64!!" })).await;
        assert_eq!(status, 200);
        assert_eq!(body["success"], false);
        assert!(body["decoded"].is_null());
        assert!(
            body["error"]
                .as_str()
                .unwrap()
                .starts_with("Invalid Base64 string: ")
        );
    }

    #[actix_web::test]
    async fn test_encode_null_text() {
        let (status, body) = post_json("/utils/encode-base64", json!({ "text": null })).await;
        assert_eq!(status, 200);
        assert!(body["encoded"].is_null());
        assert_eq!(body["error"], "Input is null");
    }

    #[actix_web::test]
    async fn test_current_time_known_and_unknown_zone() {
        let (status, body) = get_json("/utils/current-time?timezone=UTC").await;
        assert_eq!(status, 200);
        assert_eq!(body["success"], true);
        assert_eq!(body["timezone"], "UTC");

        let (status, body) = get_json("/utils/current-time?timezone=Mars/Olympus").await;
        assert_eq!(status, 200);
        assert_eq!(body["success"], false);
        assert_eq!(body["availableTimezones"].as_array().unwrap().len(), 10);
    }

    #[actix_web::test]
    async fn test_system_info_reports_version() {
        let (status, body) = get_json("/utils/system-info").await;
        assert_eq!(status, 200);
        assert_eq!(body["serviceVersion"], env!("CARGO_PKG_VERSION"));
        assert!(body["totalMemory"].as_str().unwrap().ends_with(" MB"));
        assert!(body["availableProcessors"].as_u64().unwrap() >= 1);
    }

    #[actix_web::test]
    async fn test_help_lists_every_utility() {
        let (status, body) = get_json("/utils/help").await;
        assert_eq!(status, 200);
        let endpoints = body["endpoints"].as_object().unwrap();
        for name in [
            "system-info",
            "random-data",
            "validate-email",
            "encode-base64",
            "decode-base64",
            "current-time",
        ] {
            assert!(endpoints.contains_key(name), "missing {name}");
        }
    }
}
