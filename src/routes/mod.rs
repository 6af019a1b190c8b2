use actix_web::{HttpResponse, web};
use serde_json::json;

/// # Liveness Endpoint
///
/// `GET /health` returns `{"status": "UP", "timestamp": ...}`.
pub mod health;

/// # Playground Endpoints
///
/// Root-level demo routes: `/`, `/greeting`, `/status`, `/echo/{message}`,
/// `/random` and `/help`.
pub mod basic;

/// # Probe and Geolocation Endpoints
///
/// Mounted under `/api`. `url` and `ip` are required; a missing or blank
/// value is rejected with 400 before any outbound request is made.
///
/// ## Responses
/// - **200 OK**: operation ran, inspect the `status` field of the body
/// - **400 Bad Request**: `{ "error": ..., "example": ... }`
pub mod api;

/// # Utility Endpoints
///
/// Mounted under `/utils`: email pattern check, base64 codec, random data,
/// zoned time and host information.
pub mod utils;

/// # Route Configuration
///
/// ## Mounted Services
/// - Liveness and playground endpoints at the root
/// - [`api::configure_routes`] under `/api`
/// - [`utils::configure_routes`] under `/utils`
///
/// ```text
/// GET  /health
/// GET  /api/ping?url=https://httpbin.org/get
/// POST /api/ip-location
/// GET  /utils/current-time?timezone=UTC
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(health::configure_routes)
        .configure(basic::configure_routes)
        .service(web::scope("/api").configure(api::configure_routes))
        .service(web::scope("/utils").configure(utils::configure_routes));
}

/// 400 response for a required parameter that is missing or blank.
pub(crate) fn missing_parameter(error: &str, example: &str) -> HttpResponse {
    HttpResponse::BadRequest().json(json!({
        "error": error,
        "example": example
    }))
}
