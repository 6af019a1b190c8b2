use crate::config::AppContext;
use crate::handlers::utility::{MemorySnapshot, available_processors, format_mb, round_two_places};
use crate::models::basic::{Echo, Greeting, MemoryUsage, RandomValues, StatusReport};
use crate::models::request::NameQuery;
use actix_web::{HttpResponse, Responder, get, web};
use chrono::Utc;
use rand::Rng;
use serde_json::json;

/// Landing page with the service version and where to go next.
#[utoipa::path(
    get,
    path = "/",
    responses((status = 200, description = "Welcome message and endpoint index")),
    tag = "Playground"
)]
#[get("/")]
pub async fn home(context: web::Data<AppContext>) -> impl Responder {
    HttpResponse::Ok().json(json!({
        "message": "Welcome to the API Playground!",
        "timestamp": Utc::now().to_rfc3339(),
        "version": context.version,
        "endpoints": {
            "greeting": "/greeting",
            "status": "/status",
            "api": "/api/*",
            "utils": "/utils/*",
            "docs": "/swagger-ui/"
        },
        "description": "A playground service with API ping, IP geolocation, utilities, and more!"
    }))
}

/// # Greeting Endpoint
///
/// `name` defaults to `World`; any other name sets `personalized`.
#[utoipa::path(
    get,
    path = "/greeting",
    params(NameQuery),
    responses((status = 200, description = "Greeting")),
    tag = "Playground"
)]
#[get("/greeting")]
pub async fn greeting(query: web::Query<NameQuery>) -> impl Responder {
    let name = query.name.as_deref().unwrap_or("World");
    HttpResponse::Ok().json(Greeting::for_name(name))
}

/// # Status Endpoint
///
/// Uptime since the process started, host memory in MB and CPU count.
///
/// ## Example Response
/// ```json
/// {
///   "status": "UP",
///   "timestamp": "2024-03-10T15:30:45.123456789+00:00",
///   "uptimeMs": 81234,
///   "memory": { "total": "15890 MB", "free": "9120 MB", "used": "6770 MB" },
///   "processors": 8
/// }
/// ```
#[utoipa::path(
    get,
    path = "/status",
    responses((status = 200, description = "Runtime status")),
    tag = "Playground"
)]
#[get("/status")]
pub async fn status(context: web::Data<AppContext>) -> impl Responder {
    let now = Utc::now();
    let memory = MemorySnapshot::capture();

    HttpResponse::Ok().json(StatusReport {
        status: "UP".to_string(),
        timestamp: now.to_rfc3339(),
        uptime_ms: context.uptime_ms(now),
        memory: MemoryUsage {
            total: format_mb(memory.total_mb),
            free: format_mb(memory.free_mb),
            used: format_mb(memory.used_mb),
        },
        processors: available_processors(),
    })
}

#[utoipa::path(
    get,
    path = "/echo/{message}",
    params(("message" = String, Path, description = "Text to echo back")),
    responses((status = 200, description = "Message and its transformations")),
    tag = "Playground"
)]
#[get("/echo/{message}")]
pub async fn echo(message: web::Path<String>) -> impl Responder {
    HttpResponse::Ok().json(Echo::of(&message))
}

#[utoipa::path(
    get,
    path = "/random",
    responses((status = 200, description = "Random int, double and boolean")),
    tag = "Playground"
)]
#[get("/random")]
pub async fn random() -> impl Responder {
    let mut rng = rand::rng();
    HttpResponse::Ok().json(RandomValues {
        random_int: rng.random_range(0..1000),
        random_double: round_two_places(rng.random::<f64>()),
        random_boolean: rng.random_bool(0.5),
        timestamp: Utc::now().to_rfc3339(),
    })
}

#[utoipa::path(
    get,
    path = "/help",
    responses((status = 200, description = "Static index of every endpoint group")),
    tag = "Playground"
)]
#[get("/help")]
pub async fn help() -> impl Responder {
    HttpResponse::Ok().json(json!({
        "message": "API Playground - Available Endpoints",
        "basic_endpoints": {
            "home": "GET /",
            "greeting": "GET /greeting?name=YourName",
            "status": "GET /status",
            "echo": "GET /echo/{message}",
            "random": "GET /random",
            "help": "GET /help",
            "health": "GET /health"
        },
        "api_endpoints": {
            "ping": "GET /api/ping?url=https://example.com",
            "health_check": "GET /api/health-check?url=https://example.com",
            "endpoint_info": "GET /api/endpoint-info?url=https://example.com",
            "ip_location": "GET /api/ip-location?ip=8.8.8.8",
            "test_endpoints": "GET /api/test-endpoints"
        },
        "utility_endpoints": {
            "system_info": "GET /utils/system-info",
            "random_data": "GET /utils/random-data?count=5",
            "validate_email": "GET /utils/validate-email?email=test@example.com",
            "encode_base64": "GET /utils/encode-base64?text=hello",
            "decode_base64": "GET /utils/decode-base64?encoded=aGVsbG8=",
            "current_time": "GET /utils/current-time?timezone=UTC",
            "help": "GET /utils/help"
        },
        "documentation": {
            "swagger_ui": "/swagger-ui/",
            "api_docs": "/api-docs/openapi.json"
        }
    }))
}

/// Registers the root-level playground endpoints.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(home)
        .service(greeting)
        .service(status)
        .service(echo)
        .service(random)
        .service(help);
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, test};
    use chrono::Duration;
    use serde_json::Value;

    async fn get_json(context: AppContext, uri: &str) -> Value {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(context))
                .configure(configure_routes),
        )
        .await;
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success(), "{uri} -> {}", resp.status());
        let body = test::read_body(resp).await;
        serde_json::from_slice(&body).unwrap()
    }

    fn fresh_context() -> AppContext {
        AppContext::new(Utc::now())
    }

    #[actix_web::test]
    async fn test_home_reports_version() {
        let body = get_json(fresh_context(), "/").await;
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
        assert_eq!(body["endpoints"]["utils"], "/utils/*");
    }

    #[actix_web::test]
    async fn test_greeting_default_and_named() {
        let body = get_json(fresh_context(), "/greeting").await;
        assert_eq!(body["message"], "Hello World!");
        assert_eq!(body["personalized"], false);

        let body = get_json(fresh_context(), "/greeting?name=Ada").await;
        assert_eq!(body["message"], "Hello Ada!");
        assert_eq!(body["personalized"], true);
    }

    #[actix_web::test]
    async fn test_status_uptime_comes_from_context() {
        let context = AppContext::new(Utc::now() - Duration::seconds(90));
        let body = get_json(context, "/status").await;

        assert_eq!(body["status"], "UP");
        assert!(body["uptimeMs"].as_i64().unwrap() >= 90_000);
        assert!(body["memory"]["total"].as_str().unwrap().ends_with(" MB"));
        assert!(body["processors"].as_u64().unwrap() >= 1);
    }

    #[actix_web::test]
    async fn test_echo_transforms_message() {
        let body = get_json(fresh_context(), "/echo/Hello").await;
        assert_eq!(body["original"], "Hello");
        assert_eq!(body["reversed"], "olleH");
        assert_eq!(body["uppercase"], "HELLO");
        assert_eq!(body["lowercase"], "hello");
        assert_eq!(body["length"], 5);
    }

    #[actix_web::test]
    async fn test_random_values_in_range() {
        let body = get_json(fresh_context(), "/random").await;
        assert!(body["randomInt"].as_u64().unwrap() < 1000);
        let double = body["randomDouble"].as_f64().unwrap();
        assert!((0.0..=1.0).contains(&double));
        assert!(body["randomBoolean"].is_boolean());
    }

    #[actix_web::test]
    async fn test_help_is_static_index() {
        let body = get_json(fresh_context(), "/help").await;
        assert_eq!(body["api_endpoints"]["ip_location"], "GET /api/ip-location?ip=8.8.8.8");
        assert_eq!(body["documentation"]["swagger_ui"], "/swagger-ui/");
    }
}
