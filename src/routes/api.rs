use crate::handlers::geolocation::GeolocationService;
use crate::handlers::probe::ProbeService;
use crate::models::request::{IpRequest, UrlRequest, non_blank};
use crate::routes::missing_parameter;
use actix_web::{HttpResponse, Responder, get, post, web};
use serde_json::json;

/// # Ping Endpoint
///
/// Sends a `GET` to `url` and reports reachability, latency, status code,
/// body length and response headers.
///
/// ## Responses
/// - **200 OK**: probe ran. Check the `status` field (`SUCCESS` or `ERROR`);
///   an unreachable or failing target is still a 200.
/// - **400 Bad Request**: `url` missing or blank
#[utoipa::path(
    get,
    path = "/api/ping",
    params(UrlRequest),
    responses(
        (status = 200, description = "Probe result"),
        (status = 400, description = "URL parameter is required")
    ),
    tag = "API Probe"
)]
#[get("/ping")]
pub async fn ping(query: web::Query<UrlRequest>, probe: web::Data<ProbeService>) -> impl Responder {
    let Some(url) = non_blank(query.url.as_deref()) else {
        return missing_parameter(
            "URL parameter is required",
            "/api/ping?url=https://httpbin.org/get",
        );
    };
    HttpResponse::Ok().json(probe.ping_endpoint(url).await)
}

/// Same as `GET /api/ping` with the URL in a JSON body.
///
/// ```json
/// { "url": "https://httpbin.org/get" }
/// ```
#[utoipa::path(
    post,
    path = "/api/ping",
    request_body = UrlRequest,
    responses(
        (status = 200, description = "Probe result"),
        (status = 400, description = "URL is required in request body")
    ),
    tag = "API Probe"
)]
#[post("/ping")]
pub async fn ping_post(
    body: web::Json<UrlRequest>,
    probe: web::Data<ProbeService>,
) -> impl Responder {
    let Some(url) = non_blank(body.url.as_deref()) else {
        return missing_parameter(
            "URL is required in request body",
            r#"{ "url": "https://httpbin.org/get" }"#,
        );
    };
    HttpResponse::Ok().json(probe.ping_endpoint(url).await)
}

/// # Health Check Endpoint
///
/// Sends a `HEAD` to `url`; `status` is `HEALTHY` or `UNHEALTHY`.
#[utoipa::path(
    get,
    path = "/api/health-check",
    params(UrlRequest),
    responses(
        (status = 200, description = "Health check result"),
        (status = 400, description = "URL parameter is required")
    ),
    tag = "API Probe"
)]
#[get("/health-check")]
pub async fn health_check(
    query: web::Query<UrlRequest>,
    probe: web::Data<ProbeService>,
) -> impl Responder {
    let Some(url) = non_blank(query.url.as_deref()) else {
        return missing_parameter(
            "URL parameter is required",
            "/api/health-check?url=https://httpbin.org",
        );
    };
    HttpResponse::Ok().json(probe.health_check(url).await)
}

/// # Endpoint Info
///
/// Sends `OPTIONS` to `url` and reports the methods listed in `Allow`.
#[utoipa::path(
    get,
    path = "/api/endpoint-info",
    params(UrlRequest),
    responses(
        (status = 200, description = "Endpoint capabilities"),
        (status = 400, description = "URL parameter is required")
    ),
    tag = "API Probe"
)]
#[get("/endpoint-info")]
pub async fn endpoint_info(
    query: web::Query<UrlRequest>,
    probe: web::Data<ProbeService>,
) -> impl Responder {
    let Some(url) = non_blank(query.url.as_deref()) else {
        return missing_parameter(
            "URL parameter is required",
            "/api/endpoint-info?url=https://httpbin.org",
        );
    };
    HttpResponse::Ok().json(probe.endpoint_info(url).await)
}

/// # IP Location Endpoint
///
/// Resolves an IPv4 address to country, region, city, coordinates and ISP.
/// A malformed address yields `status: ERROR` with HTTP 200.
#[utoipa::path(
    get,
    path = "/api/ip-location",
    params(IpRequest),
    responses(
        (status = 200, description = "Geolocation result"),
        (status = 400, description = "IP parameter is required")
    ),
    tag = "IP Location"
)]
#[get("/ip-location")]
pub async fn ip_location(
    query: web::Query<IpRequest>,
    geo: web::Data<GeolocationService>,
) -> impl Responder {
    if non_blank(query.ip.as_deref()).is_none() {
        return missing_parameter("IP parameter is required", "/api/ip-location?ip=8.8.8.8");
    }
    HttpResponse::Ok().json(geo.get_ip_location(query.ip.as_deref()).await)
}

#[utoipa::path(
    post,
    path = "/api/ip-location",
    request_body = IpRequest,
    responses(
        (status = 200, description = "Geolocation result"),
        (status = 400, description = "IP is required in request body")
    ),
    tag = "IP Location"
)]
#[post("/ip-location")]
pub async fn ip_location_post(
    body: web::Json<IpRequest>,
    geo: web::Data<GeolocationService>,
) -> impl Responder {
    if non_blank(body.ip.as_deref()).is_none() {
        return missing_parameter("IP is required in request body", r#"{ "ip": "8.8.8.8" }"#);
    }
    HttpResponse::Ok().json(geo.get_ip_location(body.ip.as_deref()).await)
}

/// Public targets worth probing, and sample calls.
#[utoipa::path(
    get,
    path = "/api/test-endpoints",
    responses((status = 200, description = "Static list of sample targets")),
    tag = "API Probe"
)]
#[get("/test-endpoints")]
pub async fn test_endpoints() -> impl Responder {
    HttpResponse::Ok().json(json!({
        "message": "Available test endpoints for API ping and IP location",
        "endpoints": {
            "httpbin": {
                "get": "https://httpbin.org/get",
                "post": "https://httpbin.org/post",
                "status": "https://httpbin.org/status/200",
                "delay": "https://httpbin.org/delay/2"
            },
            "jsonplaceholder": {
                "posts": "https://jsonplaceholder.typicode.com/posts",
                "users": "https://jsonplaceholder.typicode.com/users",
                "comments": "https://jsonplaceholder.typicode.com/comments"
            },
            "github": {
                "api": "https://api.github.com",
                "users": "https://api.github.com/users/octocat"
            },
            "sample_ips": {
                "google_dns": "8.8.8.8",
                "cloudflare_dns": "1.1.1.1",
                "quad9_dns": "9.9.9.9"
            }
        },
        "usage": {
            "ping": "/api/ping?url=https://httpbin.org/get",
            "health": "/api/health-check?url=https://httpbin.org",
            "info": "/api/endpoint-info?url=https://httpbin.org",
            "ip_location": "/api/ip-location?ip=8.8.8.8"
        }
    }))
}

/// Registers the probe and geolocation endpoints. Mounted under `/api`.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(ping)
        .service(ping_post)
        .service(health_check)
        .service(endpoint_info)
        .service(ip_location)
        .service(ip_location_post)
        .service(test_endpoints);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TransportError;
    use crate::transport::{HttpTransport, MockHttpTransport, ReqwestTransport, TransportResponse};
    use actix_web::{App, test};
    use serde_json::Value;
    use std::sync::Arc;
    use std::time::Duration;

    fn silent_transport() -> MockHttpTransport {
        let mut mock = MockHttpTransport::new();
        mock.expect_execute().times(0);
        mock
    }

    async fn create_test_app(
        transport: Arc<dyn HttpTransport>,
    ) -> impl actix_web::dev::Service<
        actix_http::Request,
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
    > {
        test::init_service(
            App::new()
                .app_data(web::Data::new(ProbeService::new(transport.clone())))
                .app_data(web::Data::new(GeolocationService::new(
                    transport,
                    "http://ip-api.com",
                )))
                .service(web::scope("/api").configure(configure_routes)),
        )
        .await
    }

    async fn body_json(resp: actix_web::dev::ServiceResponse) -> Value {
        let body = test::read_body(resp).await;
        serde_json::from_slice(&body).unwrap()
    }

    #[actix_web::test]
    async fn test_ping_without_url_is_rejected() {
        let app = create_test_app(Arc::new(silent_transport())).await;
        let req = test::TestRequest::get().uri("/api/ping").to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 400);

        let body = body_json(resp).await;
        assert_eq!(body["error"], "URL parameter is required");
        assert_eq!(body["example"], "/api/ping?url=https://httpbin.org/get");
    }

    #[actix_web::test]
    async fn test_ping_with_blank_url_is_rejected() {
        let app = create_test_app(Arc::new(silent_transport())).await;
        let req = test::TestRequest::get().uri("/api/ping?url=%20%20").to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 400);
    }

    #[actix_web::test]
    async fn test_ping_post_without_url_is_rejected() {
        let app = create_test_app(Arc::new(silent_transport())).await;
        let req = test::TestRequest::post()
            .uri("/api/ping")
            .set_json(json!({}))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 400);

        let body = body_json(resp).await;
        assert_eq!(body["error"], "URL is required in request body");
        assert_eq!(body["example"], r#"{ "url": "https://httpbin.org/get" }"#);
    }

    #[actix_web::test]
    async fn test_ping_post_delegates_to_probe() {
        let mut mock = MockHttpTransport::new();
        mock.expect_execute().times(1).returning(|_, _| {
            Ok(TransportResponse {
                status: 200,
                body: "pong".to_string(),
                ..Default::default()
            })
        });
        let app = create_test_app(Arc::new(mock)).await;

        let req = test::TestRequest::post()
            .uri("/api/ping")
            .set_json(json!({ "url": "https://httpbin.org/get" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 200);

        let body = body_json(resp).await;
        assert_eq!(body["status"], "SUCCESS");
        assert_eq!(body["responseLength"], 4);
    }

    #[actix_web::test]
    async fn test_ping_upstream_500_is_reported_in_body() {
        use wiremock::matchers::method;
        use wiremock::{Mock, MockServer, ResponseTemplate};

        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let transport =
            ReqwestTransport::new(Duration::from_secs(2), Duration::from_secs(5)).unwrap();
        let app = create_test_app(Arc::new(transport)).await;

        let req = test::TestRequest::get()
            .uri(&format!("/api/ping?url={}/status/500", server.uri()))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 200);

        let body = body_json(resp).await;
        assert_eq!(body["status"], "ERROR");
        assert_eq!(body["httpStatus"], 500);
    }

    #[actix_web::test]
    async fn test_health_check_requires_url() {
        let app = create_test_app(Arc::new(silent_transport())).await;
        let req = test::TestRequest::get().uri("/api/health-check").to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 400);
        let body = body_json(resp).await;
        assert_eq!(body["example"], "/api/health-check?url=https://httpbin.org");
    }

    #[actix_web::test]
    async fn test_health_check_unhealthy_target() {
        let mut mock = MockHttpTransport::new();
        mock.expect_execute()
            .returning(|_, _| Err(TransportError::Connection("connection refused".to_string())));
        let app = create_test_app(Arc::new(mock)).await;

        let req = test::TestRequest::get()
            .uri("/api/health-check?url=http://127.0.0.1:1")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 200);

        let body = body_json(resp).await;
        assert_eq!(body["status"], "UNHEALTHY");
        assert_eq!(body["message"], "Health check failed: connection refused");
    }

    #[actix_web::test]
    async fn test_endpoint_info_requires_url() {
        let app = create_test_app(Arc::new(silent_transport())).await;
        let req = test::TestRequest::get().uri("/api/endpoint-info?url=").to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 400);
        let body = body_json(resp).await;
        assert_eq!(body["error"], "URL parameter is required");
    }

    #[actix_web::test]
    async fn test_ip_location_requires_ip() {
        let app = create_test_app(Arc::new(silent_transport())).await;

        let req = test::TestRequest::get().uri("/api/ip-location").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 400);
        let body = body_json(resp).await;
        assert_eq!(body["error"], "IP parameter is required");
        assert_eq!(body["example"], "/api/ip-location?ip=8.8.8.8");

        let req = test::TestRequest::post()
            .uri("/api/ip-location")
            .set_json(json!({ "ip": "" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 400);
        let body = body_json(resp).await;
        assert_eq!(body["error"], "IP is required in request body");
    }

    #[actix_web::test]
    async fn test_ip_location_invalid_format_is_soft_failure() {
        let app = create_test_app(Arc::new(silent_transport())).await;
        let req = test::TestRequest::get()
            .uri("/api/ip-location?ip=not.an.ip")
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 200);

        let body = body_json(resp).await;
        assert_eq!(body["status"], "ERROR");
        assert_eq!(body["message"], "Invalid IP address format");
        assert_eq!(body["ip"], "not.an.ip");
    }

    #[actix_web::test]
    async fn test_test_endpoints_listing() {
        let app = create_test_app(Arc::new(silent_transport())).await;
        let req = test::TestRequest::get().uri("/api/test-endpoints").to_request();

        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());

        let body = body_json(resp).await;
        assert_eq!(body["endpoints"]["sample_ips"]["google_dns"], "8.8.8.8");
        assert_eq!(body["usage"]["ip_location"], "/api/ip-location?ip=8.8.8.8");
    }
}
