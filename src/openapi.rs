use utoipa::OpenApi;

/// OpenAPI Specification Documentation
///
/// Generated at compile time from the `#[utoipa::path]` annotations on the
/// route handlers. Served as JSON at `/api-docs/openapi.json` and rendered
/// by Swagger UI at `/swagger-ui/`.
///
/// # Tags
/// 1. **Health Check**: liveness probe
/// 2. **Playground**: root-level demo endpoints
/// 3. **API Probe**: ping, health-check and endpoint-info against a URL
/// 4. **IP Location**: IPv4 geolocation
/// 5. **Utilities**: email, base64, random data, time and host info
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health::health,
        crate::routes::basic::home,
        crate::routes::basic::greeting,
        crate::routes::basic::status,
        crate::routes::basic::echo,
        crate::routes::basic::random,
        crate::routes::basic::help,
        crate::routes::api::ping,
        crate::routes::api::ping_post,
        crate::routes::api::health_check,
        crate::routes::api::endpoint_info,
        crate::routes::api::ip_location,
        crate::routes::api::ip_location_post,
        crate::routes::api::test_endpoints,
        crate::routes::utils::get_system_info,
        crate::routes::utils::random_data,
        crate::routes::utils::validate_email_query,
        crate::routes::utils::validate_email_body,
        crate::routes::utils::encode_base64_query,
        crate::routes::utils::encode_base64_body,
        crate::routes::utils::decode_base64_query,
        crate::routes::utils::decode_base64_body,
        crate::routes::utils::get_current_time,
        crate::routes::utils::help,
    ),
    components(
        schemas(
            crate::models::health::HealthResponse,
            crate::models::request::UrlRequest,
            crate::models::request::IpRequest,
            crate::models::request::EmailRequest,
            crate::models::request::TextRequest,
            crate::models::request::EncodedRequest
        )
    ),
    tags(
        (name = "Health Check", description = "Service health monitoring endpoints"),
        (name = "Playground", description = "Greeting, status, echo and random values"),
        (name = "API Probe", description = "Reachability, health and capability probes for arbitrary URLs"),
        (name = "IP Location", description = "IPv4 geolocation through ip-api.com"),
        (name = "Utilities", description = "Email validation, base64, random data, time and system info")
    ),
    info(
        description = "Playground service for probing HTTP endpoints, locating IP addresses and small utilities",
        title = "API Playground",
        version = "0.2.0",
    )
)]
pub struct ApiDoc;
