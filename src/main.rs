use actix_web::{App, HttpServer, middleware::Logger, web::Data};
use api_playground::config::{AppConfig, AppContext};
use api_playground::handlers::geolocation::GeolocationService;
use api_playground::handlers::probe::ProbeService;
use api_playground::logging::init_logging;
use api_playground::openapi::ApiDoc;
use api_playground::transport::{HttpTransport, ReqwestTransport};
use chrono::Utc;
use std::sync::Arc;
use tracing::info;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// API Playground Entry Point
///
/// Configures and launches the Actix-web HTTP server with:
/// - Probe, geolocation and utility routes
/// - Swagger UI for API documentation
/// - Environment configuration via `.env` file
/// - Shared application state: the outbound HTTP client and the start
///   timestamp used by `/status`
///
/// # Endpoints
/// - Swagger UI: `/swagger-ui/`
/// - OpenAPI spec: `/api-docs/openapi.json`
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();

    let config = AppConfig::from_env().map_err(std::io::Error::other)?;
    init_logging(&config.logging);

    let context = AppContext::new(Utc::now());
    let transport: Arc<dyn HttpTransport> = Arc::new(
        ReqwestTransport::new(config.connect_timeout, config.request_timeout)
            .map_err(std::io::Error::other)?,
    );
    let probe = ProbeService::new(transport.clone());
    let geolocation = GeolocationService::new(transport, config.geolocation_api_url.clone());

    info!(
        host = %config.host,
        port = config.port,
        version = context.version,
        geolocation_api = %config.geolocation_api_url,
        "starting api playground"
    );

    HttpServer::new(move || {
        let openapi = ApiDoc::openapi();

        App::new()
            .wrap(Logger::default())
            .app_data(Data::new(context.clone()))
            .app_data(Data::new(probe.clone()))
            .app_data(Data::new(geolocation.clone()))
            .configure(api_playground::routes::configure)
            .service(SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", openapi))
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
