/// # Health Status Response
///
/// Liveness payload served by `/health`.
///
/// ## Example JSON
/// ```json
/// {
///   "status": "UP",
///   "timestamp": "2024-03-10T15:30:45.123456789Z"
/// }
/// ```
pub mod health;

/// Records produced by the URL probes (`/api/ping`, `/api/health-check`,
/// `/api/endpoint-info`). The outcome enum's tag becomes the `status` key.
pub mod probe;

/// Geolocation result records and the provider's payload.
pub mod geo;

/// Records produced by the `/utils` operations.
pub mod utility;

/// Records for the root-level playground endpoints.
pub mod basic;

/// Request bodies and query strings.
pub mod request;

pub use health::HealthResponse;
