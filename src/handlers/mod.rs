/// # URL Probe Service
///
/// Issues `GET`, `HEAD` and `OPTIONS` requests against caller-supplied URLs
/// and reports the outcome as a typed record. Failures are classified into
/// HTTP errors, connection failures and unexpected errors.
pub mod probe;

/// # IP Geolocation Service
///
/// Validates an IPv4 literal and resolves it through the configured
/// provider.
pub mod geolocation;

/// Stateless helpers behind `/utils`.
pub mod utility;
