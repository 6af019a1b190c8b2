/// Strict dotted-quad IPv4 check (`0.0.0.0` to `255.255.255.255`).
///
/// ```
/// use api_playground::validation::ipv4::is_valid_ipv4;
///
/// assert!(is_valid_ipv4(Some("8.8.8.8")));
/// assert!(!is_valid_ipv4(Some("256.1.1.1")));
/// assert!(!is_valid_ipv4(None));
/// ```
pub mod ipv4;

/// Pattern-only email check. No DNS lookup, no disposable-domain list.
///
/// ```
/// use api_playground::validation::email_format::{matches_email_pattern, split_address};
///
/// assert!(matches_email_pattern("user.name+tag@example.com"));
/// assert!(!matches_email_pattern("bad"));
/// assert_eq!(split_address("user@example.com"), Some(("user", "example.com")));
/// ```
pub mod email_format;
