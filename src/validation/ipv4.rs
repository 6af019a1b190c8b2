use once_cell::sync::Lazy;
use regex::Regex;

static IPV4_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?:(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)\.){3}(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)$",
    )
    .expect("IPv4 pattern compiles")
});

/// Returns `true` when `ip`, once trimmed, is a dotted-quad IPv4 literal with
/// every octet in 0..=255.
///
/// Hostnames and IPv6 literals are rejected. Octets with a single leading
/// zero (`010`) are accepted.
pub fn is_valid_ipv4(ip: Option<&str>) -> bool {
    match ip.map(str::trim) {
        Some(ip) if !ip.is_empty() => IPV4_PATTERN.is_match(ip),
        _ => false,
    }
}
