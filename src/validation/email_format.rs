use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9_+&*-]+(?:\.[a-zA-Z0-9_+&*-]+)*@(?:[a-zA-Z0-9-]+\.)+[a-zA-Z]{2,7}$")
        .expect("email pattern compiles")
});

/// Checks an address against the simple playground email pattern.
///
/// This is a format check only: no quoted local parts, no domain literals,
/// no internationalized names, TLD of 2 to 7 letters.
pub fn matches_email_pattern(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Splits a matching address into `(local_part, domain)` at the first `@`.
pub fn split_address(email: &str) -> Option<(&str, &str)> {
    email.split_once('@')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepted_addresses() {
        for email in [
            "user@example.com",
            "first.last@sub.example.org",
            "a+tag@example.io",
            "x_y-z&*@my-host.example.museum",
        ] {
            assert!(matches_email_pattern(email), "{email} should match");
        }
    }

    #[test]
    fn test_rejected_addresses() {
        for email in [
            "bad",
            "user@",
            "@example.com",
            "user@localhost",
            "user..dots@example.com",
            ".user@example.com",
            "user@example.c",
            "user@example.toolongtld",
            "user name@example.com",
            "user@exa_mple.com",
            "tëst@example.com",
        ] {
            assert!(!matches_email_pattern(email), "{email} should not match");
        }
    }

    #[test]
    fn test_split_address() {
        assert_eq!(
            split_address("user@example.com"),
            Some(("user", "example.com"))
        );
        assert_eq!(split_address("no-at-sign"), None);
    }
}
