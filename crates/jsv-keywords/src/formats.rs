//! Built-in format attributes. All of them check strings only.

use std::net::{Ipv4Addr, Ipv6Addr};
use std::sync::Arc;

use chrono::DateTime;
use jsv_core::NodeType;
use jsv_library::FormatAttribute;
use regex::Regex;
use serde_json::Value;
use uuid::Uuid;

/// A format attribute defined by a predicate over strings.
#[derive(Clone, Copy)]
pub struct StringFormat {
    check: fn(&str) -> bool,
}

impl StringFormat {
    /// Wrap `check`.
    pub const fn new(check: fn(&str) -> bool) -> Self {
        Self { check }
    }
}

impl FormatAttribute for StringFormat {
    fn supported_types(&self) -> &[NodeType] {
        &[NodeType::String]
    }

    fn is_valid(&self, instance: &Value) -> bool {
        instance.as_str().map_or(true, self.check)
    }
}

/// `(name, attribute)` for every built-in format.
pub fn common_formats() -> Vec<(&'static str, Arc<dyn FormatAttribute>)> {
    let table: [(&'static str, fn(&str) -> bool); 7] = [
        ("date-time", is_date_time),
        ("email", is_email),
        ("hostname", is_hostname),
        ("ipv4", is_ipv4),
        ("ipv6", is_ipv6),
        ("regex", is_regex),
        ("uuid", is_uuid),
    ];
    table
        .into_iter()
        .map(|(name, check)| (name, Arc::new(StringFormat::new(check)) as Arc<dyn FormatAttribute>))
        .collect()
}

/// RFC 3339 date-time with a mandatory offset.
pub fn is_date_time(s: &str) -> bool {
    DateTime::parse_from_rfc3339(s).is_ok()
}

/// `local@domain`, where the domain is a hostname.
pub fn is_email(s: &str) -> bool {
    let Some((local, domain)) = s.rsplit_once('@') else {
        return false;
    };
    !local.is_empty()
        && !local.contains('@')
        && !local.chars().any(|c| c.is_whitespace() || c.is_control())
        && is_hostname(domain)
}

/// RFC 1123 host name.
pub fn is_hostname(s: &str) -> bool {
    if s.is_empty() || s.len() > 253 {
        return false;
    }
    s.split('.').all(|label| {
        !label.is_empty()
            && label.len() <= 63
            && !label.starts_with('-')
            && !label.ends_with('-')
            && label.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-')
    })
}

/// Dotted-quad IPv4 address.
pub fn is_ipv4(s: &str) -> bool {
    s.parse::<Ipv4Addr>().is_ok()
}

/// IPv6 address in any RFC 4291 text form.
pub fn is_ipv6(s: &str) -> bool {
    s.parse::<Ipv6Addr>().is_ok()
}

/// A regular expression the engine can compile.
pub fn is_regex(s: &str) -> bool {
    Regex::new(s).is_ok()
}

/// Hyphenated UUID (`8-4-4-4-12` hex digits).
pub fn is_uuid(s: &str) -> bool {
    s.len() == 36 && Uuid::parse_str(s).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_date_time() {
        assert!(is_date_time("2024-02-29T12:30:00Z"));
        assert!(is_date_time("2024-02-29T12:30:00.123+05:30"));
        assert!(!is_date_time("2024-02-29"));
        assert!(!is_date_time("2023-02-29T12:30:00Z"));
    }

    #[test]
    fn test_email() {
        assert!(is_email("someone@example.com"));
        assert!(!is_email("someone@"));
        assert!(!is_email("@example.com"));
        assert!(!is_email("some one@example.com"));
        assert!(!is_email("a@b@example.com"));
    }

    #[test]
    fn test_hostname() {
        assert!(is_hostname("example.com"));
        assert!(is_hostname("localhost"));
        assert!(is_hostname("3com.net"));
        assert!(!is_hostname("-bad.example"));
        assert!(!is_hostname("double..dot"));
        assert!(!is_hostname(&"a".repeat(64)));
    }

    #[test]
    fn test_ip_addresses() {
        assert!(is_ipv4("192.168.0.1"));
        assert!(!is_ipv4("256.0.0.1"));
        assert!(!is_ipv4("::1"));
        assert!(is_ipv6("::1"));
        assert!(is_ipv6("2001:db8::8a2e:370:7334"));
        assert!(!is_ipv6("192.168.0.1"));
    }

    #[test]
    fn test_regex() {
        assert!(is_regex("^a+$"));
        assert!(!is_regex("(a"));
    }

    #[test]
    fn test_uuid() {
        assert!(is_uuid(&Uuid::new_v4().to_string()));
        assert!(!is_uuid(&Uuid::new_v4().simple().to_string()));
        assert!(!is_uuid("not-a-uuid"));
    }

    #[test]
    fn test_non_strings_pass() {
        let email = StringFormat::new(is_email);
        assert!(email.is_valid(&json!(42)));
        assert!(!email.applies_to(&json!(42)));
    }

    #[test]
    fn test_common_formats_names() {
        let names: Vec<&str> = common_formats().iter().map(|(n, _)| *n).collect();
        assert_eq!(
            names,
            vec!["date-time", "email", "hostname", "ipv4", "ipv6", "regex", "uuid"]
        );
    }
}
