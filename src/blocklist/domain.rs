//! Domain name validation and canonicalization
//!
//! Third-party block lists are full of junk: comments glued onto entries,
//! bare IP addresses, malformed names. Every candidate token extracted from
//! a list is pushed through [`DomainName::parse`] before it can enter the
//! output; anything that fails is silently dropped by the caller.
//!
//! Validation is not fully spec-compliant DNS name handling, but enforces
//! the label syntax that matters for a blocklist:
//!
//! * Labels of 1-63 characters, alphanumeric plus interior hyphens
//! * An optional `xn--` punycode prefix per label
//! * At least two labels, with an all-alphabetic TLD
//!
//! The canonical form is lowercase with no trailing dot. Equality, ordering
//! and hashing all operate on the canonical form, so a `BTreeSet` of domain
//! names is both deduplicated and already in output order.

use std::fmt;

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// A single DNS label: optional punycode prefix, alphanumeric runs
    /// joined by single hyphens. Length is checked separately.
    static ref LABEL_REGEX: Regex =
        Regex::new(r"^(xn--)?[a-z0-9]+(-[a-z0-9]+)*$").expect("Failed to compile label regex");
}

/// Maximum length of a single DNS label
const MAX_LABEL_LENGTH: usize = 63;

/// Maximum length of a full domain name in presentation format
const MAX_NAME_LENGTH: usize = 253;

/// A validated, canonicalized domain name
///
/// Canonical form: lowercase, no trailing dot. The only way to construct
/// one is [`DomainName::parse`], so holding a `DomainName` implies the
/// syntax checks passed.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DomainName(String);

impl DomainName {
    /// Validate a candidate token and return its canonical form
    ///
    /// Returns `None` for anything that does not look like a resolvable
    /// domain name; malformed entries in third-party lists are expected
    /// and non-fatal.
    pub fn parse(candidate: &str) -> Option<DomainName> {
        let trimmed = candidate.trim();
        let name = trimmed
            .strip_suffix('.')
            .unwrap_or(trimmed)
            .to_lowercase();

        if name.is_empty() || name.len() > MAX_NAME_LENGTH {
            return None;
        }

        let labels: Vec<&str> = name.split('.').collect();
        if labels.len() < 2 {
            return None;
        }

        for label in &labels {
            if label.is_empty() || label.len() > MAX_LABEL_LENGTH {
                return None;
            }
            if !LABEL_REGEX.is_match(label) {
                return None;
            }
        }

        // The TLD carries no digits or hyphens.
        let tld = labels[labels.len() - 1];
        if !tld.chars().all(|c| c.is_ascii_alphabetic()) {
            return None;
        }

        Some(DomainName(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DomainName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_domain() {
        let domain = DomainName::parse("example.org").unwrap();
        assert_eq!(domain.as_str(), "example.org");
    }

    #[test]
    fn test_parse_folds_case_and_trailing_dot() {
        let domain = DomainName::parse("Ads.Example.COM.").unwrap();
        assert_eq!(domain.as_str(), "ads.example.com");
    }

    #[test]
    fn test_parse_punycode_label() {
        let domain = DomainName::parse("xn--bcher-kva.example").unwrap();
        assert_eq!(domain.as_str(), "xn--bcher-kva.example");
    }

    #[test]
    fn test_parse_hyphenated_labels() {
        assert!(DomainName::parse("ad-server.example.com").is_some());
        assert!(DomainName::parse("-leading.example.com").is_none());
        assert!(DomainName::parse("trailing-.example.com").is_none());
    }

    #[test]
    fn test_parse_rejects_single_label() {
        assert!(DomainName::parse("localhost").is_none());
    }

    #[test]
    fn test_parse_rejects_numeric_tld() {
        // Keeps bare IPv4 addresses out of the blocklist.
        assert!(DomainName::parse("127.0.0.1").is_none());
        assert!(DomainName::parse("example.123").is_none());
    }

    #[test]
    fn test_parse_strips_one_trailing_dot_only() {
        // A root-qualified name is fine; doubled trailing dots leave an
        // empty label behind and must not validate.
        assert!(DomainName::parse("example.com.").is_some());
        assert!(DomainName::parse("example.com..").is_none());
    }

    #[test]
    fn test_parse_rejects_empty_labels() {
        assert!(DomainName::parse("example..com").is_none());
        assert!(DomainName::parse(".example.com").is_none());
        assert!(DomainName::parse("").is_none());
    }

    #[test]
    fn test_parse_rejects_overlong_label() {
        let label = "a".repeat(64);
        assert!(DomainName::parse(&format!("{}.com", label)).is_none());

        let label = "a".repeat(63);
        assert!(DomainName::parse(&format!("{}.com", label)).is_some());
    }

    #[test]
    fn test_parse_rejects_overlong_name() {
        let long = format!("{}.{}.{}.{}.example", "a".repeat(62), "b".repeat(62), "c".repeat(62), "d".repeat(62));
        assert!(long.len() > 253);
        assert!(DomainName::parse(&long).is_none());
    }

    #[test]
    fn test_ordering_is_canonical_lexicographic() {
        let mut domains = vec![
            DomainName::parse("example.org").unwrap(),
            DomainName::parse("EXAMPLE.COM").unwrap(),
            DomainName::parse("example.net").unwrap(),
        ];
        domains.sort();

        let sorted: Vec<&str> = domains.iter().map(|d| d.as_str()).collect();
        assert_eq!(sorted, vec!["example.com", "example.net", "example.org"]);
    }
}
