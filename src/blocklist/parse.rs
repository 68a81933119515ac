//! Lazy extraction of domain names from block list streams
//!
//! Real-world block lists run to hundreds of thousands of entries, so the
//! parser is a pull-based iterator over lines: memory use is bounded by one
//! line at a time and a remote fetch is never buffered in full. The stream
//! is finite and single-pass; callers fold it into a set rather than
//! iterating twice.

use std::io::{BufRead, Lines};

use lazy_static::lazy_static;
use regex::Regex;

use crate::blocklist::domain::DomainName;
use crate::blocklist::errors::{BlockListError, Result};
use crate::blocklist::source::ListSyntax;

lazy_static! {
    /// Matches the first domain-shaped substring in a line, tolerating
    /// trailing comments and annotations. Label lengths are enforced by
    /// the validator, not here.
    static ref DOMAIN_REGEX: Regex = Regex::new(
        r"\b((?:(?:xn--)?[a-z0-9]+(?:-[a-z0-9]+)*\.)+[a-z]{1,63})\b"
    )
    .expect("Failed to compile domain regex");

    /// Hosts-file line: an address (or any token), whitespace, the rest.
    static ref HOSTS_REGEX: Regex =
        Regex::new(r"^\S+\s+(.+)$").expect("Failed to compile hosts regex");
}

/// Lazy iterator of validated domain names over a line stream
///
/// Lines that carry no recognizable or valid domain are skipped silently;
/// I/O errors from the underlying reader surface as `Err` items and are
/// fatal to the run.
pub struct DomainStream<R: BufRead> {
    lines: Lines<R>,
    syntax: ListSyntax,
    uri: String,
}

impl<R: BufRead> DomainStream<R> {
    /// Wrap a line source in a domain stream for the given syntax
    ///
    /// The URI is carried only for error context.
    pub fn new(reader: R, syntax: ListSyntax, uri: &str) -> DomainStream<R> {
        DomainStream {
            lines: reader.lines(),
            syntax,
            uri: uri.to_string(),
        }
    }

    /// Extract the candidate portion of one line, per syntax
    fn candidate<'a>(&self, line: &'a str) -> Option<&'a str> {
        match self.syntax {
            ListSyntax::Simple => {
                if line.starts_with('#') {
                    None
                } else {
                    Some(line)
                }
            }
            // First hostname only when a line carries aliases.
            ListSyntax::Hosts => HOSTS_REGEX
                .captures(line)
                .and_then(|caps| caps.get(1))
                .map(|m| m.as_str()),
        }
    }
}

impl<R: BufRead> Iterator for DomainStream<R> {
    type Item = Result<DomainName>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = match self.lines.next()? {
                Ok(line) => line,
                Err(error) => {
                    return Some(Err(BlockListError::Read {
                        uri: self.uri.clone(),
                        error,
                    }));
                }
            };

            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let candidate = match self.candidate(line) {
                Some(candidate) => candidate.to_lowercase(),
                None => continue,
            };

            if let Some(m) = DOMAIN_REGEX.find(&candidate) {
                if let Some(domain) = DomainName::parse(m.as_str()) {
                    return Some(Ok(domain));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn collect(input: &str, syntax: ListSyntax) -> Vec<String> {
        DomainStream::new(Cursor::new(input.to_string()), syntax, "test")
            .map(|d| d.unwrap().as_str().to_string())
            .collect()
    }

    #[test]
    fn test_simple_skips_comments_and_blanks() {
        let input = "example.org\n\n# a comment\nexample.com\n";
        assert_eq!(collect(input, ListSyntax::Simple), vec!["example.org", "example.com"]);
    }

    #[test]
    fn test_simple_tolerates_trailing_annotations() {
        let input = "example.org  # tracker, added 2023\n";
        assert_eq!(collect(input, ListSyntax::Simple), vec!["example.org"]);
    }

    #[test]
    fn test_simple_folds_case() {
        let input = "Ads.Example.COM\n";
        assert_eq!(collect(input, ListSyntax::Simple), vec!["ads.example.com"]);
    }

    #[test]
    fn test_simple_skips_unparseable_lines() {
        let input = "!!!\nexample.org\n127.0.0.1\n";
        assert_eq!(collect(input, ListSyntax::Simple), vec!["example.org"]);
    }

    #[test]
    fn test_hosts_extracts_hostname_not_address() {
        let input = "127.0.0.1 example.org\n0.0.0.0 example.com\n";
        assert_eq!(collect(input, ListSyntax::Hosts), vec!["example.org", "example.com"]);
    }

    #[test]
    fn test_hosts_takes_first_alias_only() {
        let input = "127.0.0.1 example.com alias.example.com\n";
        assert_eq!(collect(input, ListSyntax::Hosts), vec!["example.com"]);
    }

    #[test]
    fn test_hosts_skips_bare_address_lines() {
        let input = "127.0.0.1\n127.0.0.1 example.org\n";
        assert_eq!(collect(input, ListSyntax::Hosts), vec!["example.org"]);
    }

    #[test]
    fn test_parsing_is_idempotent() {
        let input = "example.org\nexample.com\n# skip\nexample.net\n";
        let first = collect(input, ListSyntax::Simple);
        let second = collect(input, ListSyntax::Simple);
        assert_eq!(first, second);
    }

    #[test]
    fn test_io_error_surfaces_as_err_item() {
        struct FailingReader;

        impl std::io::Read for FailingReader {
            fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
                Err(std::io::Error::new(std::io::ErrorKind::Other, "boom"))
            }
        }

        let reader = std::io::BufReader::new(FailingReader);
        let mut stream = DomainStream::new(reader, ListSyntax::Simple, "lists/ads.txt");
        let item = stream.next().unwrap();
        assert!(item.is_err());
    }
}
