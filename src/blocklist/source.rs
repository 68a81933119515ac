//! Block list source descriptors

/// Line syntax of a block list source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListSyntax {
    /// One domain per line, `#`-prefixed lines are comments
    Simple,
    /// `/etc/hosts` convention: `<address> <hostname> [aliases...]`
    Hosts,
}

/// A single block list source: where to fetch it and how to read it
///
/// URIs starting with `http` are fetched over HTTP(S); anything else is
/// treated as a local file path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListSource {
    pub uri: String,
    pub syntax: ListSyntax,
}

impl ListSource {
    pub fn new<S: Into<String>>(uri: S, syntax: ListSyntax) -> ListSource {
        ListSource {
            uri: uri.into(),
            syntax,
        }
    }
}
