//! Block list processing pipeline
//!
//! Sources flow through the pipeline in one pass:
//!
//! URIs -> `fetch` -> byte streams -> `parse` -> validated domain names
//! -> deduplicated set -> generator (`zone` or `dnsmasq`) -> output file
//!
//! # Module Structure
//!
//! * `source` - Block list source descriptors and syntax selection
//! * `domain` - Domain name validation and canonicalization
//! * `parse` - Lazy line-by-line extraction of domains from list streams
//! * `fetch` - Resolving a source URI to a readable byte stream
//! * `generate` - The generator trait and the run orchestrator
//! * `zone` - BIND RPZ zone generation with SOA serial management
//! * `dnsmasq` - dnsmasq config generation
//! * `errors` - Error types for the pipeline

/// Error types for fetching, parsing and generation
pub mod errors;

/// Block list source descriptors
pub mod source;

/// Domain name validation and canonicalization
pub mod domain;

/// Lazy extraction of domain names from list streams
pub mod parse;

/// Source URI resolution (local files and HTTP)
pub mod fetch;

/// Generator trait and run orchestration
pub mod generate;

/// BIND RPZ zone file generation
pub mod zone;

/// dnsmasq config generation
pub mod dnsmasq;
