//! nxdomain
//!
//! A domain block list aggregator. Fetches block lists from local files or
//! HTTP sources, validates and deduplicates the domains they contain, and
//! emits a sorted blocklist in one of two formats:
//!
//! * A BIND/named Response Policy Zone (RPZ) file, where each blocked
//!   domain is a `CNAME .` record (the RPZ convention for NXDOMAIN)
//! * A dnsmasq configuration snippet (`address=/<domain>/#` lines)
//!
//! The RPZ generator preserves the SOA header of an existing zone file and
//! increments its serial on every regeneration, so downstream name servers
//! pick up each new version of the zone.

/// Block list fetching, parsing and output generation
pub mod blocklist;
