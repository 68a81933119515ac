//! BIND RPZ zone file generation
//!
//! The stateful half of the output story. A Response Policy Zone encodes
//! "block this name" as a `CNAME .` record, and name servers decide whether
//! to reload the zone by comparing SOA serials, so regeneration has to:
//!
//! * Recover the SOA from the previous output file, if any
//! * Carry every SOA field forward and increment only the serial
//! * Rebuild the entire body from the fresh domain set
//! * Serialize deterministically, sorted by domain
//!
//! Header recovery is deliberately best-effort: only the leading block of
//! `@` lines is read (zone bodies can be huge), and any failure - missing
//! file, I/O error, malformed fragment - falls back to a fresh zone with
//! serial 0 instead of propagating. Operator tuning of the SOA timers in
//! the output file survives regeneration because everything except the
//! serial is copied verbatim.

use std::collections::BTreeSet;
use std::fmt::Write as _;
use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::blocklist::domain::DomainName;
use crate::blocklist::errors::{BlockListError, Result};
use crate::blocklist::generate::Generator;

/// TTL applied to every record the generator emits
const ZONE_TTL: u32 = 3600;

/// Default SOA timers for a zone created from scratch:
/// refresh, retry, expire, minimum
const DEFAULT_SOA_TIMERS: [u32; 4] = [86400, 7200, 2592000, 86400];

/// Start of Authority record data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoaRecord {
    pub mname: String,
    pub rname: String,
    pub serial: u32,
    pub refresh: u32,
    pub retry: u32,
    pub expire: u32,
    pub minimum: u32,
}

impl SoaRecord {
    /// The SOA for a zone with no recoverable prior state
    fn fresh() -> SoaRecord {
        let [refresh, retry, expire, minimum] = DEFAULT_SOA_TIMERS;
        SoaRecord {
            mname: "@".to_string(),
            rname: "hostmaster".to_string(),
            serial: 0,
            refresh,
            retry,
            expire,
            minimum,
        }
    }

    /// The same SOA one generation later: serial bumped, all else kept
    fn advanced(&self) -> SoaRecord {
        SoaRecord {
            // Serial arithmetic is modular in DNS practice.
            serial: self.serial.wrapping_add(1),
            ..self.clone()
        }
    }
}

/// The zone state carried across regenerations
///
/// Only the header survives a run; the body is rebuilt unconditionally, so
/// the NS record is not part of recovered state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneHeader {
    pub ttl: u32,
    pub soa: SoaRecord,
}

impl ZoneHeader {
    fn fresh() -> ZoneHeader {
        ZoneHeader {
            ttl: ZONE_TTL,
            soa: SoaRecord::fresh(),
        }
    }
}

/// Recover the zone header from an existing output file
///
/// Reads only the leading contiguous block of lines starting with `@` and
/// parses it as a minimal zone fragment. Returns `None` on any failure:
/// a missing or unreadable file, a malformed `@` line, an unknown record
/// type at the apex, or a block with no SOA. The caller treats `None` as
/// "no prior state" rather than an error.
fn read_header(path: &Path) -> Option<ZoneHeader> {
    let file = File::open(path).ok()?;
    let reader = BufReader::new(file);

    let mut header = None;
    for line in reader.lines() {
        let line = line.ok()?;
        if !line.starts_with('@') {
            break;
        }
        header = parse_apex_line(&line, header)?;
    }

    header
}

/// Parse one `@`-owned record line, folding an SOA into the header state
///
/// Format: `@ <ttl> IN <type> <rdata...>`. NS records at the apex are
/// recognized and discarded; the NS is rebuilt every run. Anything else in
/// the header block means the fragment is malformed, signalled as `None`.
fn parse_apex_line(line: &str, header: Option<ZoneHeader>) -> Option<Option<ZoneHeader>> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() < 4 || tokens[0] != "@" || !tokens[2].eq_ignore_ascii_case("IN") {
        return None;
    }

    let ttl = tokens[1].parse::<u32>().ok()?;

    match tokens[3].to_uppercase().as_str() {
        "SOA" => {
            if tokens.len() != 11 {
                return None;
            }
            let soa = SoaRecord {
                mname: tokens[4].to_string(),
                rname: tokens[5].to_string(),
                serial: tokens[6].parse().ok()?,
                refresh: tokens[7].parse().ok()?,
                retry: tokens[8].parse().ok()?,
                expire: tokens[9].parse().ok()?,
                minimum: tokens[10].parse().ok()?,
            };
            Some(Some(ZoneHeader { ttl, soa }))
        }
        "NS" if tokens.len() == 5 => Some(header),
        _ => None,
    }
}

/// RPZ zone file generator
///
/// Persists no state of its own: the on-disk zone file is the sole carrier
/// of the SOA serial between runs.
pub struct BindGenerator;

impl Generator for BindGenerator {
    fn generate(&self, domains: &BTreeSet<DomainName>, filename: &Path) -> Result<()> {
        let header = match read_header(filename) {
            Some(prior) => {
                let header = ZoneHeader {
                    ttl: prior.ttl,
                    soa: prior.soa.advanced(),
                };
                log::info!("parsed existing header, new serial is {}", header.soa.serial);
                header
            }
            None => {
                log::info!("creating zone from scratch");
                ZoneHeader::fresh()
            }
        };

        let mut out = String::new();
        let soa = &header.soa;
        let _ = writeln!(
            out,
            "@ {} IN SOA {} {} {} {} {} {} {}",
            header.ttl,
            soa.mname,
            soa.rname,
            soa.serial,
            soa.refresh,
            soa.retry,
            soa.expire,
            soa.minimum
        );
        let _ = writeln!(out, "@ {} IN NS LOCALHOST.", ZONE_TTL);
        for domain in domains {
            let _ = writeln!(out, "{} {} IN CNAME .", domain, ZONE_TTL);
        }

        fs::write(filename, out).map_err(|error| BlockListError::Write {
            path: filename.display().to_string(),
            error,
        })?;

        log::info!("block list has {} domains", domains.len());
        Ok(())
    }
}
