//! dnsmasq config generation
//!
//! The simple half of the output story: one `address=/<domain>/#` line per
//! blocked domain, sorted, fully overwriting the file. dnsmasq answers
//! every name under such an address line with NXDOMAIN-like behavior for
//! the `#` target, so no header or state needs to be preserved between
//! runs.

use std::collections::BTreeSet;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use crate::blocklist::domain::DomainName;
use crate::blocklist::errors::{BlockListError, Result};
use crate::blocklist::generate::Generator;

/// Stateless dnsmasq config generator
pub struct DnsmasqGenerator;

impl Generator for DnsmasqGenerator {
    fn generate(&self, domains: &BTreeSet<DomainName>, filename: &Path) -> Result<()> {
        let mut out = String::new();
        for domain in domains {
            let _ = writeln!(out, "address=/{}/#", domain);
        }

        fs::write(filename, out).map_err(|error| BlockListError::Write {
            path: filename.display().to_string(),
            error,
        })?;

        log::info!("block list has {} domains", domains.len());
        Ok(())
    }
}
