//! Generator trait and run orchestration
//!
//! A generator turns one deduplicated domain set into one output file.
//! There are exactly two implementations, with no shared state:
//!
//! * [`zone::BindGenerator`](crate::blocklist::zone::BindGenerator)
//! * [`dnsmasq::DnsmasqGenerator`](crate::blocklist::dnsmasq::DnsmasqGenerator)

use std::collections::BTreeSet;
use std::path::Path;

use crate::blocklist::domain::DomainName;
use crate::blocklist::errors::Result;
use crate::blocklist::fetch;
use crate::blocklist::source::ListSource;

/// Output format generator
///
/// `generate` fully overwrites `filename`; the domain set is already
/// deduplicated and iterates in ascending canonical order.
pub trait Generator {
    fn generate(&self, domains: &BTreeSet<DomainName>, filename: &Path) -> Result<()>;
}

/// Fetch and parse every source, then run the generator once on the union
///
/// Sources are processed sequentially; set semantics absorb duplicates
/// across sources, so source order does not affect the output. Any fetch or
/// read failure aborts the whole run. There is deliberately no
/// partial-success mode: a blocklist silently missing one source is worse
/// than a failed run.
pub fn download_and_generate(
    sources: &[ListSource],
    generator: &dyn Generator,
    filename: &Path,
) -> Result<()> {
    let mut domains = BTreeSet::new();

    for source in sources {
        for domain in fetch::read_source(source)? {
            domains.insert(domain?);
        }
    }

    generator.generate(&domains, filename)
}
