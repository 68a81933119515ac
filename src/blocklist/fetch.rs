//! Resolving a source URI to a readable byte stream
//!
//! URIs starting with `http` are fetched with a blocking HTTP client and a
//! fixed 10-second timeout; anything else is opened as a local file. There
//! are no retries: a failed fetch fails the whole run, which is the right
//! behavior for a batch job re-run on a schedule.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::time::Duration;

use crate::blocklist::errors::{BlockListError, Result};
use crate::blocklist::parse::DomainStream;
use crate::blocklist::source::ListSource;

/// Timeout for each remote fetch
const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Open a source URI as a buffered byte stream
pub fn open_source(source: &ListSource) -> Result<Box<dyn BufRead>> {
    if source.uri.starts_with("http") {
        let client = reqwest::blocking::Client::builder()
            .timeout(FETCH_TIMEOUT)
            .build()
            .map_err(|error| BlockListError::Http {
                uri: source.uri.clone(),
                error,
            })?;

        let response = client
            .get(&source.uri)
            .send()
            .and_then(|response| response.error_for_status())
            .map_err(|error| BlockListError::Http {
                uri: source.uri.clone(),
                error,
            })?;

        return Ok(Box::new(BufReader::new(response)));
    }

    let file = File::open(&source.uri).map_err(|error| BlockListError::Read {
        uri: source.uri.clone(),
        error,
    })?;

    Ok(Box::new(BufReader::new(file)))
}

/// Open a source and wrap it in a lazy domain stream for its syntax
pub fn read_source(source: &ListSource) -> Result<DomainStream<Box<dyn BufRead>>> {
    log::debug!("reading block list {}", source.uri);
    let reader = open_source(source)?;
    Ok(DomainStream::new(reader, source.syntax, &source.uri))
}
