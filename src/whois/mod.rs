//! WHOIS domain lookup using the `whois-service` crate.
//!
//! `whois-service` picks the server for the TLD (RDAP first, then WHOIS with
//! IANA discovery) and parses the answer. `WhoisClient` bounds each lookup by
//! the run's timeout and converts the answer into a `WhoisOutcome`.

mod parse;
mod types;

use std::future::Future;
use std::time::Duration;

pub use parse::parse_date_string;
pub use types::{WhoisError, WhoisOutcome};

use parse::convert_response;

/// Registration lookup seam used by the inspector.
pub trait WhoisLookup {
    /// Looks up `domain`.
    ///
    /// `Ok(WhoisOutcome::NotFound)` means the domain is unregistered; `Err` means
    /// the lookup itself could not be completed.
    fn lookup(&self, domain: &str) -> impl Future<Output = Result<WhoisOutcome, WhoisError>> + Send;
}

/// WHOIS client without an on-disk cache; every run sees fresh data.
pub struct WhoisClient {
    inner: whois_service::WhoisClient,
    timeout: Duration,
}

impl WhoisClient {
    /// Creates a client whose lookups give up after `timeout`.
    ///
    /// # Errors
    ///
    /// Returns `WhoisError::Client` if `whois-service` cannot set up its client.
    pub async fn new(timeout: Duration) -> Result<Self, WhoisError> {
        let inner = whois_service::WhoisClient::new_without_cache()
            .await
            .map_err(|e| WhoisError::Client(e.to_string()))?;
        Ok(WhoisClient { inner, timeout })
    }
}

impl WhoisLookup for WhoisClient {
    async fn lookup(&self, domain: &str) -> Result<WhoisOutcome, WhoisError> {
        log::debug!("Starting WHOIS lookup for domain: {}", domain);

        let response = tokio::time::timeout(self.timeout, self.inner.lookup(domain))
            .await
            .map_err(|_| WhoisError::Timeout {
                domain: domain.to_string(),
            })?
            .map_err(|e| lookup_error(domain, e))?;

        log::debug!("WHOIS answer for {} from {}", domain, response.whois_server);
        convert_response(&response)
    }
}

fn lookup_error(domain: &str, error: whois_service::WhoisError) -> WhoisError {
    match error {
        whois_service::WhoisError::Timeout => WhoisError::Timeout {
            domain: domain.to_string(),
        },
        whois_service::WhoisError::UnsupportedTld(tld) => WhoisError::UnsupportedTld(tld),
        other => WhoisError::Lookup {
            domain: domain.to_string(),
            message: other.to_string(),
        },
    }
}
