//! Hostname resolution.
//!
//! The inspector only needs to know whether a registered domain resolves at
//! all; the addresses are logged for debugging.

use std::future::Future;
use std::net::IpAddr;

use thiserror::Error;
use trust_dns_resolver::error::{ResolveError, ResolveErrorKind};
use trust_dns_resolver::TokioAsyncResolver;

/// DNS lookup failures.
#[derive(Error, Debug)]
pub enum DnsError {
    #[error("no DNS records for {host}")]
    NoRecords { host: String },

    #[error("DNS lookup for {host} returned no addresses")]
    NoAddresses { host: String },

    #[error("DNS lookup for {host} failed: {source}")]
    Resolve {
        host: String,
        #[source]
        source: ResolveError,
    },
}

/// Hostname resolution seam used by the inspector.
pub trait HostResolver {
    /// Resolves `host` to at least one address.
    fn resolve(&self, host: &str) -> impl Future<Output = Result<Vec<IpAddr>, DnsError>> + Send;
}

/// `HostResolver` backed by trust-dns.
#[derive(Clone)]
pub struct DnsResolver {
    inner: TokioAsyncResolver,
}

impl DnsResolver {
    pub fn new(inner: TokioAsyncResolver) -> Self {
        DnsResolver { inner }
    }
}

impl HostResolver for DnsResolver {
    async fn resolve(&self, host: &str) -> Result<Vec<IpAddr>, DnsError> {
        let response = self.inner.lookup_ip(host).await.map_err(|source| {
            if matches!(source.kind(), ResolveErrorKind::NoRecordsFound { .. }) {
                DnsError::NoRecords {
                    host: host.to_string(),
                }
            } else {
                DnsError::Resolve {
                    host: host.to_string(),
                    source,
                }
            }
        })?;

        let addresses: Vec<IpAddr> = response.iter().collect();
        if addresses.is_empty() {
            return Err(DnsError::NoAddresses {
                host: host.to_string(),
            });
        }
        log::debug!("{} resolves to {:?}", host, addresses);
        Ok(addresses)
    }
}
