//! DNS resolver initialization.

use std::time::Duration;

use trust_dns_resolver::config::{ResolverConfig, ResolverOpts};
use trust_dns_resolver::TokioAsyncResolver;

use crate::dns::DnsResolver;

/// Initializes the DNS resolver for hostname lookups.
///
/// Uses the default upstream configuration with a single attempt per query
/// and `ndots = 0`, so `2hats.com` is never expanded with local search domains.
pub fn init_resolver(timeout: Duration) -> DnsResolver {
    let mut opts = ResolverOpts::default();
    opts.timeout = timeout;
    opts.attempts = 1;
    opts.ndots = 0;

    DnsResolver::new(TokioAsyncResolver::tokio(ResolverConfig::default(), opts))
}
