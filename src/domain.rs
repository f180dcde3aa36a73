//! Candidate domain enumeration and per-domain URLs.
//!
//! Key functions:
//! - `enumerate_domains()` - The ordered `{n}hats.com` candidates for a run
//! - `site_url()` - Where the browser is pointed for a domain
//! - `registration_url()` - Registrar search link for an available domain

use anyhow::{Context, Result};
use url::Url;

use crate::config::{DOMAIN_SUFFIX, FIRST_INDEX, REGISTER_URL, SPECIAL_CASE_DOMAINS};

/// Produces the candidate domains for a run, in report order.
///
/// Special cases (when enabled) come first, then `{i}hats.com` for
/// `i = 2..=largest` in ascending order. A `largest` below 2 gives an empty
/// numeric range.
///
/// ```
/// use hats_domains::domain::enumerate_domains;
///
/// assert_eq!(enumerate_domains(3, false), vec!["2hats.com", "3hats.com"]);
/// ```
pub fn enumerate_domains(largest: u32, include_special: bool) -> Vec<String> {
    let special: &[&str] = if include_special {
        SPECIAL_CASE_DOMAINS
    } else {
        &[]
    };

    special
        .iter()
        .map(|name| name.to_string())
        .chain((FIRST_INDEX..=largest).map(|i| format!("{i}{DOMAIN_SUFFIX}")))
        .collect()
}

/// Root page of the domain over plain HTTP.
///
/// # Errors
///
/// Returns an error if `domain` is not a valid hostname.
pub fn site_url(domain: &str) -> Result<Url> {
    let url = Url::parse(&format!("http://{domain}/"))
        .with_context(|| format!("'{domain}' is not a valid hostname"))?;
    if url.host_str() != Some(domain) {
        anyhow::bail!("'{domain}' is not a valid hostname");
    }
    Ok(url)
}

/// Registrar search page pre-filled with `domain`.
pub fn registration_url(domain: &str) -> Result<Url> {
    Url::parse_with_params(REGISTER_URL, &[("domain", domain)])
        .context("Failed to build registration link")
}
