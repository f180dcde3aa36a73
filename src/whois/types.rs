//! WHOIS data structures.

use thiserror::Error;

use crate::models::RegistrationInfo;

/// What WHOIS said about a domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WhoisOutcome {
    /// The registry has no record of the domain
    NotFound,
    Found(RegistrationInfo),
}

/// Failures of the WHOIS lookup itself, as opposed to a "not found" answer.
#[derive(Error, Debug)]
pub enum WhoisError {
    #[error("Failed to create WHOIS client: {0}")]
    Client(String),

    #[error("WHOIS lookup for {domain} timed out")]
    Timeout { domain: String },

    #[error("No WHOIS server known for .{0}")]
    UnsupportedTld(String),

    #[error("WHOIS lookup for {domain} failed: {message}")]
    Lookup { domain: String, message: String },

    #[error("WHOIS response could not be parsed")]
    Unparseable,
}
