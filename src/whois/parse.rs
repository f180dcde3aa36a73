//! WHOIS data conversion.
//!
//! `whois-service` does the protocol work and the structured parsing. What is
//! left here is turning its answer into a `WhoisOutcome`: spotting "not found"
//! answers in the raw text, picking the contact fields the structured data does
//! not carry, and dropping the placeholder text registrars print in place of
//! real contact data.

use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use regex::Regex;
use whois_service::WhoisResponse;

use super::types::{WhoisError, WhoisOutcome};
use crate::models::{Contact, RegistrationInfo};

/// Markers registries use to say a domain is not registered.
static NOT_FOUND: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?im)^\s*(no match for|not found|no data found|no entries found|domain not found|(domain\s+)?status:\s*free\b|the queried object does not exist)",
    )
    .expect("NOT_FOUND pattern is valid")
});

/// The structured fields of a `whois-service` answer that end up in the report.
#[derive(Debug, Clone, Default)]
pub(crate) struct RegistryFields {
    pub registrar: Option<String>,
    pub creation_date: Option<String>,
    pub expiration_date: Option<String>,
    pub registrant_name: Option<String>,
    pub name_servers: Vec<String>,
}

/// Converts a `whois-service` response the way its structured data allows.
pub(crate) fn convert_response(response: &WhoisResponse) -> Result<WhoisOutcome, WhoisError> {
    let fields = response.parsed_data.as_ref().map(|parsed| RegistryFields {
        registrar: parsed.registrar.clone(),
        creation_date: parsed.creation_date.clone(),
        expiration_date: parsed.expiration_date.clone(),
        registrant_name: parsed.registrant_name.clone(),
        name_servers: parsed.name_servers.clone(),
    });
    convert_parsed_data(&response.raw_data, fields)
}

/// Builds the outcome from the raw answer and its structured fields.
///
/// Dates are kept exactly as printed; the report decides how to show them.
///
/// # Errors
///
/// Returns `WhoisError::Unparseable` when the answer neither says the domain is
/// unregistered nor carries any registration field.
pub(crate) fn convert_parsed_data(
    raw: &str,
    fields: Option<RegistryFields>,
) -> Result<WhoisOutcome, WhoisError> {
    if NOT_FOUND.is_match(raw) {
        return Ok(WhoisOutcome::NotFound);
    }
    let Some(fields) = fields else {
        return Err(WhoisError::Unparseable);
    };

    let registrar = Contact {
        name: fields.registrar.filter(|v| !is_redacted(v)),
        organization: None,
        email: find_email(raw, "registrar abuse contact email"),
    };
    let registrant = Contact {
        name: fields.registrant_name.filter(|v| !is_redacted(v)),
        organization: field_value(raw, &["registrant organization", "registrant organisation"]),
        email: find_email(raw, "registrant email"),
    };

    let mut name_servers: Vec<String> = Vec::new();
    for ns in fields.name_servers {
        let ns = ns.trim().trim_end_matches('.').to_lowercase();
        if !ns.is_empty() && !name_servers.contains(&ns) {
            name_servers.push(ns);
        }
    }

    let info = RegistrationInfo {
        created: fields.creation_date.filter(|v| !v.trim().is_empty()),
        expires: fields.expiration_date.filter(|v| !v.trim().is_empty()),
        registrar: (!registrar.is_empty()).then_some(registrar),
        registrant: (!registrant.is_empty()).then_some(registrant),
        name_servers,
    };

    if info == RegistrationInfo::default() {
        return Err(WhoisError::Unparseable);
    }
    Ok(WhoisOutcome::Found(info))
}

/// Placeholder text registrars print instead of withheld contact data.
fn is_redacted(value: &str) -> bool {
    let lower = value.to_lowercase();
    lower.contains("redacted")
        || lower.contains("please query the rdds")
        || lower.contains("not disclosed")
}

/// First non-placeholder value of any of `keys` in a `Key: value` answer.
fn field_value(raw: &str, keys: &[&str]) -> Option<String> {
    raw.lines().find_map(|line| {
        let (key, value) = line.trim().split_once(':')?;
        let value = value.trim();
        (keys.contains(&key.trim().to_lowercase().as_str())
            && !value.is_empty()
            && !is_redacted(value))
        .then(|| value.to_string())
    })
}

/// Email under `key`, only if it looks like an address.
///
/// Registrars often print a sentence or a web-form URL here.
pub(crate) fn find_email(raw: &str, key: &str) -> Option<String> {
    raw.lines().find_map(|line| {
        let (k, value) = line.trim().split_once(':')?;
        if !k.trim().eq_ignore_ascii_case(key) {
            return None;
        }
        let value = value.trim();
        (value.contains('@') && !value.contains(char::is_whitespace) && !is_redacted(value))
            .then(|| value.to_string())
    })
}

/// Attempts to parse a WHOIS date string.
///
/// Tries RFC 3339 first, then the formats registries commonly print.
pub fn parse_date_string(date_str: &str) -> Option<DateTime<Utc>> {
    let date_str = date_str.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(date_str) {
        return Some(dt.with_timezone(&Utc));
    }

    let formats = [
        "%Y-%m-%dT%H:%M:%S%.fZ",
        "%Y-%m-%dT%H:%M:%SZ",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d",
        "%Y.%m.%d",
        "%d-%b-%Y",
        "%d/%m/%Y",
    ];

    for format in &formats {
        if let Ok(dt) = DateTime::parse_from_str(date_str, format) {
            return Some(dt.with_timezone(&Utc));
        }
        if let Ok(naive_dt) = chrono::NaiveDateTime::parse_from_str(date_str, format) {
            return Some(naive_dt.and_utc());
        }
        if let Ok(naive_date) = chrono::NaiveDate::parse_from_str(date_str, format) {
            return Some(naive_date.and_hms_opt(0, 0, 0)?.and_utc());
        }
    }

    None
}
