//! Per-domain result records.
//!
//! A `SiteResult` is assembled by the inspector stage by stage and then handed,
//! unchanged, to the report renderer. Stages that did not run leave their part
//! of the record empty, so which stage a domain reached can be read off the
//! record itself.

use std::fmt;

use base64::Engine;
use chrono::{DateTime, Local};
use serde::Serialize;

/// A WHOIS contact (registrar or registrant).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Contact {
    pub name: Option<String>,
    pub organization: Option<String>,
    pub email: Option<String>,
}

impl Contact {
    /// True when no field was filled in.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.organization.is_none() && self.email.is_none()
    }

    /// Person name if given, otherwise the organization.
    pub fn display_name(&self) -> Option<&str> {
        self.name.as_deref().or(self.organization.as_deref())
    }
}

/// Registration metadata for a domain that WHOIS reports as taken.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationInfo {
    /// Creation date exactly as WHOIS printed it
    pub created: Option<String>,
    /// Expiry date exactly as WHOIS printed it
    pub expires: Option<String>,
    pub registrar: Option<Contact>,
    pub registrant: Option<Contact>,
    pub name_servers: Vec<String>,
}

/// Outcome of the registration check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Registration {
    /// The WHOIS lookup itself failed
    Unknown,
    /// WHOIS has no record of the domain
    Available,
    Registered(RegistrationInfo),
}

impl Registration {
    pub fn info(&self) -> Option<&RegistrationInfo> {
        match self {
            Registration::Registered(info) => Some(info),
            _ => None,
        }
    }
}

/// PNG screenshot bytes.
#[derive(Clone, PartialEq, Eq)]
pub struct Screenshot(Vec<u8>);

impl Screenshot {
    pub fn from_png(bytes: Vec<u8>) -> Self {
        Screenshot(bytes)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// `data:` URI for inlining the image into HTML.
    pub fn data_uri(&self) -> String {
        format!(
            "data:image/png;base64,{}",
            base64::engine::general_purpose::STANDARD.encode(&self.0)
        )
    }
}

impl fmt::Debug for Screenshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Screenshot({} bytes)", self.0.len())
    }
}

/// What the browser saw at `http://<domain>/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageCapture {
    pub title: String,
    pub screenshot: Screenshot,
}

/// Informational annotation shown with a result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Note {
    pub message: String,
    pub link: Option<String>,
}

impl Note {
    pub fn new(message: impl Into<String>) -> Self {
        Note {
            message: message.into(),
            link: None,
        }
    }

    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }
}

/// Everything learned about one candidate domain during a run.
#[derive(Debug, Clone)]
pub struct SiteResult {
    pub domain: String,
    pub fetched_at: DateTime<Local>,
    pub registration: Registration,
    pub page: Option<PageCapture>,
    pub note: Option<Note>,
    /// Why processing of this domain stopped early
    pub error: Option<String>,
}

impl SiteResult {
    /// Fresh record stamped with the current time, before any stage has run.
    pub fn new(domain: impl Into<String>) -> Self {
        SiteResult {
            domain: domain.into(),
            fetched_at: Local::now(),
            registration: Registration::Unknown,
            page: None,
            note: None,
            error: None,
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self.registration, Registration::Available)
    }
}
