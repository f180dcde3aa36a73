// Shared fakes for the inspector seams.
//
// Each fake answers from a fixed per-domain table so a test can describe a
// whole batch of domains up front.

use std::collections::HashMap;
use std::net::{IpAddr, Ipv4Addr};

use hats_domains::browser::{Browser, BrowserError};
use hats_domains::dns::{DnsError, HostResolver};
use hats_domains::models::RegistrationInfo;
use hats_domains::whois::{WhoisError, WhoisLookup, WhoisOutcome};

/// What WHOIS says about a domain.
#[allow(dead_code)] // Not every variant is used by every test file
#[derive(Clone)]
pub enum WhoisAnswer {
    Registered(RegistrationInfo),
    NotFound,
    Fails,
}

/// WHOIS fake; domains missing from the table are registered with no details.
#[derive(Default)]
pub struct TableWhois {
    pub answers: HashMap<String, WhoisAnswer>,
}

#[allow(dead_code)]
impl TableWhois {
    pub fn with(mut self, domain: &str, answer: WhoisAnswer) -> Self {
        self.answers.insert(domain.to_string(), answer);
        self
    }
}

impl WhoisLookup for TableWhois {
    async fn lookup(&self, domain: &str) -> Result<WhoisOutcome, WhoisError> {
        match self.answers.get(domain) {
            Some(WhoisAnswer::NotFound) => Ok(WhoisOutcome::NotFound),
            Some(WhoisAnswer::Fails) => Err(WhoisError::Timeout {
                domain: domain.to_string(),
            }),
            Some(WhoisAnswer::Registered(info)) => Ok(WhoisOutcome::Found(info.clone())),
            None => Ok(WhoisOutcome::Found(RegistrationInfo {
                created: Some("2003-05-13T18:24:05Z".to_string()),
                ..Default::default()
            })),
        }
    }
}

/// Resolves everything except the listed hosts.
#[derive(Default)]
pub struct TableResolver {
    pub unresolvable: Vec<String>,
}

impl HostResolver for TableResolver {
    async fn resolve(&self, host: &str) -> Result<Vec<IpAddr>, DnsError> {
        if self.unresolvable.iter().any(|h| h == host) {
            Err(DnsError::NoRecords {
                host: host.to_string(),
            })
        } else {
            Ok(vec![IpAddr::V4(Ipv4Addr::new(192, 0, 2, 1))])
        }
    }
}

/// Browser fake that titles each page after its URL and records every call.
#[derive(Default)]
pub struct ScriptedBrowser {
    pub calls: Vec<String>,
    pub current: Option<String>,
    /// URLs whose navigation fails
    pub unreachable: Vec<String>,
    /// Append the running navigation count to each title
    pub number_visits: bool,
    pub visits: usize,
}

impl Browser for ScriptedBrowser {
    async fn navigate(&mut self, url: &str) -> Result<(), BrowserError> {
        self.calls.push(format!("navigate {url}"));
        if self.unreachable.iter().any(|u| u == url) {
            return Err(BrowserError::Timeout {
                command: "navigate",
            });
        }
        self.current = Some(url.to_string());
        self.visits += 1;
        Ok(())
    }

    async fn title(&mut self) -> Result<String, BrowserError> {
        self.calls.push("title".to_string());
        let page = self.current.clone().unwrap_or_default();
        if self.number_visits {
            Ok(format!("Welcome to {page} (visit {})", self.visits))
        } else {
            Ok(format!("Welcome to {page}"))
        }
    }

    async fn screenshot(&mut self) -> Result<Vec<u8>, BrowserError> {
        self.calls.push("screenshot".to_string());
        Ok(vec![0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a])
    }
}
