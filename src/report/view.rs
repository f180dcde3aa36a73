//! Template-facing view of a `SiteResult`.

use serde::Serialize;

use crate::config::FETCH_TIME_FORMAT;
use crate::models::{Note, Registration, SiteResult};

/// Flattened, display-ready fields of one result.
#[derive(Debug, Serialize)]
pub(super) struct SiteView<'a> {
    domain: &'a str,
    /// `available`, `registered` or `unknown`
    status: &'static str,
    fetched: String,
    created: Option<&'a str>,
    expires: Option<&'a str>,
    registrar_name: Option<&'a str>,
    registrant_name: Option<&'a str>,
    registrant_email: Option<&'a str>,
    title: Option<&'a str>,
    screenshot: Option<String>,
    note: Option<&'a Note>,
    error: Option<&'a str>,
}

impl<'a> From<&'a SiteResult> for SiteView<'a> {
    fn from(site: &'a SiteResult) -> Self {
        let status = match site.registration {
            Registration::Unknown => "unknown",
            Registration::Available => "available",
            Registration::Registered(_) => "registered",
        };
        let info = site.registration.info();
        let registrar = info.and_then(|i| i.registrar.as_ref());
        let registrant = info.and_then(|i| i.registrant.as_ref());

        SiteView {
            domain: &site.domain,
            status,
            fetched: site.fetched_at.format(FETCH_TIME_FORMAT).to_string(),
            created: info.and_then(|i| i.created.as_deref()),
            expires: info.and_then(|i| i.expires.as_deref()),
            registrar_name: registrar.and_then(|c| c.display_name()),
            registrant_name: registrant.and_then(|c| c.display_name()),
            registrant_email: registrant.and_then(|c| c.email.as_deref()),
            title: site.page.as_ref().map(|p| p.title.as_str()),
            screenshot: site.page.as_ref().map(|p| p.screenshot.data_uri()),
            note: site.note.as_ref(),
            error: site.error.as_deref(),
        }
    }
}
