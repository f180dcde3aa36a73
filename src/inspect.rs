//! Per-domain triage: registration check, DNS check, page capture.
//!
//! Each domain goes through at most three stages and stops at the first one
//! that rules out the next:
//!
//! 1. WHOIS. A failed lookup is an error; an unregistered domain is noted as
//!    available. Neither has anything further to check.
//! 2. DNS. A registered domain that does not resolve gets a note.
//! 3. Browser. The root page is loaded, its title read and a screenshot taken.
//!    Any failure here is an error, but the registration data is kept.
//!
//! Every operation is attempted once.

use crate::browser::Browser;
use crate::dns::HostResolver;
use crate::domain::{registration_url, site_url};
use crate::error_handling::{ErrorType, InfoType, ProcessingStats, WarningType};
use crate::models::{Note, PageCapture, Registration, Screenshot, SiteResult};
use crate::whois::{WhoisLookup, WhoisOutcome};

/// A browser-stage failure, tagged with the step that failed.
struct StageFailure {
    kind: ErrorType,
    message: String,
}

impl StageFailure {
    fn new(kind: ErrorType, message: String) -> Self {
        StageFailure { kind, message }
    }
}

/// Runs the triage pipeline over a sequence of domains with one set of
/// collaborators. The browser session is reused for every domain.
pub struct Inspector<W, R, B> {
    whois: W,
    resolver: R,
    browser: B,
}

impl<W, R, B> Inspector<W, R, B>
where
    W: WhoisLookup,
    R: HostResolver,
    B: Browser,
{
    pub fn new(whois: W, resolver: R, browser: B) -> Self {
        Inspector {
            whois,
            resolver,
            browser,
        }
    }

    /// Gives the browser back, e.g. to close its session.
    pub fn into_browser(self) -> B {
        self.browser
    }

    /// Inspects `domains` one after another, in order.
    ///
    /// Per-domain failures are recorded on that domain's result and never stop
    /// the batch.
    pub async fn inspect_all(
        &mut self,
        domains: &[String],
        stats: &ProcessingStats,
    ) -> Vec<SiteResult> {
        let mut sites = Vec::with_capacity(domains.len());
        for (index, domain) in domains.iter().enumerate() {
            log::info!(
                "Retrieving info for {} ({}/{})",
                domain,
                index + 1,
                domains.len()
            );
            sites.push(self.inspect_site(domain, stats).await);
        }
        sites
    }

    /// Produces the result record for one domain.
    pub async fn inspect_site(&mut self, domain: &str, stats: &ProcessingStats) -> SiteResult {
        let mut site = SiteResult::new(domain);

        let info = match self.whois.lookup(domain).await {
            Err(e) => {
                log::warn!("WHOIS lookup for {} failed: {}", domain, e);
                stats.increment_error(ErrorType::WhoisQueryError);
                site.error = Some(format!("WHOIS lookup failed: {e}"));
                return site;
            }
            Ok(WhoisOutcome::NotFound) => {
                log::info!("{} is available", domain);
                stats.increment_info(InfoType::DomainAvailable);
                site.registration = Registration::Available;
                site.note = Some(available_note(domain));
                return site;
            }
            Ok(WhoisOutcome::Found(info)) => info,
        };

        if info.created.is_none() {
            stats.increment_warning(WarningType::MissingCreationDate);
        }
        stats.increment_info(InfoType::DomainRegistered);
        site.registration = Registration::Registered(info);

        if let Err(e) = self.resolver.resolve(domain).await {
            log::warn!("{} is registered but does not resolve: {}", domain, e);
            stats.increment_warning(WarningType::DnsLookupFailed);
            site.note = Some(Note::new(format!("DNS lookup failed: {e}")));
            return site;
        }

        match self.capture_page(domain).await {
            Ok(page) => {
                log::debug!("{} has title {:?}", domain, page.title);
                stats.increment_info(InfoType::PageCaptured);
                site.page = Some(page);
            }
            Err(failure) => {
                log::warn!("{}: {}", domain, failure.message);
                stats.increment_error(failure.kind);
                site.error = Some(failure.message);
            }
        }

        site
    }

    async fn capture_page(&mut self, domain: &str) -> Result<PageCapture, StageFailure> {
        let url = site_url(domain)
            .map_err(|e| StageFailure::new(ErrorType::BrowserNavigateError, format!("{e:#}")))?;

        self.browser.navigate(url.as_str()).await.map_err(|e| {
            StageFailure::new(
                ErrorType::BrowserNavigateError,
                format!("Failed to load {url}: {e}"),
            )
        })?;

        let title = self.browser.title().await.map_err(|e| {
            StageFailure::new(
                ErrorType::BrowserTitleError,
                format!("Failed to read the page title: {e}"),
            )
        })?;

        let png = self.browser.screenshot().await.map_err(|e| {
            StageFailure::new(
                ErrorType::BrowserScreenshotError,
                format!("Failed to take a screenshot: {e}"),
            )
        })?;

        Ok(PageCapture {
            title,
            screenshot: Screenshot::from_png(png),
        })
    }
}

fn available_note(domain: &str) -> Note {
    match registration_url(domain) {
        Ok(link) => Note::new(format!("Available! Register it at {link}")).with_link(link.as_str()),
        Err(e) => {
            log::debug!("No registration link for {}: {:#}", domain, e);
            Note::new(format!("Available! {domain} is not registered."))
        }
    }
}
