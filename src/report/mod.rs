//! HTML report rendering.
//!
//! The report is one self-contained page: a summary list followed by one
//! section per domain, with screenshots inlined as `data:` URIs. Rendering is a
//! pure function of the result list; the only output is the writer handed in.

mod view;

use std::io::Write;

use minijinja::{context, Environment};
use thiserror::Error;

use crate::config::DATE_FORMAT;
use crate::models::SiteResult;
use crate::whois::parse_date_string;

use view::SiteView;

/// Name ends in `.html` so minijinja auto-escapes everything not marked safe.
const TEMPLATE_NAME: &str = "report.html";
const TEMPLATE: &str = include_str!("template.html");

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("report template error: {0}")]
    Template(#[from] minijinja::Error),
}

/// Formats a WHOIS timestamp for display (`Tue May 13 2003`).
///
/// Returns `None` when the string is not in any recognized date format.
pub fn parse_time(raw: &str) -> Option<String> {
    parse_date_string(raw).map(|dt| dt.format(DATE_FORMAT).to_string())
}

fn parse_time_filter(raw: Option<String>) -> Option<String> {
    raw.as_deref().and_then(parse_time)
}

fn environment() -> Result<Environment<'static>, ReportError> {
    let mut env = Environment::new();
    env.add_filter("parse_time", parse_time_filter);
    env.add_template(TEMPLATE_NAME, TEMPLATE)?;
    Ok(env)
}

/// Renders the report for `sites`, in order, into `out`.
///
/// # Errors
///
/// Returns `ReportError::Template` if the template fails to compile or render,
/// including when writing to `out` fails. Whatever was written before the
/// failure is left in `out`.
pub fn render_report<W: Write>(sites: &[SiteResult], out: W) -> Result<(), ReportError> {
    let env = environment()?;
    let template = env.get_template(TEMPLATE_NAME)?;
    let views: Vec<SiteView<'_>> = sites.iter().map(SiteView::from).collect();
    template.render_captured_to(context! { sites => views }, out)?;
    Ok(())
}

/// Renders the report into a `String`.
pub fn render_report_to_string(sites: &[SiteResult]) -> Result<String, ReportError> {
    let env = environment()?;
    let template = env.get_template(TEMPLATE_NAME)?;
    let views: Vec<SiteView<'_>> = sites.iter().map(SiteView::from).collect();
    Ok(template.render(context! { sites => views })?)
}
