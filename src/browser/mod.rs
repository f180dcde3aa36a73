//! Browser automation through a local WebDriver server.
//!
//! - `DriverService` owns the driver process (geckodriver by default)
//! - `WebDriverSession` is one browser session, driven with `fantoccini`
//! - `Browser` is the seam the inspector uses, so tests can substitute a fake

mod service;
mod webdriver;

use std::future::Future;

use thiserror::Error;

pub use service::{driver_ready, DriverService};
pub use webdriver::{session_capabilities, WebDriverSession};

/// Failures talking to the browser.
#[derive(Error, Debug)]
pub enum BrowserError {
    #[error("failed to start browser session: {0}")]
    Session(#[from] fantoccini::error::NewSessionError),

    #[error("{0}")]
    Command(#[from] fantoccini::error::CmdError),

    /// The driver did not answer within the command timeout
    #[error("WebDriver {command} timed out")]
    Timeout { command: &'static str },
}

/// A stateful browser: each navigation replaces the current page.
pub trait Browser {
    /// Loads `url` and waits for the page load to finish.
    fn navigate(&mut self, url: &str) -> impl Future<Output = Result<(), BrowserError>> + Send;

    /// Title of the current page.
    fn title(&mut self) -> impl Future<Output = Result<String, BrowserError>> + Send;

    /// PNG screenshot of the current viewport.
    fn screenshot(&mut self) -> impl Future<Output = Result<Vec<u8>, BrowserError>> + Send;
}
