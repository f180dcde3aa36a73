//! Browser session on top of `fantoccini`.

use std::future::Future;
use std::time::Duration;

use fantoccini::{Client, ClientBuilder};
use serde_json::{json, Map, Value};

use super::{Browser, BrowserError};

/// Slack on top of the page-load timeout before a command is abandoned.
///
/// The driver enforces the page-load timeout itself; this only guards
/// against a driver that stops answering.
const COMMAND_MARGIN: Duration = Duration::from_secs(5);

/// New-session capabilities: headless Firefox with a page-load timeout.
pub fn session_capabilities(page_load_timeout: Duration) -> Map<String, Value> {
    let mut caps = Map::new();
    caps.insert("browserName".to_string(), json!("firefox"));
    caps.insert(
        "moz:firefoxOptions".to_string(),
        json!({ "args": ["-headless"] }),
    );
    let page_load_ms = u64::try_from(page_load_timeout.as_millis()).unwrap_or(u64::MAX);
    caps.insert("timeouts".to_string(), json!({ "pageLoad": page_load_ms }));
    caps
}

/// An open browser session on a WebDriver server.
///
/// Call [`WebDriverSession::quit`] when done; dropping the session leaves the
/// browser window open until the driver process exits.
pub struct WebDriverSession {
    client: Client,
    command_timeout: Duration,
}

impl WebDriverSession {
    /// Opens a new headless Firefox session on the driver at `base_url`.
    ///
    /// The driver gives up on a page after `page_load_timeout`, so a slow
    /// site never holds up the next navigation.
    pub async fn start(base_url: &str, page_load_timeout: Duration) -> Result<Self, BrowserError> {
        let mut builder = ClientBuilder::native();
        builder.capabilities(session_capabilities(page_load_timeout));
        let client = builder.connect(base_url).await?;
        log::info!("Browser session started on {}", base_url);

        Ok(WebDriverSession {
            client,
            command_timeout: page_load_timeout + COMMAND_MARGIN,
        })
    }

    async fn bounded<T, F>(&self, command: &'static str, future: F) -> Result<T, BrowserError>
    where
        F: Future<Output = Result<T, fantoccini::error::CmdError>>,
    {
        tokio::time::timeout(self.command_timeout, future)
            .await
            .map_err(|_| BrowserError::Timeout { command })?
            .map_err(BrowserError::from)
    }

    /// Closes the browser and ends the session.
    pub async fn quit(self) -> Result<(), BrowserError> {
        self.client.close().await?;
        log::info!("Browser session closed");
        Ok(())
    }
}

impl Browser for WebDriverSession {
    async fn navigate(&mut self, url: &str) -> Result<(), BrowserError> {
        log::debug!("WebDriver navigate -> {}", url);
        self.bounded("navigate", self.client.goto(url)).await
    }

    async fn title(&mut self) -> Result<String, BrowserError> {
        self.bounded("title", self.client.title()).await
    }

    async fn screenshot(&mut self) -> Result<Vec<u8>, BrowserError> {
        self.bounded("screenshot", self.client.screenshot()).await
    }
}
