//! WebDriver server process management.

use std::path::Path;
use std::process::Stdio;

use tokio::process::{Child, Command};
use tokio::time::Instant;

use crate::config::{DRIVER_POLL_INTERVAL, DRIVER_STARTUP_TIMEOUT};
use crate::error_handling::InitializationError;

/// A running WebDriver server.
///
/// The process is killed by [`DriverService::stop`], and also when the value
/// is dropped, so an early return or panic never leaves it behind.
#[derive(Debug)]
pub struct DriverService {
    child: Child,
    base_url: String,
}

impl DriverService {
    /// Launches `path --port <port>` and waits until the server reports ready.
    ///
    /// With `debug` the driver logs at trace level to this process's stdout/stderr;
    /// otherwise its output is discarded.
    ///
    /// # Errors
    ///
    /// Returns `InitializationError::DriverError` if the binary cannot be
    /// launched, exits early, or is not ready within `DRIVER_STARTUP_TIMEOUT`.
    pub async fn start(
        path: &Path,
        port: u16,
        debug: bool,
        client: &reqwest::Client,
    ) -> Result<Self, InitializationError> {
        let mut command = Command::new(path);
        command.arg("--port").arg(port.to_string()).kill_on_drop(true);
        if debug {
            command
                .arg("--log")
                .arg("trace")
                .stdout(Stdio::inherit())
                .stderr(Stdio::inherit());
        } else {
            command.stdout(Stdio::null()).stderr(Stdio::null());
        }

        let child = command.spawn().map_err(|e| {
            InitializationError::DriverError(format!("failed to launch {}: {e}", path.display()))
        })?;
        log::info!("Started {} on port {}", path.display(), port);

        let mut service = DriverService {
            child,
            base_url: format!("http://127.0.0.1:{port}"),
        };
        service.wait_until_ready(client).await?;
        Ok(service)
    }

    async fn wait_until_ready(&mut self, client: &reqwest::Client) -> Result<(), InitializationError> {
        let deadline = Instant::now() + DRIVER_STARTUP_TIMEOUT;
        loop {
            match self.child.try_wait() {
                Ok(Some(status)) => {
                    return Err(InitializationError::DriverError(format!(
                        "driver exited before becoming ready ({status})"
                    )))
                }
                Ok(None) => {}
                Err(e) => {
                    return Err(InitializationError::DriverError(format!(
                        "cannot poll driver process: {e}"
                    )))
                }
            }

            if driver_ready(client, &self.base_url).await {
                log::debug!("Driver at {} is ready", self.base_url);
                return Ok(());
            }
            if Instant::now() >= deadline {
                return Err(InitializationError::DriverError(format!(
                    "driver at {} not ready after {:?}",
                    self.base_url, DRIVER_STARTUP_TIMEOUT
                )));
            }
            tokio::time::sleep(DRIVER_POLL_INTERVAL).await;
        }
    }

    /// Base URL for WebDriver commands.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Kills the driver process and waits for it to exit.
    pub async fn stop(mut self) {
        match self.child.kill().await {
            Ok(()) => log::info!("Stopped browser driver"),
            Err(e) => log::warn!("Failed to stop browser driver: {}", e),
        }
    }
}

/// True when `GET <base_url>/status` answers with `value.ready == true`.
pub async fn driver_ready(client: &reqwest::Client, base_url: &str) -> bool {
    let url = format!("{}/status", base_url.trim_end_matches('/'));
    let Ok(response) = client.get(url).send().await else {
        return false;
    };
    let Ok(body) = response.json::<serde_json::Value>().await else {
        return false;
    };
    body.pointer("/value/ready")
        .and_then(serde_json::Value::as_bool)
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[tokio::test]
    async fn test_start_missing_binary_fails() {
        let client = reqwest::Client::new();
        let result = DriverService::start(
            &PathBuf::from("definitely/not/a/driver"),
            4444,
            false,
            &client,
        )
        .await;
        match result {
            Err(InitializationError::DriverError(message)) => {
                assert!(message.contains("failed to launch"), "{message}")
            }
            other => panic!("expected DriverError, got {other:?}"),
        }
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_start_driver_that_exits_fails() {
        // `true` ignores its arguments and exits immediately
        let client = reqwest::Client::new();
        let result = DriverService::start(&PathBuf::from("true"), 1, false, &client).await;
        match result {
            Err(InitializationError::DriverError(message)) => {
                assert!(message.contains("exited") || message.contains("not ready"), "{message}")
            }
            other => panic!("expected DriverError, got {other:?}"),
        }
    }
}
