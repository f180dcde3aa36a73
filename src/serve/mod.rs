//! HTTP server for the rendered report.
//!
//! Provides three endpoints:
//! - `GET /` - the cached HTML report
//! - `POST /refresh` - re-run the pipeline and replace the cached report
//! - `GET /health` - liveness check, always `ok`
//!
//! Refreshes go through the `Refresher` in the state, which serializes access
//! to the browser session.
//!
//! The server listens on the loopback interface only. Reach it from another
//! machine through an SSH tunnel or a reverse proxy.

mod handlers;
mod types;

use axum::routing::{get, post};
use axum::Router;
use tokio::net::TcpListener;

use handlers::{health_handler, refresh_handler, report_handler};
pub use types::{RefreshFuture, Refresher, ReportState};

/// Builds the report router.
pub fn router(state: ReportState) -> Router {
    Router::new()
        .route("/", get(report_handler))
        .route("/refresh", post(refresh_handler))
        .route("/health", get(health_handler))
        .with_state(state)
}

/// Binds `127.0.0.1:<port>`. Other interfaces are never bound.
pub async fn bind(port: u16) -> Result<TcpListener, anyhow::Error> {
    TcpListener::bind(format!("127.0.0.1:{}", port))
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind report server to port {}: {}", port, e))
}

/// Serves the report on `listener` until `shutdown` resolves.
pub async fn serve_report<F>(
    listener: TcpListener,
    state: ReportState,
    shutdown: F,
) -> Result<(), anyhow::Error>
where
    F: std::future::Future<Output = ()> + Send + 'static,
{
    if let Ok(addr) = listener.local_addr() {
        log::info!("Report server listening on http://{}/", addr);
        log::info!("  - Refresh: POST http://{}/refresh", addr);
    }

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| anyhow::anyhow!("Report server error: {}", e))?;

    Ok(())
}
