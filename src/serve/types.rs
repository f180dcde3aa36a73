//! Serve mode shared state.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use tokio::sync::RwLock;

/// Future yielding a freshly rendered report.
pub type RefreshFuture = Pin<Box<dyn Future<Output = anyhow::Result<String>> + Send>>;

/// Re-runs the pipeline and returns the freshly rendered report.
pub type Refresher = Arc<dyn Fn() -> RefreshFuture + Send + Sync>;

/// Shared state for the report server
#[derive(Clone)]
pub struct ReportState {
    /// Last successfully rendered report
    pub html: Arc<RwLock<String>>,
    pub refresh: Refresher,
}

impl ReportState {
    pub fn new(html: String, refresh: Refresher) -> Self {
        ReportState {
            html: Arc::new(RwLock::new(html)),
            refresh,
        }
    }
}
