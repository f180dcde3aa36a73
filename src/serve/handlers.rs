//! Report server HTTP handlers.

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use super::types::ReportState;

/// Cached report.
pub async fn report_handler(State(state): State<ReportState>) -> Html<String> {
    Html(state.html.read().await.clone())
}

/// Re-runs the pipeline and swaps in the new report.
///
/// On failure the previous report stays cached and the error is returned as a 500.
pub async fn refresh_handler(State(state): State<ReportState>) -> Response {
    log::info!("Refreshing report");
    match (state.refresh)().await {
        Ok(html) => {
            *state.html.write().await = html.clone();
            Html(html).into_response()
        }
        Err(e) => {
            log::error!("Report refresh failed: {:#}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("refresh failed: {e:#}"),
            )
                .into_response()
        }
    }
}

pub async fn health_handler() -> &'static str {
    "ok"
}
