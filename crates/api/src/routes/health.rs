use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Number of stored projects.
    pub projects: usize,
    /// Number of stored chapters.
    pub chapters: usize,
}

/// GET /health -- returns service status and store counts.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let (status, projects, chapters) = match state.store.stats() {
        Ok(stats) => ("ok", stats.projects, stats.chapters),
        Err(err) => {
            tracing::error!(error = %err, "Store health check failed");
            ("degraded", 0, 0)
        }
    };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        projects,
        chapters,
    })
}

/// Mount health check routes (root-level, NOT under `/api`).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
