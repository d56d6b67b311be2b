pub mod chapter;
pub mod health;
pub mod project;

use axum::Router;

use crate::error::AppError;
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /projects                      list, create
/// /projects/{id}                 get, delete (cascades to chapters)
/// /projects/{id}/chapters        list (sorted by order), create
///
/// /chapters/{id}                 get, patch, delete
/// ```
///
/// Unmatched paths under `/api` answer with a JSON 404.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/projects", project::router())
        .nest("/chapters", chapter::router())
        .fallback(api_not_found)
}

async fn api_not_found() -> AppError {
    AppError::NotFound("Route")
}
