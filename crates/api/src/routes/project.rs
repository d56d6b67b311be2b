//! Route definitions for the `/projects` resource.
//!
//! Also nests the project-scoped chapter collection under
//! `/projects/{id}/chapters`.

use axum::routing::get;
use axum::Router;

use crate::handlers::{chapter, project};
use crate::state::AppState;

/// Routes mounted at `/projects`.
///
/// ```text
/// GET    /                 -> list
/// POST   /                 -> create
/// GET    /{id}             -> get_by_id
/// DELETE /{id}             -> delete
///
/// GET    /{id}/chapters    -> chapter::list_by_project
/// POST   /{id}/chapters    -> chapter::create
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(project::list).post(project::create))
        .route("/{id}", get(project::get_by_id).delete(project::delete))
        .route(
            "/{id}/chapters",
            get(chapter::list_by_project).post(chapter::create),
        )
}
