//! Route definitions for the `/chapters` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::chapter;
use crate::state::AppState;

/// Routes mounted at `/chapters`.
///
/// ```text
/// GET    /{id}    -> get_by_id
/// PATCH  /{id}    -> update
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/{id}",
        get(chapter::get_by_id)
            .patch(chapter::update)
            .delete(chapter::delete),
    )
}
