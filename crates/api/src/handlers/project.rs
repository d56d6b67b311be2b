//! Handlers for the `/projects` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use inkwell_core::error::CoreError;
use inkwell_store::models::project::{CreateProject, Project};
use inkwell_store::repositories::ProjectRepo;

use crate::error::AppResult;
use crate::extract::{RecordId, ValidatedJson};
use crate::state::AppState;

/// POST /api/projects
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateProject>,
) -> AppResult<Json<Project>> {
    let project = ProjectRepo::create(&state.store, &input).await?;
    Ok(Json(project))
}

/// GET /api/projects
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Project>>> {
    let projects = ProjectRepo::list(&state.store).await?;
    Ok(Json(projects))
}

/// GET /api/projects/{id}
pub async fn get_by_id(State(state): State<AppState>, id: RecordId) -> AppResult<Json<Project>> {
    let id = id.require("Project")?;
    let project = ProjectRepo::find_by_id(&state.store, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Project",
            id,
        })?;
    Ok(Json(project))
}

/// DELETE /api/projects/{id}
///
/// Idempotent: answers 204 whether or not the project existed. Chapters of
/// the project are removed with it.
pub async fn delete(
    State(state): State<AppState>,
    RecordId(id): RecordId,
) -> AppResult<StatusCode> {
    if let Some(id) = id {
        ProjectRepo::delete(&state.store, id).await?;
    }
    Ok(StatusCode::NO_CONTENT)
}
