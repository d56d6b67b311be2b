//! Handlers for chapters, both project-scoped and top-level.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use inkwell_core::error::CoreError;
use inkwell_store::models::chapter::{Chapter, CreateChapter, UpdateChapter};
use inkwell_store::repositories::ChapterRepo;

use crate::error::AppResult;
use crate::extract::{RecordId, ValidatedJson};
use crate::state::AppState;

/// GET /api/projects/{id}/chapters
///
/// Sorted by `order`. An unknown project yields an empty list.
pub async fn list_by_project(
    State(state): State<AppState>,
    RecordId(project_id): RecordId,
) -> AppResult<Json<Vec<Chapter>>> {
    let chapters = match project_id {
        Some(project_id) => ChapterRepo::list_by_project(&state.store, project_id).await?,
        None => Vec::new(),
    };
    Ok(Json(chapters))
}

/// POST /api/projects/{id}/chapters
pub async fn create(
    State(state): State<AppState>,
    project_id: RecordId,
    ValidatedJson(mut input): ValidatedJson<CreateChapter>,
) -> AppResult<Json<Chapter>> {
    input.project_id = project_id.require("Project")?;
    let chapter = ChapterRepo::create(&state.store, &input).await?;
    Ok(Json(chapter))
}

/// GET /api/chapters/{id}
pub async fn get_by_id(State(state): State<AppState>, id: RecordId) -> AppResult<Json<Chapter>> {
    let id = id.require("Chapter")?;
    let chapter = ChapterRepo::find_by_id(&state.store, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Chapter",
            id,
        })?;
    Ok(Json(chapter))
}

/// PATCH /api/chapters/{id}
pub async fn update(
    State(state): State<AppState>,
    id: RecordId,
    ValidatedJson(input): ValidatedJson<UpdateChapter>,
) -> AppResult<Json<Chapter>> {
    let id = id.require("Chapter")?;
    let chapter = ChapterRepo::update(&state.store, id, &input).await?;
    Ok(Json(chapter))
}

/// DELETE /api/chapters/{id}
pub async fn delete(
    State(state): State<AppState>,
    RecordId(id): RecordId,
) -> AppResult<StatusCode> {
    if let Some(id) = id {
        ChapterRepo::delete(&state.store, id).await?;
    }
    Ok(StatusCode::NO_CONTENT)
}
