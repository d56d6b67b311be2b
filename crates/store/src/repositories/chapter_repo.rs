//! Repository for chapters.

use inkwell_core::error::CoreError;
use inkwell_core::types::DbId;

use crate::models::chapter::{Chapter, CreateChapter, UpdateChapter};
use crate::MemStore;

/// Provides CRUD operations for chapters.
pub struct ChapterRepo;

impl ChapterRepo {
    /// Insert a new chapter under an existing project.
    ///
    /// Fails with `NotFound` for the project if it does not exist; nothing is
    /// inserted in that case. `created_at` and `updated_at` share one instant.
    pub async fn create(store: &MemStore, input: &CreateChapter) -> Result<Chapter, CoreError> {
        let mut state = store.write()?;
        if !state.projects.contains_key(&input.project_id) {
            return Err(CoreError::NotFound {
                entity: "Project",
                id: input.project_id,
            });
        }

        let id = state.allocate_chapter_id()?;
        let now = chrono::Utc::now();
        let chapter = Chapter {
            id,
            project_id: input.project_id,
            title: input.title.clone(),
            content: input.content.clone(),
            order: input.order,
            created_at: now,
            updated_at: now,
        };
        state.chapters.insert(id, chapter.clone());
        tracing::debug!(chapter_id = id, project_id = input.project_id, "Chapter created");
        Ok(chapter)
    }

    /// Find a chapter by id.
    pub async fn find_by_id(store: &MemStore, id: DbId) -> Result<Option<Chapter>, CoreError> {
        Ok(store.read()?.chapters.get(&id).cloned())
    }

    /// List a project's chapters ordered by `order` ascending.
    ///
    /// Chapters sharing an `order` value keep creation order. An unknown
    /// project yields an empty list.
    pub async fn list_by_project(
        store: &MemStore,
        project_id: DbId,
    ) -> Result<Vec<Chapter>, CoreError> {
        let mut chapters: Vec<Chapter> = store
            .read()?
            .chapters
            .values()
            .filter(|c| c.project_id == project_id)
            .cloned()
            .collect();
        chapters.sort_by_key(|c| c.order);
        Ok(chapters)
    }

    /// Merge `input` over an existing chapter and refresh `updated_at`.
    ///
    /// Fields absent from `input` are left unchanged.
    pub async fn update(
        store: &MemStore,
        id: DbId,
        input: &UpdateChapter,
    ) -> Result<Chapter, CoreError> {
        let mut state = store.write()?;
        let chapter = state
            .chapters
            .get_mut(&id)
            .ok_or(CoreError::NotFound {
                entity: "Chapter",
                id,
            })?;

        input.apply_to(chapter);
        chapter.updated_at = chrono::Utc::now().max(chapter.updated_at);
        tracing::debug!(chapter_id = id, "Chapter updated");
        Ok(chapter.clone())
    }

    /// Delete a chapter. Unknown ids are a no-op. Returns `true` if a chapter
    /// was removed.
    pub async fn delete(store: &MemStore, id: DbId) -> Result<bool, CoreError> {
        let removed = store.write()?.chapters.remove(&id).is_some();
        if removed {
            tracing::debug!(chapter_id = id, "Chapter deleted");
        }
        Ok(removed)
    }
}
