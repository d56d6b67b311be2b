//! Repository for projects.

use inkwell_core::error::CoreError;
use inkwell_core::types::DbId;

use crate::models::project::{CreateProject, Project};
use crate::MemStore;

/// Provides CRUD operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project, returning the created record.
    pub async fn create(store: &MemStore, input: &CreateProject) -> Result<Project, CoreError> {
        let mut state = store.write()?;
        let id = state.allocate_project_id()?;
        let project = Project {
            id,
            name: input.name.clone(),
            created_at: chrono::Utc::now(),
        };
        state.projects.insert(id, project.clone());
        tracing::debug!(project_id = id, "Project created");
        Ok(project)
    }

    /// Find a project by id.
    pub async fn find_by_id(store: &MemStore, id: DbId) -> Result<Option<Project>, CoreError> {
        Ok(store.read()?.projects.get(&id).cloned())
    }

    /// Whether a project with the given id exists.
    pub async fn exists(store: &MemStore, id: DbId) -> Result<bool, CoreError> {
        Ok(store.read()?.projects.contains_key(&id))
    }

    /// List all projects in id (creation) order.
    pub async fn list(store: &MemStore) -> Result<Vec<Project>, CoreError> {
        Ok(store.read()?.projects.values().cloned().collect())
    }

    /// Delete a project and every chapter that belongs to it.
    ///
    /// Deleting an unknown id is a no-op. Returns `true` if a project was
    /// removed.
    pub async fn delete(store: &MemStore, id: DbId) -> Result<bool, CoreError> {
        let mut state = store.write()?;
        let removed = state.projects.remove(&id).is_some();

        let before = state.chapters.len();
        state.chapters.retain(|_, chapter| chapter.project_id != id);
        let removed_chapters = before - state.chapters.len();

        if removed || removed_chapters > 0 {
            tracing::debug!(project_id = id, removed_chapters, "Project deleted");
        }
        Ok(removed)
    }
}
