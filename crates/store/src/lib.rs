//! In-memory persistence for projects and chapters.
//!
//! [`MemStore`] owns both entity maps and their id counters behind a single
//! lock, so every mutation (including cascade deletes) is atomic. State lives
//! for the lifetime of the process only.

use std::collections::BTreeMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use inkwell_core::error::CoreError;
use inkwell_core::types::DbId;

use crate::models::chapter::Chapter;
use crate::models::project::Project;

pub mod models;
pub mod repositories;

/// The maps and counters guarded by [`MemStore`].
#[derive(Debug)]
pub(crate) struct StoreState {
    pub(crate) projects: BTreeMap<DbId, Project>,
    pub(crate) chapters: BTreeMap<DbId, Chapter>,
    next_project_id: DbId,
    next_chapter_id: DbId,
}

impl StoreState {
    fn new() -> Self {
        Self {
            projects: BTreeMap::new(),
            chapters: BTreeMap::new(),
            next_project_id: 1,
            next_chapter_id: 1,
        }
    }

    /// Reserve the next project id. Counters only move forward.
    pub(crate) fn allocate_project_id(&mut self) -> Result<DbId, CoreError> {
        allocate(&mut self.next_project_id, "project")
    }

    /// Reserve the next chapter id. Independent of project ids.
    pub(crate) fn allocate_chapter_id(&mut self) -> Result<DbId, CoreError> {
        allocate(&mut self.next_chapter_id, "chapter")
    }
}

fn allocate(counter: &mut DbId, kind: &str) -> Result<DbId, CoreError> {
    let id = *counter;
    *counter = id
        .checked_add(1)
        .ok_or_else(|| CoreError::Internal(format!("{kind} id space exhausted")))?;
    Ok(id)
}

/// Entity counts reported by the health endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreStats {
    pub projects: usize,
    pub chapters: usize,
}

/// Shared handle to the in-memory store.
///
/// Cloning is cheap and every clone sees the same data. Build a fresh one per
/// test for isolation.
#[derive(Debug, Clone)]
pub struct MemStore {
    inner: Arc<RwLock<StoreState>>,
}

impl MemStore {
    /// Create an empty store with both id counters at 1.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(StoreState::new())),
        }
    }

    pub(crate) fn read(&self) -> Result<RwLockReadGuard<'_, StoreState>, CoreError> {
        self.inner
            .read()
            .map_err(|_| CoreError::Internal("store lock poisoned".into()))
    }

    pub(crate) fn write(&self) -> Result<RwLockWriteGuard<'_, StoreState>, CoreError> {
        self.inner
            .write()
            .map_err(|_| CoreError::Internal("store lock poisoned".into()))
    }

    /// Current number of stored projects and chapters.
    pub fn stats(&self) -> Result<StoreStats, CoreError> {
        let state = self.read()?;
        Ok(StoreStats {
            projects: state.projects.len(),
            chapters: state.chapters.len(),
        })
    }
}

impl Default for MemStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn new_store_is_empty() {
        let store = MemStore::new();
        assert_eq!(
            store.stats().unwrap(),
            StoreStats {
                projects: 0,
                chapters: 0
            }
        );
    }

    #[test]
    fn counters_are_independent() {
        let store = MemStore::new();
        let mut state = store.write().unwrap();
        assert_eq!(state.allocate_project_id().unwrap(), 1);
        assert_eq!(state.allocate_project_id().unwrap(), 2);
        assert_eq!(state.allocate_chapter_id().unwrap(), 1);
    }

    #[test]
    fn exhausted_counter_is_internal_error() {
        let mut counter = DbId::MAX;
        assert_matches!(allocate(&mut counter, "project"), Err(CoreError::Internal(_)));
    }

    #[test]
    fn clones_share_state() {
        let store = MemStore::new();
        let other = store.clone();
        store.write().unwrap().allocate_project_id().unwrap();
        assert_eq!(other.write().unwrap().allocate_project_id().unwrap(), 2);
    }
}
