//! Repository layer: one zero-sized type per entity, each exposing async
//! associated functions that take the shared [`MemStore`](crate::MemStore).

pub mod chapter_repo;
pub mod project_repo;

pub use chapter_repo::ChapterRepo;
pub use project_repo::ProjectRepo;
