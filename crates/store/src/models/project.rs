//! Project entity model and DTOs.

use inkwell_core::types::{DbId, Timestamp};
use inkwell_core::validation::not_blank;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A top-level container for a body of written work.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: DbId,
    pub name: String,
    pub created_at: Timestamp,
}

/// DTO for creating a new project.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateProject {
    #[validate(custom(function = "not_blank"))]
    pub name: String,
}
