//! Chapter entity model and DTOs.

use std::borrow::Cow;

use inkwell_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// An ordered, titled unit of content belonging to one project.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Chapter {
    pub id: DbId,
    pub project_id: DbId,
    pub title: String,
    pub content: String,
    /// Display position among the project's chapters. Not unique.
    pub order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new chapter.
///
/// `project_id` never comes from the request body; the handler fills it in
/// from the URL path.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateChapter {
    #[serde(skip_deserializing)]
    pub project_id: DbId,
    pub title: String,
    #[serde(default)]
    pub content: String,
    pub order: i32,
}

/// DTO for patching an existing chapter. All fields are optional but at
/// least one must be present.
///
/// The owning project cannot be changed.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[validate(schema(function = "has_any_field"))]
pub struct UpdateChapter {
    pub title: Option<String>,
    pub content: Option<String>,
    pub order: Option<i32>,
}

impl UpdateChapter {
    /// True when no field would change.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none() && self.order.is_none()
    }

    /// Merge the supplied fields over `chapter`. Absent fields are left as-is.
    pub fn apply_to(&self, chapter: &mut Chapter) {
        if let Some(title) = &self.title {
            chapter.title.clone_from(title);
        }
        if let Some(content) = &self.content {
            chapter.content.clone_from(content);
        }
        if let Some(order) = self.order {
            chapter.order = order;
        }
    }
}

fn has_any_field(patch: &UpdateChapter) -> Result<(), ValidationError> {
    if patch.is_empty() {
        let mut err = ValidationError::new("empty_patch");
        err.message = Some(Cow::Borrowed("at least one chapter field must be supplied"));
        return Err(err);
    }
    Ok(())
}
