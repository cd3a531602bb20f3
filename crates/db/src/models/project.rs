//! Student project entity model and DTOs.

use clubsite_core::error::CoreError;
use clubsite_core::ordering::Ranked;
use clubsite_core::types::{DbId, Timestamp};
use clubsite_core::validation::{
    limit_description, optional_text, require_text, validate_sort_order,
};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `projects` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub github_url: Option<String>,
    pub category: String,
    pub sort_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Ranked for Project {
    fn id(&self) -> DbId {
        self.id
    }

    fn rank(&self) -> i32 {
        self.sort_order
    }

    fn set_rank(&mut self, rank: i32) {
        self.sort_order = rank;
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateProject {
    pub title: String,
    pub description: Option<String>,
    pub github_url: Option<String>,
    pub category: String,
    pub sort_order: Option<i32>,
}

impl CreateProject {
    pub fn validate(&self) -> Result<(), CoreError> {
        require_text("title", &self.title)?;
        require_text("category", &self.category)?;
        limit_description("description", self.description.as_deref())?;
        validate_sort_order(self.sort_order)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateProject {
    pub title: Option<String>,
    pub description: Option<String>,
    pub github_url: Option<String>,
    pub category: Option<String>,
    pub sort_order: Option<i32>,
}

impl UpdateProject {
    pub fn validate(&self) -> Result<(), CoreError> {
        optional_text("title", self.title.as_deref())?;
        optional_text("category", self.category.as_deref())?;
        limit_description("description", self.description.as_deref())?;
        validate_sort_order(self.sort_order)
    }
}
