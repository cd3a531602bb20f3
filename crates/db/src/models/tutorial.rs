//! Tutorial link entity model and DTOs.
//!
//! The public page groups tutorials by `category`; within a category they
//! keep the collection-wide `sort_order`.

use clubsite_core::error::CoreError;
use clubsite_core::ordering::Ranked;
use clubsite_core::types::{DbId, Timestamp};
use clubsite_core::validation::{
    limit_description, optional_text, require_text, validate_sort_order,
};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `tutorials` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Tutorial {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub url: String,
    pub category: String,
    pub sort_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Ranked for Tutorial {
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
pub struct CreateTutorial {
    pub title: String,
    pub description: Option<String>,
    pub url: String,
    pub category: String,
    pub sort_order: Option<i32>,
}

impl CreateTutorial {
    pub fn validate(&self) -> Result<(), CoreError> {
        require_text("title", &self.title)?;
        require_text("url", &self.url)?;
        require_text("category", &self.category)?;
        limit_description("description", self.description.as_deref())?;
        validate_sort_order(self.sort_order)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateTutorial {
    pub title: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    pub category: Option<String>,
    pub sort_order: Option<i32>,
}

impl UpdateTutorial {
    pub fn validate(&self) -> Result<(), CoreError> {
        optional_text("title", self.title.as_deref())?;
        optional_text("url", self.url.as_deref())?;
        optional_text("category", self.category.as_deref())?;
        limit_description("description", self.description.as_deref())?;
        validate_sort_order(self.sort_order)
    }
}
