//! Podcast episode entity model and DTOs.

use clubsite_core::error::CoreError;
use clubsite_core::ordering::Ranked;
use clubsite_core::types::{DbId, Timestamp};
use clubsite_core::validation::{
    limit_description, optional_text, require_text, validate_duration_minutes,
    validate_sort_order,
};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `episodes` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Episode {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub duration_minutes: i32,
    pub tag: String,
    /// `None` until the episode is published ("coming soon").
    pub spotify_url: Option<String>,
    pub sort_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Ranked for Episode {
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
pub struct CreateEpisode {
    pub title: String,
    pub description: Option<String>,
    pub duration_minutes: i32,
    pub tag: String,
    pub spotify_url: Option<String>,
    pub sort_order: Option<i32>,
}

impl CreateEpisode {
    pub fn validate(&self) -> Result<(), CoreError> {
        require_text("title", &self.title)?;
        require_text("tag", &self.tag)?;
        validate_duration_minutes(self.duration_minutes)?;
        limit_description("description", self.description.as_deref())?;
        validate_sort_order(self.sort_order)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateEpisode {
    pub title: Option<String>,
    pub description: Option<String>,
    pub duration_minutes: Option<i32>,
    pub tag: Option<String>,
    pub spotify_url: Option<String>,
    pub sort_order: Option<i32>,
}

impl UpdateEpisode {
    pub fn validate(&self) -> Result<(), CoreError> {
        optional_text("title", self.title.as_deref())?;
        optional_text("tag", self.tag.as_deref())?;
        if let Some(minutes) = self.duration_minutes {
            validate_duration_minutes(minutes)?;
        }
        limit_description("description", self.description.as_deref())?;
        validate_sort_order(self.sort_order)
    }
}
