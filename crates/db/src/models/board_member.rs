//! Board member entity model and DTOs.

use clubsite_core::error::CoreError;
use clubsite_core::ordering::Ranked;
use clubsite_core::types::{DbId, Timestamp};
use clubsite_core::validation::{
    limit_description, optional_text, require_text, validate_sort_order,
};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `board_members` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct BoardMember {
    pub id: DbId,
    pub name: String,
    /// Position on the board, e.g. "President".
    pub role: String,
    pub bio: Option<String>,
    pub photo_url: Option<String>,
    pub linkedin_url: Option<String>,
    pub github_url: Option<String>,
    pub sort_order: i32,
    /// Inactive members stay in the admin list but are hidden publicly.
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Ranked for BoardMember {
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

/// DTO for creating a board member. `sort_order` defaults to the end of the list.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateBoardMember {
    pub name: String,
    pub role: String,
    pub bio: Option<String>,
    pub photo_url: Option<String>,
    pub linkedin_url: Option<String>,
    pub github_url: Option<String>,
    pub sort_order: Option<i32>,
    pub is_active: Option<bool>,
}

impl CreateBoardMember {
    pub fn validate(&self) -> Result<(), CoreError> {
        require_text("name", &self.name)?;
        require_text("role", &self.role)?;
        limit_description("bio", self.bio.as_deref())?;
        validate_sort_order(self.sort_order)
    }
}

/// DTO for updating a board member. All fields optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateBoardMember {
    pub name: Option<String>,
    pub role: Option<String>,
    pub bio: Option<String>,
    pub photo_url: Option<String>,
    pub linkedin_url: Option<String>,
    pub github_url: Option<String>,
    pub sort_order: Option<i32>,
    pub is_active: Option<bool>,
}

impl UpdateBoardMember {
    pub fn validate(&self) -> Result<(), CoreError> {
        optional_text("name", self.name.as_deref())?;
        optional_text("role", self.role.as_deref())?;
        limit_description("bio", self.bio.as_deref())?;
        validate_sort_order(self.sort_order)
    }
}
