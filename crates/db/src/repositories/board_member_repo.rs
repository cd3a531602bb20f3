//! Repository for the `board_members` table.

use clubsite_core::types::DbId;
use sqlx::PgPool;

use crate::models::board_member::{BoardMember, CreateBoardMember, UpdateBoardMember};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, role, bio, photo_url, linkedin_url, github_url, \
    sort_order, is_active, created_at, updated_at";

/// Provides CRUD operations for board members.
pub struct BoardMemberRepo;

impl BoardMemberRepo {
    /// Insert a new board member, returning the created row.
    ///
    /// Without an explicit `sort_order` the member is appended after the
    /// current last one.
    pub async fn create(
        pool: &PgPool,
        input: &CreateBoardMember,
    ) -> Result<BoardMember, sqlx::Error> {
        let query = format!(
            "INSERT INTO board_members \
                (name, role, bio, photo_url, linkedin_url, github_url, sort_order, is_active) \
             VALUES ($1, $2, $3, $4, $5, $6, \
                COALESCE($7, (SELECT COALESCE(MAX(sort_order) + 1, 0) FROM board_members)), \
                COALESCE($8, true)) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, BoardMember>(&query)
            .bind(&input.name)
            .bind(&input.role)
            .bind(&input.bio)
            .bind(&input.photo_url)
            .bind(&input.linkedin_url)
            .bind(&input.github_url)
            .bind(input.sort_order)
            .bind(input.is_active)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<BoardMember>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM board_members WHERE id = $1");
        sqlx::query_as::<_, BoardMember>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List board members, optionally including inactive ones.
    ///
    /// Ordered by sort_order, then id.
    pub async fn list(
        pool: &PgPool,
        include_inactive: bool,
    ) -> Result<Vec<BoardMember>, sqlx::Error> {
        let query = if include_inactive {
            format!("SELECT {COLUMNS} FROM board_members ORDER BY sort_order, id")
        } else {
            format!(
                "SELECT {COLUMNS} FROM board_members WHERE is_active = true \
                 ORDER BY sort_order, id"
            )
        };
        sqlx::query_as::<_, BoardMember>(&query).fetch_all(pool).await
    }

    /// Update a board member. Only non-`None` fields are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateBoardMember,
    ) -> Result<Option<BoardMember>, sqlx::Error> {
        let query = format!(
            "UPDATE board_members SET \
                name = COALESCE($2, name), \
                role = COALESCE($3, role), \
                bio = COALESCE($4, bio), \
                photo_url = COALESCE($5, photo_url), \
                linkedin_url = COALESCE($6, linkedin_url), \
                github_url = COALESCE($7, github_url), \
                sort_order = COALESCE($8, sort_order), \
                is_active = COALESCE($9, is_active) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, BoardMember>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.role)
            .bind(&input.bio)
            .bind(&input.photo_url)
            .bind(&input.linkedin_url)
            .bind(&input.github_url)
            .bind(input.sort_order)
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }

    /// Delete a board member. Siblings keep their ranks.
    ///
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM board_members WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
