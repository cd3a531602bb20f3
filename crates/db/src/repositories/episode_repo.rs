//! Repository for the `episodes` table.

use clubsite_core::types::DbId;
use sqlx::PgPool;

use crate::models::episode::{CreateEpisode, Episode, UpdateEpisode};

const COLUMNS: &str = "id, title, description, duration_minutes, tag, spotify_url, \
    sort_order, created_at, updated_at";

/// Provides CRUD operations for episodes.
pub struct EpisodeRepo;

impl EpisodeRepo {
    /// Insert a new episode, appended at the end unless `sort_order` is given.
    pub async fn create(pool: &PgPool, input: &CreateEpisode) -> Result<Episode, sqlx::Error> {
        let query = format!(
            "INSERT INTO episodes \
                (title, description, duration_minutes, tag, spotify_url, sort_order) \
             VALUES ($1, $2, $3, $4, $5, \
                COALESCE($6, (SELECT COALESCE(MAX(sort_order) + 1, 0) FROM episodes))) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Episode>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.duration_minutes)
            .bind(&input.tag)
            .bind(&input.spotify_url)
            .bind(input.sort_order)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Episode>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM episodes WHERE id = $1");
        sqlx::query_as::<_, Episode>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// All episodes ordered by sort_order, then id.
    pub async fn list(pool: &PgPool) -> Result<Vec<Episode>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM episodes ORDER BY sort_order, id");
        sqlx::query_as::<_, Episode>(&query).fetch_all(pool).await
    }

    /// Update an episode. Only non-`None` fields are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateEpisode,
    ) -> Result<Option<Episode>, sqlx::Error> {
        let query = format!(
            "UPDATE episodes SET \
                title = COALESCE($2, title), \
                description = COALESCE($3, description), \
                duration_minutes = COALESCE($4, duration_minutes), \
                tag = COALESCE($5, tag), \
                spotify_url = COALESCE($6, spotify_url), \
                sort_order = COALESCE($7, sort_order) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Episode>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.duration_minutes)
            .bind(&input.tag)
            .bind(&input.spotify_url)
            .bind(input.sort_order)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM episodes WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
