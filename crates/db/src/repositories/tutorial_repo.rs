//! Repository for the `tutorials` table.

use clubsite_core::types::DbId;
use sqlx::PgPool;

use crate::models::tutorial::{CreateTutorial, Tutorial, UpdateTutorial};

const COLUMNS: &str =
    "id, title, description, url, category, sort_order, created_at, updated_at";

pub struct TutorialRepo;

impl TutorialRepo {
    pub async fn create(pool: &PgPool, input: &CreateTutorial) -> Result<Tutorial, sqlx::Error> {
        let query = format!(
            "INSERT INTO tutorials (title, description, url, category, sort_order) \
             VALUES ($1, $2, $3, $4, \
                COALESCE($5, (SELECT COALESCE(MAX(sort_order) + 1, 0) FROM tutorials))) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Tutorial>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.url)
            .bind(&input.category)
            .bind(input.sort_order)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Tutorial>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tutorials WHERE id = $1");
        sqlx::query_as::<_, Tutorial>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<Tutorial>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tutorials ORDER BY sort_order, id");
        sqlx::query_as::<_, Tutorial>(&query).fetch_all(pool).await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateTutorial,
    ) -> Result<Option<Tutorial>, sqlx::Error> {
        let query = format!(
            "UPDATE tutorials SET \
                title = COALESCE($2, title), \
                description = COALESCE($3, description), \
                url = COALESCE($4, url), \
                category = COALESCE($5, category), \
                sort_order = COALESCE($6, sort_order) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Tutorial>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.url)
            .bind(&input.category)
            .bind(input.sort_order)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tutorials WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
