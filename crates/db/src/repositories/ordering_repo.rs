//! Rank reads and writes shared by every reorderable table.
//!
//! The table name comes from [`CollectionKind::table`], which only returns
//! fixed identifiers, so it is interpolated into the SQL text directly.

use async_trait::async_trait;
use clubsite_core::collection::CollectionKind;
use clubsite_core::error::StoreError;
use clubsite_core::ordering::{OrderedItem, RankAssignment};
use clubsite_core::store::OrderedCollectionStore;
use clubsite_core::types::DbId;
use sqlx::PgPool;

/// Result of [`OrderingRepo::apply_ranks`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankWrite {
    Applied,
    /// The id no longer exists; the transaction was rolled back.
    Missing(DbId),
}

pub struct OrderingRepo;

impl OrderingRepo {
    /// `(id, sort_order)` for every row of `kind`, ordered by sort_order, then id.
    pub async fn list_ordered(
        pool: &PgPool,
        kind: CollectionKind,
    ) -> Result<Vec<OrderedItem>, sqlx::Error> {
        let query = format!(
            "SELECT id, sort_order FROM {} ORDER BY sort_order, id",
            kind.table()
        );
        let rows: Vec<(DbId, i32)> = sqlx::query_as(&query).fetch_all(pool).await?;
        Ok(rows
            .into_iter()
            .map(|(id, rank)| OrderedItem { id, rank })
            .collect())
    }

    /// Write every rank of `assignment` inside one transaction.
    ///
    /// Stops at the first id that matches no row and rolls back, so either
    /// all ranks are written or none are.
    pub async fn apply_ranks(
        pool: &PgPool,
        kind: CollectionKind,
        assignment: &RankAssignment,
    ) -> Result<RankWrite, sqlx::Error> {
        let query = format!("UPDATE {} SET sort_order = $1 WHERE id = $2", kind.table());
        let mut tx = pool.begin().await?;

        for entry in assignment.entries() {
            let result = sqlx::query(&query)
                .bind(entry.rank)
                .bind(entry.id)
                .execute(&mut *tx)
                .await?;
            if result.rows_affected() == 0 {
                tx.rollback().await?;
                return Ok(RankWrite::Missing(entry.id));
            }
        }

        tx.commit().await?;
        Ok(RankWrite::Applied)
    }
}

/// [`OrderedCollectionStore`] backed by PostgreSQL.
#[derive(Clone)]
pub struct PgOrderedStore {
    pool: PgPool,
}

impl PgOrderedStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn unavailable(err: sqlx::Error) -> StoreError {
    tracing::error!(error = %err, "Ordered collection store error");
    StoreError::Unavailable(err.to_string())
}

#[async_trait]
impl OrderedCollectionStore for PgOrderedStore {
    async fn list_ordered(&self, kind: CollectionKind) -> Result<Vec<OrderedItem>, StoreError> {
        OrderingRepo::list_ordered(&self.pool, kind)
            .await
            .map_err(unavailable)
    }

    async fn apply_ranks(
        &self,
        kind: CollectionKind,
        assignment: &RankAssignment,
    ) -> Result<(), StoreError> {
        match OrderingRepo::apply_ranks(&self.pool, kind, assignment)
            .await
            .map_err(unavailable)?
        {
            RankWrite::Applied => Ok(()),
            RankWrite::Missing(id) => {
                tracing::warn!(%kind, id, "Reorder referenced a missing item; rolled back");
                Err(StoreError::MissingItem { kind, id })
            }
        }
    }
}
