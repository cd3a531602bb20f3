//! Persistence seam for ordered collections.
//!
//! [`OrderedCollectionStore`] is the only thing the reorder service knows
//! about storage. The Postgres implementation lives in `clubsite-db`;
//! [`MemoryStore`] backs tests and local wiring.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::collection::CollectionKind;
use crate::error::StoreError;
use crate::ordering::{sort_ranked, OrderedItem, RankAssignment};

#[async_trait]
pub trait OrderedCollectionStore: Send + Sync {
    /// All items of `kind`, ascending by `(rank, id)`. Empty collections
    /// yield an empty vector.
    async fn list_ordered(&self, kind: CollectionKind) -> Result<Vec<OrderedItem>, StoreError>;

    /// Persist every `(id, rank)` pair of `assignment` as one unit.
    ///
    /// Implementations must be all-or-nothing: on error no rank from the
    /// assignment is visible. Re-applying the same assignment is a no-op.
    async fn apply_ranks(
        &self,
        kind: CollectionKind,
        assignment: &RankAssignment,
    ) -> Result<(), StoreError>;
}

// ---------------------------------------------------------------------------
// MemoryStore
// ---------------------------------------------------------------------------

#[derive(Default)]
struct MemoryState {
    collections: HashMap<CollectionKind, Vec<OrderedItem>>,
    pending_failure: Option<StoreError>,
    rank_writes: usize,
}

/// In-process store guarded by a single `RwLock`.
#[derive(Default)]
pub struct MemoryStore {
    state: RwLock<MemoryState>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the contents of one collection.
    pub async fn seed(&self, kind: CollectionKind, items: Vec<OrderedItem>) {
        self.state.write().await.collections.insert(kind, items);
    }

    /// Make the next `apply_ranks` call fail with `err` without touching state.
    pub async fn fail_next_apply(&self, err: StoreError) {
        self.state.write().await.pending_failure = Some(err);
    }

    /// Number of individual rank writes persisted so far.
    pub async fn rank_writes(&self) -> usize {
        self.state.read().await.rank_writes
    }
}

#[async_trait]
impl OrderedCollectionStore for MemoryStore {
    async fn list_ordered(&self, kind: CollectionKind) -> Result<Vec<OrderedItem>, StoreError> {
        let mut items = self
            .state
            .read()
            .await
            .collections
            .get(&kind)
            .cloned()
            .unwrap_or_default();
        sort_ranked(&mut items);
        Ok(items)
    }

    async fn apply_ranks(
        &self,
        kind: CollectionKind,
        assignment: &RankAssignment,
    ) -> Result<(), StoreError> {
        let mut state = self.state.write().await;
        if let Some(err) = state.pending_failure.take() {
            return Err(err);
        }

        let items = state.collections.entry(kind).or_default();

        // Resolve every id before writing anything.
        let mut targets = Vec::with_capacity(assignment.len());
        for entry in assignment.entries() {
            let position = items
                .iter()
                .position(|item| item.id == entry.id)
                .ok_or(StoreError::MissingItem { kind, id: entry.id })?;
            targets.push((position, entry.rank));
        }

        for (position, rank) in targets {
            items[position].rank = rank;
        }
        state.rank_writes += assignment.len();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::ordering::{assignment_for, ids_of};

    fn items(ranks: &[(i64, i32)]) -> Vec<OrderedItem> {
        ranks
            .iter()
            .map(|&(id, rank)| OrderedItem { id, rank })
            .collect()
    }

    #[tokio::test]
    async fn empty_collection_lists_empty() {
        let store = MemoryStore::new();
        assert!(store
            .list_ordered(CollectionKind::Projects)
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn list_is_sorted_by_rank_then_id() {
        let store = MemoryStore::new();
        store
            .seed(CollectionKind::Episodes, items(&[(3, 4), (1, 4), (2, 0)]))
            .await;
        let listed = store.list_ordered(CollectionKind::Episodes).await.unwrap();
        assert_eq!(ids_of(&listed), vec![2, 1, 3]);
    }

    #[tokio::test]
    async fn applying_twice_matches_applying_once() {
        let store = MemoryStore::new();
        store
            .seed(CollectionKind::Projects, items(&[(1, 0), (2, 1), (3, 2)]))
            .await;
        let assignment = assignment_for(&[3, 1, 2]).unwrap();

        store.apply_ranks(CollectionKind::Projects, &assignment).await.unwrap();
        let once = store.list_ordered(CollectionKind::Projects).await.unwrap();
        store.apply_ranks(CollectionKind::Projects, &assignment).await.unwrap();
        let twice = store.list_ordered(CollectionKind::Projects).await.unwrap();

        assert_eq!(once, twice);
        assert_eq!(ids_of(&twice), vec![3, 1, 2]);
    }

    #[tokio::test]
    async fn missing_id_writes_nothing() {
        let store = MemoryStore::new();
        store
            .seed(CollectionKind::Projects, items(&[(1, 0), (2, 1)]))
            .await;
        let assignment = assignment_for(&[2, 99, 1]).unwrap();

        let err = store
            .apply_ranks(CollectionKind::Projects, &assignment)
            .await
            .unwrap_err();

        assert_matches!(err, StoreError::MissingItem { id: 99, .. });
        let listed = store.list_ordered(CollectionKind::Projects).await.unwrap();
        assert_eq!(listed, items(&[(1, 0), (2, 1)]));
        assert_eq!(store.rank_writes().await, 0);
    }

    #[tokio::test]
    async fn injected_failure_fires_once() {
        let store = MemoryStore::new();
        store
            .seed(CollectionKind::BoardMembers, items(&[(1, 0), (2, 1)]))
            .await;
        store
            .fail_next_apply(StoreError::Unavailable("offline".into()))
            .await;
        let assignment = assignment_for(&[2, 1]).unwrap();

        assert!(store
            .apply_ranks(CollectionKind::BoardMembers, &assignment)
            .await
            .is_err());
        store
            .apply_ranks(CollectionKind::BoardMembers, &assignment)
            .await
            .unwrap();

        let listed = store.list_ordered(CollectionKind::BoardMembers).await.unwrap();
        assert_eq!(ids_of(&listed), vec![2, 1]);
    }
}
