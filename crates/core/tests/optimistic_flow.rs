//! End-to-end reorder flow: an optimistic list driving the reorder service
//! over the in-memory store.

use std::sync::Arc;

use clubsite_core::collection::CollectionKind;
use clubsite_core::error::StoreError;
use clubsite_core::optimistic::{MoveOutcome, OptimisticList};
use clubsite_core::ordering::{ids_of, OrderedItem, ReorderRequest};
use clubsite_core::reorder::{Caller, ReorderService};
use clubsite_core::roles::{ROLE_ADMIN, ROLE_MEMBER};
use clubsite_core::store::MemoryStore;

const A: i64 = 101;
const B: i64 = 102;
const C: i64 = 103;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn abc_store(kind: CollectionKind) -> Arc<MemoryStore> {
    let store = Arc::new(MemoryStore::new());
    store
        .seed(
            kind,
            vec![
                OrderedItem { id: A, rank: 0 },
                OrderedItem { id: B, rank: 1 },
                OrderedItem { id: C, rank: 2 },
            ],
        )
        .await;
    store
}

async fn persisted(service: &ReorderService, kind: CollectionKind) -> Vec<(i64, i32)> {
    service
        .list(kind)
        .await
        .unwrap()
        .into_iter()
        .map(|item| (item.id, item.rank))
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[tokio::test]
async fn moving_b_up_persists_b_a_c() {
    let kind = CollectionKind::Episodes;
    let store = abc_store(kind).await;
    let service = ReorderService::new(store.clone());
    let backend = service.for_caller(Caller::with_role(1, ROLE_ADMIN));

    let mut list = OptimisticList::new(kind, service.list(kind).await.unwrap());
    let outcome = list.move_item(&backend, ReorderRequest::up(1)).await.unwrap();

    assert_eq!(outcome, MoveOutcome::Committed);
    assert_eq!(list.ids(), vec![B, A, C]);
    assert_eq!(persisted(&service, kind).await, vec![(B, 0), (A, 1), (C, 2)]);
}

#[tokio::test]
async fn store_failure_restores_a_b_c_in_view_and_store() {
    let kind = CollectionKind::Episodes;
    let store = abc_store(kind).await;
    store
        .fail_next_apply(StoreError::Unavailable("connection refused".into()))
        .await;
    let service = ReorderService::new(store.clone());
    let backend = service.for_caller(Caller::with_role(1, ROLE_ADMIN));

    let mut list = OptimisticList::new(kind, service.list(kind).await.unwrap());
    let observed_before = list.items().to_vec();
    let outcome = list.move_item(&backend, ReorderRequest::up(1)).await.unwrap();

    assert_eq!(
        outcome,
        MoveOutcome::RolledBack {
            message: "Failed to reorder episodes".into()
        }
    );
    assert_eq!(list.items(), observed_before.as_slice());
    assert_eq!(persisted(&service, kind).await, vec![(A, 0), (B, 1), (C, 2)]);

    // The user can simply try again.
    let retry = list.move_item(&backend, ReorderRequest::up(1)).await.unwrap();
    assert_eq!(retry, MoveOutcome::Committed);
    assert_eq!(persisted(&service, kind).await, vec![(B, 0), (A, 1), (C, 2)]);
}

#[tokio::test]
async fn member_cannot_reorder_and_view_rolls_back() {
    let kind = CollectionKind::Projects;
    let store = abc_store(kind).await;
    let service = ReorderService::new(store.clone());
    let backend = service.for_caller(Caller::with_role(7, ROLE_MEMBER));

    let mut list = OptimisticList::new(kind, service.list(kind).await.unwrap());
    let outcome = list.move_item(&backend, ReorderRequest::down(0)).await.unwrap();

    assert_eq!(
        outcome,
        MoveOutcome::RolledBack {
            message: "Not authorized".into()
        }
    );
    assert_eq!(store.rank_writes().await, 0);
    assert_eq!(persisted(&service, kind).await, vec![(A, 0), (B, 1), (C, 2)]);
}

#[tokio::test]
async fn gapped_ranks_are_compacted_by_the_first_move() {
    let kind = CollectionKind::BoardMembers;
    let store = Arc::new(MemoryStore::new());
    store
        .seed(
            kind,
            vec![
                OrderedItem { id: A, rank: 10 },
                OrderedItem { id: B, rank: 40 },
                OrderedItem { id: C, rank: 40 },
            ],
        )
        .await;
    let service = ReorderService::new(store.clone());
    let backend = service.for_caller(Caller::with_role(1, ROLE_ADMIN));

    let mut list = OptimisticList::new(kind, service.list(kind).await.unwrap());
    assert_eq!(ids_of(list.items()), vec![A, B, C]);

    list.move_item(&backend, ReorderRequest::down(1)).await.unwrap();

    assert_eq!(persisted(&service, kind).await, vec![(A, 0), (C, 1), (B, 2)]);
}

#[tokio::test]
async fn collections_are_independent() {
    let store = abc_store(CollectionKind::Episodes).await;
    store
        .seed(
            CollectionKind::Projects,
            vec![OrderedItem { id: 1, rank: 0 }, OrderedItem { id: 2, rank: 1 }],
        )
        .await;
    let service = ReorderService::new(store.clone());
    let admin = Caller::with_role(1, ROLE_ADMIN);

    service
        .reorder(&admin, CollectionKind::Projects, &[2, 1])
        .await
        .unwrap();

    assert_eq!(
        persisted(&service, CollectionKind::Episodes).await,
        vec![(A, 0), (B, 1), (C, 2)]
    );
    assert_eq!(
        persisted(&service, CollectionKind::Projects).await,
        vec![(2, 0), (1, 1)]
    );
}
