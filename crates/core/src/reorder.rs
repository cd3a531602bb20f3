//! Reorder service: the admin-facing entry point for changing the order of
//! a collection.
//!
//! Every call checks the caller against the [`AdminGate`] before anything
//! else, writes through the injected [`OrderedCollectionStore`], and on
//! success asks the [`Revalidator`] to refresh the pages that display the
//! collection.

use std::sync::Arc;

use async_trait::async_trait;

use crate::action::ActionResult;
use crate::collection::CollectionKind;
use crate::error::{CoreError, ReorderError};
use crate::ordering::{assignment_for, compute_move, MovePlan, OrderedItem, RankAssignment, ReorderRequest};
use crate::roles::ROLE_ADMIN;
use crate::store::OrderedCollectionStore;
use crate::types::DbId;

// ---------------------------------------------------------------------------
// Collaborators
// ---------------------------------------------------------------------------

/// Identity of whoever is asking for a write.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Caller {
    pub user_id: Option<DbId>,
    pub role: Option<String>,
}

impl Caller {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn with_role(user_id: DbId, role: impl Into<String>) -> Self {
        Self {
            user_id: Some(user_id),
            role: Some(role.into()),
        }
    }
}

/// Decides whether a caller may mutate collections.
pub trait AdminGate: Send + Sync {
    fn is_admin(&self, caller: &Caller) -> bool;
}

/// Grants admin rights to callers holding the `admin` role.
#[derive(Debug, Clone, Copy, Default)]
pub struct RoleGate;

impl AdminGate for RoleGate {
    fn is_admin(&self, caller: &Caller) -> bool {
        caller.role.as_deref() == Some(ROLE_ADMIN)
    }
}

/// Refreshes cached renderings of the given page paths.
#[async_trait]
pub trait Revalidator: Send + Sync {
    async fn revalidate(&self, paths: &[&'static str]) -> Result<(), CoreError>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoopRevalidator;

#[async_trait]
impl Revalidator for NoopRevalidator {
    async fn revalidate(&self, _paths: &[&'static str]) -> Result<(), CoreError> {
        Ok(())
    }
}

/// Anything an optimistic list can hand a permuted id list to.
#[async_trait]
pub trait ReorderBackend: Send + Sync {
    async fn reorder(&self, kind: CollectionKind, ordered_ids: Vec<DbId>) -> ActionResult;
}

// ---------------------------------------------------------------------------
// ReorderService
// ---------------------------------------------------------------------------

#[derive(Clone)]
pub struct ReorderService {
    store: Arc<dyn OrderedCollectionStore>,
    gate: Arc<dyn AdminGate>,
    revalidator: Arc<dyn Revalidator>,
}

impl ReorderService {
    /// Service using [`RoleGate`] and no revalidation.
    pub fn new(store: Arc<dyn OrderedCollectionStore>) -> Self {
        Self {
            store,
            gate: Arc::new(RoleGate),
            revalidator: Arc::new(NoopRevalidator),
        }
    }

    pub fn with_gate(mut self, gate: Arc<dyn AdminGate>) -> Self {
        self.gate = gate;
        self
    }

    pub fn with_revalidator(mut self, revalidator: Arc<dyn Revalidator>) -> Self {
        self.revalidator = revalidator;
        self
    }

    /// Current persisted order of `kind`. Read-only, so no admin check.
    pub async fn list(&self, kind: CollectionKind) -> Result<Vec<OrderedItem>, ReorderError> {
        Ok(self.store.list_ordered(kind).await?)
    }

    /// Persist `ordered_ids` as the new order of `kind` (`rank = position`).
    ///
    /// Ids persisted in the collection but absent from `ordered_ids` keep
    /// their current rank.
    pub async fn reorder(
        &self,
        caller: &Caller,
        kind: CollectionKind,
        ordered_ids: &[DbId],
    ) -> Result<RankAssignment, ReorderError> {
        self.require_admin(caller, kind)?;
        let assignment = assignment_for(ordered_ids)?;
        if !assignment.is_empty() {
            self.persist(kind, &assignment).await?;
        }
        Ok(assignment)
    }

    /// Move one item of the caller's `snapshot` up or down and persist the
    /// resulting order. Returns `None` when the move is a no-op, in which
    /// case the store is not touched.
    pub async fn move_item(
        &self,
        caller: &Caller,
        kind: CollectionKind,
        snapshot: &[DbId],
        request: ReorderRequest,
    ) -> Result<Option<RankAssignment>, ReorderError> {
        self.require_admin(caller, kind)?;
        match compute_move(snapshot, request)? {
            MovePlan::NoOp => {
                tracing::debug!(%kind, index = request.index, "Reorder move is a no-op");
                Ok(None)
            }
            MovePlan::Apply(assignment) => {
                self.persist(kind, &assignment).await?;
                Ok(Some(assignment))
            }
        }
    }

    /// [`reorder`](Self::reorder) folded into an [`ActionResult`].
    pub async fn reorder_action(
        &self,
        caller: &Caller,
        kind: CollectionKind,
        ordered_ids: &[DbId],
    ) -> ActionResult {
        match self.reorder(caller, kind, ordered_ids).await {
            Ok(assignment) => reorder_succeeded(kind, &assignment),
            Err(err) => {
                tracing::warn!(%kind, error = %err, "Reorder rejected");
                ActionResult::failure(err.user_message(kind))
            }
        }
    }

    /// Bind this service to a caller so it can back an optimistic list.
    pub fn for_caller(&self, caller: Caller) -> CallerBackend<'_> {
        CallerBackend {
            service: self,
            caller,
        }
    }

    fn require_admin(&self, caller: &Caller, kind: CollectionKind) -> Result<(), ReorderError> {
        if self.gate.is_admin(caller) {
            Ok(())
        } else {
            tracing::warn!(%kind, user_id = ?caller.user_id, "Non-admin reorder attempt");
            Err(ReorderError::NotAuthorized(kind))
        }
    }

    async fn persist(
        &self,
        kind: CollectionKind,
        assignment: &RankAssignment,
    ) -> Result<(), ReorderError> {
        self.store.apply_ranks(kind, assignment).await?;
        tracing::info!(%kind, item_count = assignment.len(), "Collection reordered");

        // The write already landed; a stale page is not worth failing over.
        if let Err(err) = self.revalidator.revalidate(&kind.affected_paths()).await {
            tracing::warn!(%kind, error = %err, "Page revalidation failed after reorder");
        }
        Ok(())
    }
}

/// Success result for a full reorder. An empty id list writes nothing and
/// reports no message.
pub fn reorder_succeeded(kind: CollectionKind, assignment: &RankAssignment) -> ActionResult {
    if assignment.is_empty() {
        ActionResult::unchanged()
    } else {
        ActionResult::ok(format!("Reordered {} successfully", kind.label()))
    }
}

/// A [`ReorderService`] acting on behalf of one caller.
pub struct CallerBackend<'a> {
    service: &'a ReorderService,
    caller: Caller,
}

#[async_trait]
impl ReorderBackend for CallerBackend<'_> {
    async fn reorder(&self, kind: CollectionKind, ordered_ids: Vec<DbId>) -> ActionResult {
        self.service
            .reorder_action(&self.caller, kind, &ordered_ids)
            .await
    }
}
