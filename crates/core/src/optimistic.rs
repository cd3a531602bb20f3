//! Client-side mirror of an ordered collection with optimistic moves.
//!
//! A list is either `Stable` (matches the last known persisted order and
//! accepts moves) or `Pending` (a move was applied locally and its
//! persistence call is in flight). Only one move may be pending per list.
//! When the call fails or times out, the list is restored to exactly what it
//! was before the move. There is no automatic retry.

use std::time::Duration;

use crate::action::ActionResult;
use crate::collection::CollectionKind;
use crate::error::ReorderError;
use crate::ordering::{ids_of, sort_ranked, swap_neighbors, Ranked, ReorderRequest};
use crate::reorder::ReorderBackend;
use crate::types::DbId;

/// Upper bound on how long a list stays `Pending` waiting for the backend.
pub const DEFAULT_REORDER_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, thiserror::Error)]
pub enum ViewError {
    #[error("A reorder of {} is already in progress", .0.label())]
    Busy(CollectionKind),

    #[error(transparent)]
    Invalid(#[from] ReorderError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum ListState<T> {
    Stable,
    Pending { before: Vec<T> },
}

/// How a move attempt ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Nothing was pending, or the move was past an end of the list.
    Unchanged,
    Committed,
    RolledBack { message: String },
}

#[derive(Debug, Clone)]
pub struct OptimisticList<T> {
    kind: CollectionKind,
    items: Vec<T>,
    state: ListState<T>,
    message: Option<String>,
    timeout: Duration,
}

impl<T: Ranked + Clone> OptimisticList<T> {
    /// Mirror `items` as loaded from the server, sorted by `(rank, id)`.
    pub fn new(kind: CollectionKind, mut items: Vec<T>) -> Self {
        sort_ranked(&mut items);
        Self {
            kind,
            items,
            state: ListState::Stable,
            message: None,
            timeout: DEFAULT_REORDER_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn kind(&self) -> CollectionKind {
        self.kind
    }

    /// Items in display order, including any optimistic move.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn ids(&self) -> Vec<DbId> {
        ids_of(&self.items)
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.state, ListState::Pending { .. })
    }

    /// Last user-facing error, if the most recent move was rolled back.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Adopt a freshly fetched server list. Refused while a move is pending.
    pub fn refresh(&mut self, mut items: Vec<T>) -> Result<(), ViewError> {
        if self.is_pending() {
            return Err(ViewError::Busy(self.kind));
        }
        sort_ranked(&mut items);
        self.items = items;
        Ok(())
    }

    /// Apply `request` locally and enter `Pending`.
    ///
    /// Returns the id list to persist, or `None` when the move is past an end
    /// of the list (the list stays `Stable`).
    pub fn begin_move(&mut self, request: ReorderRequest) -> Result<Option<Vec<DbId>>, ViewError> {
        if self.is_pending() {
            return Err(ViewError::Busy(self.kind));
        }

        if i32::try_from(self.items.len()).is_err() {
            return Err(ReorderError::Invalid(format!(
                "{} items exceed the rank range",
                self.items.len()
            ))
            .into());
        }

        let mut next = self.items.clone();
        if !swap_neighbors(&mut next, request)? {
            return Ok(None);
        }

        let before = std::mem::replace(&mut self.items, next);
        self.state = ListState::Pending { before };
        self.message = None;
        Ok(Some(self.ids()))
    }

    /// Resolve the pending move with the backend's answer.
    pub fn settle(&mut self, result: &ActionResult) -> MoveOutcome {
        let ListState::Pending { before } = std::mem::replace(&mut self.state, ListState::Stable)
        else {
            return MoveOutcome::Unchanged;
        };

        if result.success {
            // `begin_move` bounded the length to the rank range.
            for (rank, item) in (0_i32..).zip(self.items.iter_mut()) {
                item.set_rank(rank);
            }
            MoveOutcome::Committed
        } else {
            self.items = before;
            let message = result
                .message
                .clone()
                .unwrap_or_else(|| format!("Failed to reorder {}", self.kind.label()));
            self.message = Some(message.clone());
            MoveOutcome::RolledBack { message }
        }
    }

    /// Apply a move optimistically, persist it through `backend`, then commit
    /// or roll back.
    pub async fn move_item<B>(
        &mut self,
        backend: &B,
        request: ReorderRequest,
    ) -> Result<MoveOutcome, ViewError>
    where
        B: ReorderBackend + ?Sized,
    {
        let Some(ordered_ids) = self.begin_move(request)? else {
            return Ok(MoveOutcome::Unchanged);
        };

        let pending = backend.reorder(self.kind, ordered_ids);
        let result = match tokio::time::timeout(self.timeout, pending).await {
            Ok(result) => result,
            Err(_) => {
                tracing::warn!(
                    kind = %self.kind,
                    timeout_ms = self.timeout.as_millis() as u64,
                    "Reorder timed out; rolling back"
                );
                ActionResult::failure(format!("Reordering {} timed out", self.kind.label()))
            }
        };

        Ok(self.settle(&result))
    }
}
