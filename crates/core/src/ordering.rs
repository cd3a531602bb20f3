//! Move computation for ordered collections.
//!
//! Items are ordered by `(rank, id)` ascending. A move swaps one item with
//! its immediate neighbour and then rewrites every rank to its positional
//! index, so after any successful move the ranks are `0..n` with no gaps and
//! no collisions. This costs one write per item but never depends on the
//! previous ranks being contiguous.
//!
//! The computation trusts the order it is given. If the persisted order has
//! changed since the caller took its snapshot, the resulting assignment
//! re-imposes the snapshot (last writer wins).

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::ReorderError;
use crate::types::DbId;

// ---------------------------------------------------------------------------
// Ranked capability
// ---------------------------------------------------------------------------

/// The minimal `{id, rank}` capability every reorderable record provides.
pub trait Ranked {
    fn id(&self) -> DbId;
    fn rank(&self) -> i32;
    fn set_rank(&mut self, rank: i32);
}

/// An item of a collection stripped down to what ordering needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderedItem {
    pub id: DbId,
    pub rank: i32,
}

impl Ranked for OrderedItem {
    fn id(&self) -> DbId {
        self.id
    }

    fn rank(&self) -> i32 {
        self.rank
    }

    fn set_rank(&mut self, rank: i32) {
        self.rank = rank;
    }
}

/// Sort by rank, breaking ties by id.
pub fn sort_ranked<T: Ranked>(items: &mut [T]) {
    items.sort_by_key(|item| (item.rank(), item.id()));
}

/// Ids in display order.
pub fn ids_of<T: Ranked>(items: &[T]) -> Vec<DbId> {
    items.iter().map(Ranked::id).collect()
}

// ---------------------------------------------------------------------------
// ReorderRequest
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Up,
    Down,
}

/// "Move the item at `index` one step in `direction`", relative to a
/// snapshot of the list. Consumed once, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReorderRequest {
    pub index: usize,
    pub direction: Direction,
}

impl ReorderRequest {
    pub fn up(index: usize) -> Self {
        Self {
            index,
            direction: Direction::Up,
        }
    }

    pub fn down(index: usize) -> Self {
        Self {
            index,
            direction: Direction::Down,
        }
    }

    /// Position of the neighbour to swap with, or `None` when the item is
    /// already at that end of the list.
    pub fn neighbor(&self, len: usize) -> Result<Option<usize>, ReorderError> {
        if self.index >= len {
            return Err(ReorderError::Invalid(format!(
                "index {} is out of range for a list of {len} items",
                self.index
            )));
        }
        Ok(match self.direction {
            Direction::Up => self.index.checked_sub(1),
            Direction::Down => (self.index + 1 < len).then_some(self.index + 1),
        })
    }
}

/// Swap `items[request.index]` with its neighbour in place.
///
/// Returns `false` (and leaves `items` untouched) for a move past either end.
pub fn swap_neighbors<T>(items: &mut [T], request: ReorderRequest) -> Result<bool, ReorderError> {
    match request.neighbor(items.len())? {
        Some(neighbor) => {
            items.swap(request.index, neighbor);
            Ok(true)
        }
        None => Ok(false),
    }
}

// ---------------------------------------------------------------------------
// RankAssignment
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankEntry {
    pub id: DbId,
    pub rank: i32,
}

/// New ranks for a collection, applied as one unit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RankAssignment {
    entries: Vec<RankEntry>,
}

impl RankAssignment {
    pub fn entries(&self) -> &[RankEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn rank_of(&self, id: DbId) -> Option<i32> {
        self.entries.iter().find(|e| e.id == id).map(|e| e.rank)
    }

    pub fn ordered_ids(&self) -> Vec<DbId> {
        self.entries.iter().map(|e| e.id).collect()
    }
}

/// Assign `rank = position` to each id of an already-permuted list.
///
/// Rejects lists that name the same id twice.
pub fn assignment_for(ordered_ids: &[DbId]) -> Result<RankAssignment, ReorderError> {
    let mut seen = HashSet::with_capacity(ordered_ids.len());
    if let Some(dup) = ordered_ids.iter().find(|id| !seen.insert(**id)) {
        return Err(ReorderError::Invalid(format!("id {dup} appears more than once")));
    }

    let entries = ordered_ids
        .iter()
        .enumerate()
        .map(|(position, &id)| {
            let rank = i32::try_from(position).map_err(|_| {
                ReorderError::Invalid(format!("{} items exceed the rank range", ordered_ids.len()))
            })?;
            Ok(RankEntry { id, rank })
        })
        .collect::<Result<Vec<_>, ReorderError>>()?;

    Ok(RankAssignment { entries })
}

// ---------------------------------------------------------------------------
// compute_move
// ---------------------------------------------------------------------------

/// Outcome of [`compute_move`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MovePlan {
    /// The item is already at that end; nothing to persist.
    NoOp,
    Apply(RankAssignment),
}

/// Translate a single up/down move on `current_order` into the ranks to
/// persist.
pub fn compute_move(
    current_order: &[DbId],
    request: ReorderRequest,
) -> Result<MovePlan, ReorderError> {
    let mut order = current_order.to_vec();
    if !swap_neighbors(&mut order, request)? {
        return Ok(MovePlan::NoOp);
    }
    Ok(MovePlan::Apply(assignment_for(&order)?))
}
