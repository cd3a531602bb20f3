use crate::collection::CollectionKind;
use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Failure reported by an [`OrderedCollectionStore`](crate::store::OrderedCollectionStore).
///
/// Either variant means no rank in the assignment was persisted.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("{kind} item {id} no longer exists")]
    MissingItem { kind: CollectionKind, id: DbId },

    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

/// Errors from the reorder entry points.
///
/// A move that is already at the end of the list is not an error; it comes
/// back as a no-op plan instead.
#[derive(Debug, thiserror::Error)]
pub enum ReorderError {
    #[error("Not authorized to reorder {}", .0.label())]
    NotAuthorized(CollectionKind),

    #[error("Invalid reorder request: {0}")]
    Invalid(String),

    #[error(transparent)]
    Persistence(#[from] StoreError),
}

impl ReorderError {
    /// Message suitable for showing next to the list that failed to move.
    pub fn user_message(&self, kind: CollectionKind) -> String {
        match self {
            Self::NotAuthorized(_) => "Not authorized".to_string(),
            Self::Invalid(msg) => msg.clone(),
            Self::Persistence(_) => format!("Failed to reorder {}", kind.label()),
        }
    }
}

impl From<ReorderError> for CoreError {
    fn from(err: ReorderError) -> Self {
        match err {
            ReorderError::NotAuthorized(kind) => {
                CoreError::Forbidden(format!("Admin role required to reorder {}", kind.label()))
            }
            ReorderError::Invalid(msg) => CoreError::Validation(msg),
            ReorderError::Persistence(StoreError::MissingItem { kind, id }) => {
                CoreError::NotFound {
                    entity: kind.entity(),
                    id,
                }
            }
            ReorderError::Persistence(StoreError::Unavailable(msg)) => CoreError::Internal(msg),
        }
    }
}
