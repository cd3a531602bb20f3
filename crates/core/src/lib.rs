//! Domain core for the clubsite backend.
//!
//! Everything here is storage- and transport-agnostic: the ordered-collection
//! reorder machinery, the shared error taxonomy, and small validation helpers
//! used by the database and API crates.

pub mod action;
pub mod collection;
pub mod error;
pub mod optimistic;
pub mod ordering;
pub mod reorder;
pub mod roles;
pub mod store;
pub mod types;
pub mod validation;
