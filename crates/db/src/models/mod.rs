//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO where every field is optional
//!
//! Entity structs implement [`Ranked`](clubsite_core::ordering::Ranked) so
//! they can be held in an optimistic list directly.

pub mod board_member;
pub mod episode;
pub mod project;
pub mod tutorial;
