//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. [`PgOrderedStore`] is the
//! exception: it owns a pool so it can be injected as an
//! `OrderedCollectionStore`.

pub mod board_member_repo;
pub mod episode_repo;
pub mod ordering_repo;
pub mod project_repo;
pub mod tutorial_repo;

pub use board_member_repo::BoardMemberRepo;
pub use episode_repo::EpisodeRepo;
pub use ordering_repo::{OrderingRepo, PgOrderedStore};
pub use project_repo::ProjectRepo;
pub use tutorial_repo::TutorialRepo;
