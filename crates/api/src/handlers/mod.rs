//! Request handlers.
//!
//! The per-kind modules carry admin CRUD and delegate to the matching
//! repository in `clubsite_db`. [`collections`] reorders any kind through
//! the shared reorder service; [`pages`] serves the public, cached lists.

pub mod board_member;
pub mod collections;
pub mod episode;
pub mod pages;
pub mod project;
pub mod tutorial;
