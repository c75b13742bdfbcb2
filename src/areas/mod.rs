//! Collaborators holding state
//!
//! - `repository`: the capability the navigator needs from a git repository
//! - `git_cli`: that capability implemented with the `git` executable
//! - `ref_store`: the saved branch a walk returns to

pub mod git_cli;
pub mod ref_store;
pub mod repository;
