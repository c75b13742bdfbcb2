//! Walk a git repository's history one commit at a time.
//!
//! `git-walk start` remembers the branch you are on and checks out the oldest
//! commit of its first-parent history. Each `git-walk next` moves one commit
//! towards the branch tip, `git-walk prev` one commit back, and `git-walk end`
//! re-attaches `HEAD` to the remembered branch.
//!
//! - `areas`: collaborators holding state (the repository, the saved reference)
//! - `artifacts`: value types and the history ordering
//! - `commands`: the navigator driving `start`, `next`, `prev` and `end`

pub mod areas;
pub mod artifacts;
pub mod commands;
