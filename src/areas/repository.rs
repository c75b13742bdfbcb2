//! Repository capability
//!
//! The navigator reaches git only through this trait: asking where `HEAD` is,
//! listing one line of history, and checking something out. [`GitCli`] is the
//! real implementation; tests substitute an in-memory one.
//!
//! [`GitCli`]: crate::areas::git_cli::GitCli

use crate::artifacts::branch::branch_name::SymRefName;
use crate::artifacts::branch::revision::Revision;
use crate::artifacts::log::history::History;

pub trait Repository {
    /// Symbolic name of the current position: a branch name, or `HEAD` when
    /// detached
    fn current_ref(&self) -> anyhow::Result<SymRefName>;

    /// First-parent history reachable from `revision`, newest first
    fn log(&self, revision: &Revision) -> anyhow::Result<History>;

    /// Make the working directory match `revision`, discarding conflicting
    /// local changes. Checking out a `Revision::Branch` attaches `HEAD` to it;
    /// anything else detaches it, even a spec that happens to name a branch.
    fn checkout(&mut self, revision: &Revision) -> anyhow::Result<()>;
}
