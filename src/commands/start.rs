use crate::areas::ref_store::RefStore;
use crate::areas::repository::Repository;
use crate::artifacts::branch::revision::Revision;
use crate::commands::navigator::{Movement, Navigator};

impl<R: Repository, S: RefStore> Navigator<'_, R, S> {
    /// Save the current branch and check out the oldest commit of its history,
    /// or `target` when one is given.
    ///
    /// Run again mid-walk, the saved branch is checked out first so the walk
    /// restarts from the same line of history. Starting from a detached `HEAD`
    /// with no saved branch is refused: there would be nothing to return to.
    pub(super) fn start(&mut self, target: Option<Revision>) -> anyhow::Result<Movement> {
        if !self.seed()? {
            let saved = self.ref_store.load()?.ok_or_else(|| {
                anyhow::anyhow!(
                    "HEAD is detached and no starting branch was saved; \
                    check out a branch before starting a walk"
                )
            })?;

            tracing::debug!(branch = %saved, "restarting walk from saved branch");
            self.repository.checkout(&Revision::Branch(saved))?;
        }

        if let Some(target) = target {
            return self.move_to(target);
        }

        let oldest = self
            .repository
            .log(&Revision::Head)?
            .oldest()
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("repository has no commits"))?;

        tracing::debug!(%oldest, "oldest commit in history");
        self.move_to(Revision::Commit(oldest))
    }
}
