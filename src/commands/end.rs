use crate::areas::ref_store::RefStore;
use crate::areas::repository::Repository;
use crate::artifacts::branch::revision::Revision;
use crate::commands::navigator::{Movement, Navigator};

impl<R: Repository, S: RefStore> Navigator<'_, R, S> {
    /// Re-attach `HEAD` to the saved branch.
    ///
    /// Only a detached `HEAD` is mid-walk. On a branch the walk is already
    /// over: that branch becomes the saved one and nothing moves, so local
    /// changes are never overwritten by a stale saved name.
    pub(super) fn end(&mut self) -> anyhow::Result<Movement> {
        if self.seed()? {
            tracing::debug!("HEAD is on a branch, no walk to end");
            return Ok(Movement::Stayed);
        }

        match self.ref_store.load()? {
            Some(saved) => {
                tracing::debug!(branch = %saved, "returning to saved branch");
                self.move_to(Revision::Branch(saved))
            }
            None => Ok(Movement::Stayed),
        }
    }
}
