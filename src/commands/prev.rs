use crate::areas::ref_store::RefStore;
use crate::areas::repository::Repository;
use crate::artifacts::branch::revision::Revision;
use crate::commands::navigator::{Movement, Navigator};

impl<R: Repository, S: RefStore> Navigator<'_, R, S> {
    /// Check out the commit right before the current one on the walked line.
    pub(super) fn prev(&mut self) -> anyhow::Result<Movement> {
        let current = self.current_commit()?;
        self.seed()?;

        let history = self.walked_line()?;
        match history.preceding(&current) {
            Some(prev) if *prev != current => {
                tracing::debug!(%current, %prev, "previous commit");
                self.move_to(Revision::Commit(prev.clone()))
            }
            _ => {
                tracing::debug!(%current, "no older commit");
                Ok(Movement::Stayed)
            }
        }
    }
}
