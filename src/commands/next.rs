use crate::areas::ref_store::RefStore;
use crate::areas::repository::Repository;
use crate::artifacts::branch::revision::Revision;
use crate::commands::navigator::{Movement, Navigator};

impl<R: Repository, S: RefStore> Navigator<'_, R, S> {
    /// Check out the commit right after the current one on the walked line.
    ///
    /// At the newest commit, or off the line entirely, nothing moves.
    pub(super) fn next(&mut self) -> anyhow::Result<Movement> {
        let current = self.current_commit()?;
        self.seed()?;

        let history = self.walked_line()?;
        match history.following(&current) {
            Some(next) => {
                tracing::debug!(%current, %next, "next commit");
                self.move_to(Revision::Commit(next.clone()))
            }
            None => {
                tracing::debug!(%current, "no newer commit");
                Ok(Movement::Stayed)
            }
        }
    }
}
