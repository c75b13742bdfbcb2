use crate::areas::ref_store::RefStore;
use crate::areas::repository::Repository;
use crate::artifacts::branch::revision::Revision;
use crate::artifacts::log::history::History;
use crate::artifacts::objects::object_id::ObjectId;
use derive_new::new;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalkCommand {
    /// Begin a walk at the oldest commit, or at `target` when given
    Start { target: Option<Revision> },
    Next,
    Prev,
    End,
}

/// What a command did to the working directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Movement {
    Moved(Revision),
    /// Nothing to do: already at a boundary of history, or no walk to end
    Stayed,
}

/// Drives a walk over a repository, keeping the starting branch in a store.
///
/// Within one invocation the saved reference is always written before any
/// checkout, so an interrupted run can still find its way back.
#[derive(new)]
pub struct Navigator<'a, R: Repository, S: RefStore> {
    pub(super) repository: &'a mut R,
    pub(super) ref_store: &'a mut S,
}

impl<R: Repository, S: RefStore> Navigator<'_, R, S> {
    pub fn navigate(&mut self, command: WalkCommand) -> anyhow::Result<Movement> {
        tracing::debug!(?command, "navigating");

        let movement = match command {
            WalkCommand::Start { target } => self.start(target)?,
            WalkCommand::Next => self.next()?,
            WalkCommand::Prev => self.prev()?,
            WalkCommand::End => self.end()?,
        };

        tracing::debug!(?movement, "navigation finished");
        Ok(movement)
    }

    /// Save the current branch if `HEAD` is attached to one.
    ///
    /// `false` means `HEAD` is detached, i.e. a walk is already in progress.
    pub(super) fn seed(&mut self) -> anyhow::Result<bool> {
        let current_ref = self.repository.current_ref()?;
        let freshly_saved = self.ref_store.save(&current_ref)?;

        tracing::debug!(%current_ref, freshly_saved, "seeded saved reference");
        Ok(freshly_saved)
    }

    pub(super) fn current_commit(&self) -> anyhow::Result<ObjectId> {
        self.repository
            .log(&Revision::Head)?
            .newest()
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("repository has no commits"))
    }

    /// The line being walked: the saved branch's history, or `HEAD`'s when no
    /// branch was saved
    pub(super) fn walked_line(&self) -> anyhow::Result<History> {
        match self.ref_store.load()? {
            Some(saved) => self.repository.log(&Revision::Branch(saved)),
            None => self.repository.log(&Revision::Head),
        }
    }

    pub(super) fn move_to(&mut self, revision: Revision) -> anyhow::Result<Movement> {
        self.repository.checkout(&revision)?;
        Ok(Movement::Moved(revision))
    }
}
