use crate::artifacts::objects::object_id::ObjectId;
use std::collections::HashSet;

/// One line of ancestry, as produced by `git log --first-parent`.
///
/// Stored newest first. Every commit appears once, so "the commit after X"
/// is always well defined.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct History {
    commits: Vec<ObjectId>,
}

impl History {
    pub fn from_newest_first(commits: Vec<ObjectId>) -> anyhow::Result<Self> {
        let mut seen = HashSet::with_capacity(commits.len());
        if let Some(duplicate) = commits.iter().find(|oid| !seen.insert(*oid)) {
            anyhow::bail!("commit {} appears twice in history", duplicate);
        }

        Ok(Self { commits })
    }

    pub fn len(&self) -> usize {
        self.commits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commits.is_empty()
    }

    pub fn newest(&self) -> Option<&ObjectId> {
        self.commits.first()
    }

    /// First commit of the line, the last one `git log` prints
    pub fn oldest(&self) -> Option<&ObjectId> {
        self.commits.last()
    }

    pub fn newest_first(&self) -> impl DoubleEndedIterator<Item = &ObjectId> {
        self.commits.iter()
    }

    pub fn oldest_first(&self) -> impl DoubleEndedIterator<Item = &ObjectId> {
        self.commits.iter().rev()
    }

    /// Commit immediately newer than `current`.
    ///
    /// `None` when `current` is already the newest commit or is not part of
    /// this line at all.
    pub fn following(&self, current: &ObjectId) -> Option<&ObjectId> {
        let mut commits = self.oldest_first().skip_while(|commit| *commit != current);
        commits.next()?;
        commits.next()
    }

    /// Commit immediately older than `boundary`.
    ///
    /// When `boundary` is the oldest commit there is nothing before it and the
    /// boundary itself is returned; callers detect "already at the start" by
    /// comparing the result with their current position. `None` when
    /// `boundary` is not part of this line.
    pub fn preceding<'h>(&'h self, boundary: &ObjectId) -> Option<&'h ObjectId> {
        let mut commits = self.newest_first().skip_while(|commit| *commit != boundary);
        let boundary = commits.next()?;
        Some(commits.next().unwrap_or(boundary))
    }
}
