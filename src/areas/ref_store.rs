//! Saved reference
//!
//! A walk detaches `HEAD`, so before the first checkout the branch the user
//! was on is written down. Every later invocation reads it back to know which
//! line of history it is walking and where `end` returns to.
//!
//! ## File Format
//!
//! A single line holding the branch name. A missing or empty file means no
//! walk is in progress.

use crate::artifacts::branch::branch_name::{BranchName, SymRefName};
use anyhow::Context;
use file_guard::Lock;
use std::io::Write;
use std::ops::DerefMut;
use std::path::Path;

/// Default name of the state file, relative to the invocation directory
pub const STATE_FILE_NAME: &str = ".git-walk";

pub trait RefStore {
    /// Remember `current` as the branch the walk started from.
    ///
    /// Returns `false` without writing anything when `current` is a detached
    /// `HEAD`: a walk is already in progress and the branch saved when it
    /// started must not be lost.
    fn save(&mut self, current: &SymRefName) -> anyhow::Result<bool>;

    /// The saved branch, or `None` if no walk was ever started
    fn load(&self) -> anyhow::Result<Option<BranchName>>;
}

/// Saved reference kept in a file
#[derive(Debug)]
pub struct FileRefStore {
    path: Box<Path>,
}

impl FileRefStore {
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf().into_boxed_path(),
        }
    }

    fn write(&self, branch: &BranchName) -> anyhow::Result<()> {
        let mut state_file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&self.path)
            .with_context(|| format!("failed to open state file at {:?}", self.path))?;
        let mut lock = file_guard::lock(&mut state_file, Lock::Exclusive, 0, 1)
            .with_context(|| format!("failed to lock state file at {:?}", self.path))?;

        writeln!(lock.deref_mut(), "{}", branch)
            .with_context(|| format!("failed to write state file at {:?}", self.path))?;

        Ok(())
    }
}

impl RefStore for FileRefStore {
    fn save(&mut self, current: &SymRefName) -> anyhow::Result<bool> {
        if current.is_detached_head() {
            return Ok(false);
        }

        let branch = BranchName::try_parse_sym_ref_name(current)?;
        self.write(&branch)?;
        tracing::debug!(branch = %branch, path = ?self.path, "saved starting branch");

        Ok(true)
    }

    fn load(&self) -> anyhow::Result<Option<BranchName>> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => {
                return Err(err)
                    .with_context(|| format!("failed to read state file at {:?}", self.path));
            }
        };

        let name = content.trim_end_matches(['\r', '\n']);
        if name.is_empty() {
            return Ok(None);
        }

        BranchName::try_parse(name.to_string())
            .map(Some)
            .with_context(|| format!("corrupted state file at {:?}", self.path))
    }
}

/// Saved reference that lives only as long as the process
#[derive(Debug, Default)]
pub struct MemoryRefStore {
    saved: Option<BranchName>,
    writes: usize,
}

impl MemoryRefStore {
    pub fn with_saved(branch: BranchName) -> Self {
        Self {
            saved: Some(branch),
            writes: 0,
        }
    }

    /// Number of times `save` actually stored a branch
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl RefStore for MemoryRefStore {
    fn save(&mut self, current: &SymRefName) -> anyhow::Result<bool> {
        if current.is_detached_head() {
            return Ok(false);
        }

        self.saved = Some(BranchName::try_parse_sym_ref_name(current)?);
        self.writes += 1;

        Ok(true)
    }

    fn load(&self) -> anyhow::Result<Option<BranchName>> {
        Ok(self.saved.clone())
    }
}
