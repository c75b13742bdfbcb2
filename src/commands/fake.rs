//! In-memory repository for navigator tests

use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::SymRefName;
use crate::artifacts::branch::revision::Revision;
use crate::artifacts::log::history::History;
use crate::artifacts::objects::object_id::ObjectId;
use rstest::fixture;
use std::collections::BTreeMap;

pub fn oid(n: usize) -> ObjectId {
    ObjectId::try_parse(format!("{:040x}", n + 1)).expect("valid test digest")
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum FakeHead {
    Attached(String),
    Detached(ObjectId),
}

/// Branches as oldest-first commit chains, plus where `HEAD` points
#[derive(Debug)]
pub struct FakeRepository {
    branches: BTreeMap<String, Vec<ObjectId>>,
    head: FakeHead,
    checkouts: Vec<Revision>,
    failing: bool,
}

/// Branch `main` with commits c0 (oldest) .. c3, `HEAD` attached to it
#[fixture]
pub fn main_at_c3() -> FakeRepository {
    FakeRepository::new("main", 4)
}

impl FakeRepository {
    pub fn new(branch: &str, commits: usize) -> Self {
        Self {
            branches: BTreeMap::from([(branch.to_string(), (0..commits).map(oid).collect())]),
            head: FakeHead::Attached(branch.to_string()),
            checkouts: Vec::new(),
            failing: false,
        }
    }

    /// Add a branch pointing at the `commits`-th commit of an existing one
    pub fn with_branch(mut self, branch: &str, commits: usize) -> Self {
        let chain = self
            .branches
            .values()
            .next()
            .map(|chain| chain[..commits].to_vec())
            .unwrap_or_default();
        self.branches.insert(branch.to_string(), chain);
        self
    }

    pub fn detached_at(mut self, commit: ObjectId) -> Self {
        self.head = FakeHead::Detached(commit);
        self
    }

    pub fn fail_checkouts(&mut self) {
        self.failing = true;
    }

    pub fn checkouts(&self) -> &[Revision] {
        &self.checkouts
    }

    pub fn attached_branch(&self) -> Option<&str> {
        match &self.head {
            FakeHead::Attached(branch) => Some(branch),
            FakeHead::Detached(_) => None,
        }
    }

    pub fn head_commit(&self) -> ObjectId {
        self.log(&Revision::Head)
            .ok()
            .and_then(|history| history.newest().cloned())
            .expect("HEAD points at a commit")
    }

    /// Chain ending at `commit`, taken from whichever branch contains it
    fn chain_to(&self, commit: &ObjectId) -> anyhow::Result<Vec<ObjectId>> {
        self.branches
            .values()
            .find_map(|chain| {
                chain
                    .iter()
                    .position(|c| c == commit)
                    .map(|index| chain[..=index].to_vec())
            })
            .ok_or_else(|| anyhow::anyhow!("unknown commit {}", commit))
    }

    fn branch(&self, name: &str) -> anyhow::Result<&Vec<ObjectId>> {
        self.branches
            .get(name)
            .ok_or_else(|| anyhow::anyhow!("unknown branch {}", name))
    }
}

impl Repository for FakeRepository {
    fn current_ref(&self) -> anyhow::Result<SymRefName> {
        Ok(SymRefName::new(match &self.head {
            FakeHead::Attached(branch) => branch.clone(),
            FakeHead::Detached(_) => "HEAD".to_string(),
        }))
    }

    fn log(&self, revision: &Revision) -> anyhow::Result<History> {
        let chain = match revision {
            Revision::Head => match &self.head {
                FakeHead::Attached(branch) => self.branch(branch)?.clone(),
                FakeHead::Detached(commit) => self.chain_to(commit)?,
            },
            Revision::Branch(branch) => self.branch(branch.as_ref())?.clone(),
            Revision::Commit(commit) => self.chain_to(commit)?,
            Revision::Spec(spec) => self.branch(spec)?.clone(),
        };

        History::from_newest_first(chain.into_iter().rev().collect())
    }

    fn checkout(&mut self, revision: &Revision) -> anyhow::Result<()> {
        if self.failing {
            anyhow::bail!("checkout of {} failed", revision);
        }

        self.head = match revision {
            Revision::Head => self.head.clone(),
            Revision::Branch(branch) => {
                self.branch(branch.as_ref())?;
                FakeHead::Attached(branch.to_string())
            }
            Revision::Commit(commit) => {
                self.chain_to(commit)?;
                FakeHead::Detached(commit.clone())
            }
            Revision::Spec(spec) => {
                let tip = self
                    .branch(spec)?
                    .last()
                    .cloned()
                    .ok_or_else(|| anyhow::anyhow!("branch {} has no commits", spec))?;
                FakeHead::Detached(tip)
            }
        };
        self.checkouts.push(revision.clone());

        Ok(())
    }
}
