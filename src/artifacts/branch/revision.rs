use crate::artifacts::branch::REF_ALIASES;
use crate::artifacts::branch::branch_name::{BranchName, DETACHED_HEAD};
use crate::artifacts::objects::object_id::ObjectId;
use std::fmt;

/// Something that can be checked out or have its history listed.
///
/// - `Head`: the current position (`HEAD`, or its alias `@`)
/// - `Branch`: a named, movable reference; checking it out re-attaches `HEAD`
/// - `Commit`: a full digest; checking it out detaches `HEAD`
/// - `Spec`: any other user-supplied revision (`v1.0`, `main~3`, `abc123`),
///   resolved by git itself
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Revision {
    Head,
    Branch(BranchName),
    Commit(ObjectId),
    Spec(String),
}

impl Revision {
    /// Parse a revision typed by the user
    ///
    /// Anything git would read as an option is rejected here so it never
    /// reaches the command line of a git subprocess.
    pub fn try_parse(spec: &str) -> anyhow::Result<Self> {
        let spec = spec.trim();
        let spec = REF_ALIASES
            .iter()
            .find(|(alias, _)| *alias == spec)
            .map_or(spec, |(_, target)| *target);

        if spec.is_empty() {
            anyhow::bail!("revision cannot be empty");
        }
        if spec.starts_with('-') {
            anyhow::bail!("invalid revision: {}", spec);
        }
        if spec.chars().any(|c| c.is_whitespace() || c.is_control()) {
            anyhow::bail!("invalid revision: {:?}", spec);
        }

        if spec == DETACHED_HEAD {
            return Ok(Revision::Head);
        }
        if let Ok(oid) = ObjectId::try_parse(spec.to_string()) {
            return Ok(Revision::Commit(oid));
        }

        Ok(Revision::Spec(spec.to_string()))
    }

    pub fn is_detached(&self) -> bool {
        !matches!(self, Revision::Branch(_))
    }

    pub fn as_arg(&self) -> &str {
        match self {
            Revision::Head => DETACHED_HEAD,
            Revision::Branch(branch) => branch.as_ref(),
            Revision::Commit(oid) => oid.as_ref(),
            Revision::Spec(spec) => spec,
        }
    }
}

impl From<BranchName> for Revision {
    fn from(branch: BranchName) -> Self {
        Revision::Branch(branch)
    }
}

impl From<ObjectId> for Revision {
    fn from(oid: ObjectId) -> Self {
        Revision::Commit(oid)
    }
}

impl fmt::Display for Revision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Revision::Commit(oid) => write!(f, "{}", oid.to_short_oid()),
            other => write!(f, "{}", other.as_arg()),
        }
    }
}
