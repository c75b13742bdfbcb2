//! Commit identifier
//!
//! A commit is named by the hexadecimal digest of its content: 40 characters
//! for SHA-1 repositories, 64 for SHA-256 ones. Two identifiers are the same
//! commit exactly when their digests are equal.

use crate::artifacts::objects::{OBJECT_ID_LENGTH, SHA256_OBJECT_ID_LENGTH, SHORT_OBJECT_ID_LENGTH};
use std::fmt;

/// Full hexadecimal commit digest
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct ObjectId(String);

impl ObjectId {
    /// Parse and validate an object ID from a string
    ///
    /// Accepts full-length SHA-1 or SHA-256 digests only; abbreviations are
    /// left to git to resolve. Uppercase digits are normalised to lowercase.
    pub fn try_parse(id: String) -> anyhow::Result<Self> {
        let id = id.trim();
        if id.len() != OBJECT_ID_LENGTH && id.len() != SHA256_OBJECT_ID_LENGTH {
            anyhow::bail!("invalid object ID length: {}", id.len());
        }
        if !id.chars().all(|c| c.is_ascii_hexdigit()) {
            anyhow::bail!("invalid object ID characters: {}", id);
        }

        Ok(Self(id.to_ascii_lowercase()))
    }

    pub fn to_short_oid(&self) -> &str {
        &self.0[..SHORT_OBJECT_ID_LENGTH]
    }
}

impl AsRef<str> for ObjectId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
