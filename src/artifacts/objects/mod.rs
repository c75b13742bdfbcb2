//! Git object identifiers
//!
//! Only commits matter to a history walk, and only by identity: the walker never
//! reads object contents, it compares digests produced by `git log`.

pub mod object_id;

/// Length of a SHA-1 hash in hexadecimal format
pub const OBJECT_ID_LENGTH: usize = 40;

/// Length of a SHA-256 hash in hexadecimal format
pub const SHA256_OBJECT_ID_LENGTH: usize = 64;

/// Length of the abbreviated form shown to users
pub const SHORT_OBJECT_ID_LENGTH: usize = 7;
