//! Value types and history ordering
//!
//! - `branch`: branch names, the symbolic name of `HEAD`, and revisions
//! - `log`: the linear, first-parent history a walk moves along
//! - `objects`: commit identifiers

pub mod branch;
pub mod log;
pub mod objects;
