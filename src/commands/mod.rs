//! History navigation
//!
//! [`Navigator`] turns a [`WalkCommand`] into at most a couple of checkouts,
//! consulting the saved reference on the way. Each verb lives in its own module:
//!
//! - `start`: save the current branch, go to the oldest commit (or a given one)
//! - `next`: one commit towards the tip of the saved branch
//! - `prev`: one commit towards the first commit
//! - `end`: back to the saved branch
//!
//! [`Navigator`]: navigator::Navigator
//! [`WalkCommand`]: navigator::WalkCommand

pub mod end;
pub mod navigator;
pub mod next;
pub mod prev;
pub mod start;

#[cfg(test)]
pub(crate) mod fake;
