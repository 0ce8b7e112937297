//! Shared utilities.
//!
//! Ordering helpers and test support used across the crate.

pub mod sort;

#[cfg(test)]
pub mod testutil;
