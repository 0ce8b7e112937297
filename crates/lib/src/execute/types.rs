//! Types for executing an instruction list.
//!
//! This module defines the options, summary, and error types used when
//! applying instructions to the filesystem.

use thiserror::Error;

use crate::instruction::ApplyError;

/// Configuration for instruction execution.
#[derive(Debug, Clone, Default)]
pub struct ExecuteOptions {
  /// Report instructions without touching the filesystem.
  pub dry_run: bool,
}

/// Outcome of a successful execution run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExecuteSummary {
  /// Number of instructions reported to the caller.
  pub planned: usize,

  /// Number of instructions applied. Always zero for a dry run.
  pub applied: usize,
}

impl ExecuteSummary {
  /// Returns true if there was nothing to do.
  pub fn is_empty(&self) -> bool {
    self.planned == 0
  }
}

/// An instruction failed to apply. Instructions after it were not attempted.
#[derive(Debug, Error)]
#[error("instruction {} ({description}) failed", .index + 1)]
pub struct ExecuteError {
  /// Zero-based position of the failing instruction.
  pub index: usize,

  /// Single-line description of the failing instruction.
  pub description: String,

  #[source]
  pub source: ApplyError,
}
