//! Turn an original listing and its edited counterpart into instructions.
//!
//! Line `i` of the edited listing describes what should happen to line `i`
//! of the original. For each pair, after trimming both sides:
//!
//! 1. `copy <dest>` produces [`Instruction::Copy`] to `<dest>`
//! 2. an empty line produces [`Instruction::Remove`]
//! 3. a different path produces [`Instruction::Rename`]
//! 4. an unchanged line produces nothing
//!
//! Pairs are visited deepest-first (by separator count of the original path)
//! so that entries inside a directory are handled before the directory
//! itself is renamed, removed, or copied. Pairs of equal depth keep their
//! listing order.

use thiserror::Error;
use tracing::debug;

use crate::instruction::Instruction;
use crate::util::sort::{path_depth, sort_stable_in_lockstep};

/// Prefix that turns an edited line into a copy directive.
pub const COPY_DIRECTIVE: &str = "copy";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReconcileError {
  /// Lines were added or removed in the editor, so pairs can't be matched up.
  #[error("line count mismatch: before {before}, after {after}")]
  LengthMismatch { before: usize, after: usize },
}

/// Derive the ordered instruction list for an edited listing.
pub fn reconcile(mut before: Vec<String>, mut after: Vec<String>) -> Result<Vec<Instruction>, ReconcileError> {
  if before.len() != after.len() {
    return Err(ReconcileError::LengthMismatch {
      before: before.len(),
      after: after.len(),
    });
  }

  sort_stable_in_lockstep(&mut before, &mut [&mut after[..]], |a, b| path_depth(a) > path_depth(b));

  let instructions: Vec<Instruction> = before
    .iter()
    .zip(&after)
    .filter_map(|(before, after)| classify(before, after))
    .inspect(|instruction| debug!(kind = instruction.kind(), "derived instruction"))
    .collect();

  debug!(
    lines = before.len(),
    instructions = instructions.len(),
    "reconciled listing"
  );

  Ok(instructions)
}

/// Classify a single (original, edited) pair.
///
/// Returns `None` when the line was left unchanged.
pub fn classify(before: &str, after: &str) -> Option<Instruction> {
  let before = before.trim();
  let after = after.trim();

  if let Some(dest) = copy_destination(after) {
    return Some(Instruction::Copy {
      from: before.to_string(),
      to: dest.to_string(),
    });
  }

  if after.is_empty() {
    return Some(Instruction::Remove {
      name: before.to_string(),
    });
  }

  if after != before {
    return Some(Instruction::Rename {
      before: before.to_string(),
      after: after.to_string(),
    });
  }

  None
}

/// Destination of a `copy <dest>` line, if `line` is one.
fn copy_destination(line: &str) -> Option<&str> {
  let rest = line.strip_prefix(COPY_DIRECTIVE)?;
  rest.starts_with(' ').then_some(rest.trim())
}
