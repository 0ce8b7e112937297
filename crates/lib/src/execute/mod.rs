//! Ordered instruction execution.
//!
//! Instructions are applied one at a time, in the order the reconciler
//! produced them. The first failure stops the run; instructions that were
//! already applied stay applied.

mod types;

use tracing::{debug, info, warn};

use crate::instruction::Instruction;

pub use types::{ExecuteError, ExecuteOptions, ExecuteSummary};

/// Report and apply `instructions` in order.
///
/// `on_instruction` is called for every instruction before it is applied
/// (and also in a dry run), so the caller can print what is about to happen.
pub fn execute<F>(
  instructions: &[Instruction],
  options: &ExecuteOptions,
  mut on_instruction: F,
) -> Result<ExecuteSummary, ExecuteError>
where
  F: FnMut(&Instruction),
{
  info!(count = instructions.len(), dry_run = options.dry_run, "executing instructions");

  let mut summary = ExecuteSummary::default();

  for (index, instruction) in instructions.iter().enumerate() {
    on_instruction(instruction);
    summary.planned += 1;

    if options.dry_run {
      continue;
    }

    if let Err(source) = instruction.apply() {
      warn!(index, kind = instruction.kind(), error = %source, "instruction failed, stopping");
      return Err(ExecuteError {
        index,
        description: one_line(instruction),
        source,
      });
    }

    debug!(index, kind = instruction.kind(), "instruction applied");
    summary.applied += 1;
  }

  Ok(summary)
}

/// Description of `instruction` with its line breaks folded.
fn one_line(instruction: &Instruction) -> String {
  instruction.to_string().lines().map(str::trim).collect::<Vec<_>>().join(" ")
}
