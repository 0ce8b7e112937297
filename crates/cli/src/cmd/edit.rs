//! Implementation of the default `vi-paths` command.
//!
//! Opens the given paths in `$EDITOR`, reconciles the edited listing against
//! the original, and applies the resulting instructions.

use std::ffi::OsString;

use anyhow::{Context, Result, anyhow, bail};
use tracing::debug;

use vipaths_lib::{EditorCommand, ExecuteOptions, execute, reconcile};

use crate::output::{self, OutputFormat};

pub struct EditOptions {
  pub dry_run: bool,
  pub format: OutputFormat,
}

/// Execute the edit command.
///
/// - Resolves the editor from `$EDITOR`
/// - Lets the user edit the listing of `paths`
/// - Derives instructions, deepest paths first
/// - Prints each instruction, then applies it unless this is a dry run
///
/// Stops at the first instruction that fails; earlier ones stay applied.
pub fn cmd_edit(paths: Vec<OsString>, options: &EditOptions) -> Result<()> {
  let paths = paths
    .into_iter()
    .map(|path| {
      path
        .into_string()
        .map_err(|path| anyhow!("path is not valid UTF-8: {}", path.to_string_lossy()))
    })
    .collect::<Result<Vec<String>>>()?;

  if paths.is_empty() {
    bail!("please provide a list of paths, for example using your shell's path globbing like ./**");
  }

  let editor = EditorCommand::from_env().context("Failed to resolve editor")?;
  debug!(editor = %editor.name, paths = paths.len(), "resolved editor");

  let edited = editor.edit_lines(&paths).context("Failed to edit paths")?;
  let instructions = reconcile(paths, edited).context("Failed to reconcile edited paths")?;

  let json = options.format.is_json();
  if json {
    output::print_json(&instructions)?;
  } else if instructions.is_empty() {
    output::print_info("No changes");
    return Ok(());
  }

  let execute_options = ExecuteOptions {
    dry_run: options.dry_run,
  };
  let summary = execute(&instructions, &execute_options, |instruction| {
    if !json {
      output::print_instruction(instruction);
    }
  })
  .context("Failed to apply changes")?;

  if !json {
    if options.dry_run {
      output::print_info(&format!("Dry run: {} change(s) not applied", summary.planned));
    } else {
      output::print_success(&format!("Applied {} change(s)", summary.applied));
    }
  }

  Ok(())
}
