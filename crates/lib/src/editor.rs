//! Editing a listing in the user's text editor.
//!
//! The listing is written one entry per line to a scratch file, the editor
//! named by `$EDITOR` is run on it with the terminal attached, and the file
//! is read back once the editor exits.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};

use thiserror::Error;
use tracing::{debug, info};

use crate::consts::{APP_NAME, EDITOR_ENV_VAR};

#[derive(Debug, Error)]
pub enum EditorError {
  #[error("$EDITOR not set")]
  NotSet,

  #[error("$EDITOR {0:?} not found in $PATH")]
  NotFound(String),

  #[error("failed to create scratch file")]
  ScratchFile(#[source] io::Error),

  #[error("failed to run {program:?}")]
  Spawn {
    program: String,
    #[source]
    source: io::Error,
  },

  #[error("{program:?} exited with {status}")]
  Failed { program: String, status: ExitStatus },

  #[error("failed to read back scratch file")]
  ReadBack(#[source] io::Error),
}

/// A resolved editor invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorCommand {
  /// The editor as configured, used in messages.
  pub name: String,

  /// Resolved executable.
  pub program: PathBuf,

  /// Extra arguments placed before the file name, e.g. `--wait`.
  pub args: Vec<String>,
}

impl EditorCommand {
  /// Read the editor from `$EDITOR` and resolve it on `$PATH`.
  pub fn from_env() -> Result<Self, EditorError> {
    let value = std::env::var(EDITOR_ENV_VAR).unwrap_or_default();
    Self::parse(&value)
  }

  /// Parse an editor command line such as `vim` or `code --wait`.
  pub fn parse(value: &str) -> Result<Self, EditorError> {
    let mut parts = value.split_whitespace();
    let name = parts.next().ok_or(EditorError::NotSet)?;
    let program = which::which(name).map_err(|_| EditorError::NotFound(name.to_string()))?;

    Ok(Self {
      name: name.to_string(),
      program,
      args: parts.map(str::to_string).collect(),
    })
  }

  /// Open `lines` in the editor and return the edited lines.
  ///
  /// Blocks until the editor exits. A non-zero exit status is an error and
  /// the edited content is discarded.
  pub fn edit_lines(&self, lines: &[String]) -> Result<Vec<String>, EditorError> {
    let mut scratch = tempfile::Builder::new()
      .prefix(APP_NAME)
      .tempfile()
      .map_err(EditorError::ScratchFile)?;

    for line in lines {
      writeln!(scratch, "{}", line).map_err(EditorError::ScratchFile)?;
    }
    scratch.flush().map_err(EditorError::ScratchFile)?;

    self.run(scratch.path())?;

    // Read by path: some editors replace the file instead of writing in place.
    let content = fs::read_to_string(scratch.path()).map_err(EditorError::ReadBack)?;
    let edited: Vec<String> = content.lines().map(str::to_string).collect();

    debug!(before = lines.len(), after = edited.len(), "read back edited listing");
    Ok(edited)
  }

  fn run(&self, file: &Path) -> Result<(), EditorError> {
    info!(editor = %self.program.display(), file = %file.display(), "opening editor");

    let status = Command::new(&self.program)
      .args(&self.args)
      .arg(file)
      .status()
      .map_err(|source| EditorError::Spawn {
        program: self.name.clone(),
        source,
      })?;

    if !status.success() {
      return Err(EditorError::Failed {
        program: self.name.clone(),
        status,
      });
    }

    Ok(())
  }
}
