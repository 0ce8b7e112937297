//! Filesystem instructions derived from an edited listing.
//!
//! Each [`Instruction`] is produced once by the reconciler, printed, and then
//! applied at most once. Paths are kept as the strings the user typed; no
//! normalization or symlink resolution happens here.
//!
//! # Sharp edge: copying directories
//!
//! [`Instruction::Copy`] of a directory only creates the destination
//! directory itself. Its contents are not copied.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;
use tracing::debug;

/// Mode used for parent directories created by a rename.
const RENAME_PARENT_MODE: u32 = 0o755;

/// Errors raised while applying a single instruction.
///
/// The variant names the sub-step that failed.
#[derive(Debug, Error)]
pub enum ApplyError {
  #[error("failed to create directory {path}")]
  CreateDir {
    path: PathBuf,
    #[source]
    source: io::Error,
  },

  #[error("failed to rename {from} to {to}")]
  Rename {
    from: PathBuf,
    to: PathBuf,
    #[source]
    source: io::Error,
  },

  #[error("failed to remove {path}")]
  Remove {
    path: PathBuf,
    #[source]
    source: io::Error,
  },

  #[error("failed to stat {path}")]
  Stat {
    path: PathBuf,
    #[source]
    source: io::Error,
  },

  #[error("failed to read {path}")]
  Read {
    path: PathBuf,
    #[source]
    source: io::Error,
  },

  #[error("failed to write {path}")]
  Write {
    path: PathBuf,
    #[source]
    source: io::Error,
  },
}

/// A single filesystem change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Instruction {
  /// Move `before` to `after`, creating any missing parents of `after`.
  Rename { before: String, after: String },

  /// Recursively delete `name`. Succeeds if it is already gone.
  Remove { name: String },

  /// Copy a file, or create an empty directory mirroring a directory.
  Copy { from: String, to: String },
}

impl std::fmt::Display for Instruction {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Instruction::Rename { before, after } => write!(f, "rename {}\n    -> {}", before, after),
      Instruction::Remove { name } => write!(f, "remove {}", name),
      Instruction::Copy { from, to } => write!(f, "copy {}\n  -> {}", from, to),
    }
  }
}

impl Instruction {
  /// Short name of the operation, as used in logs and JSON output.
  pub fn kind(&self) -> &'static str {
    match self {
      Instruction::Rename { .. } => "rename",
      Instruction::Remove { .. } => "remove",
      Instruction::Copy { .. } => "copy",
    }
  }

  /// Apply this instruction to the live filesystem.
  pub fn apply(&self) -> Result<(), ApplyError> {
    match self {
      Instruction::Rename { before, after } => apply_rename(Path::new(before), Path::new(after)),
      Instruction::Remove { name } => apply_remove(Path::new(name)),
      Instruction::Copy { from, to } => apply_copy(Path::new(from), Path::new(to)),
    }
  }
}

fn apply_rename(before: &Path, after: &Path) -> Result<(), ApplyError> {
  if let Some(parent) = after.parent().filter(|p| !p.as_os_str().is_empty()) {
    create_dir_all(parent, RENAME_PARENT_MODE)?;
  }

  debug!(from = %before.display(), to = %after.display(), "renaming");
  fs::rename(before, after).map_err(|source| ApplyError::Rename {
    from: before.to_path_buf(),
    to: after.to_path_buf(),
    source,
  })
}

fn apply_remove(name: &Path) -> Result<(), ApplyError> {
  let remove_err = |source| ApplyError::Remove {
    path: name.to_path_buf(),
    source,
  };

  // symlink_metadata so a link to a directory is unlinked, not descended into
  let metadata = match fs::symlink_metadata(name) {
    Ok(metadata) => metadata,
    Err(err) if err.kind() == io::ErrorKind::NotFound => {
      debug!(path = %name.display(), "already absent");
      return Ok(());
    }
    Err(err) => return Err(remove_err(err)),
  };

  let result = if metadata.is_dir() {
    fs::remove_dir_all(name)
  } else {
    fs::remove_file(name)
  };

  match result {
    Ok(()) => Ok(()),
    Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
    Err(err) => Err(remove_err(err)),
  }
}

fn apply_copy(from: &Path, to: &Path) -> Result<(), ApplyError> {
  let metadata = stat(from)?;

  if metadata.is_dir() {
    debug!(from = %from.display(), to = %to.display(), "creating directory copy (contents not copied)");
    return create_dir_all(to, permission_bits(&metadata));
  }

  let parent_metadata = stat(parent_or_current(from))?;
  if let Some(parent) = to.parent().filter(|p| !p.as_os_str().is_empty()) {
    create_dir_all(parent, permission_bits(&parent_metadata))?;
  }

  let content = fs::read(from).map_err(|source| ApplyError::Read {
    path: from.to_path_buf(),
    source,
  })?;

  debug!(from = %from.display(), to = %to.display(), bytes = content.len(), "copying file");
  write_with_mode(to, &content, permission_bits(&metadata)).map_err(|source| ApplyError::Write {
    path: to.to_path_buf(),
    source,
  })
}

fn stat(path: &Path) -> Result<fs::Metadata, ApplyError> {
  fs::metadata(path).map_err(|source| ApplyError::Stat {
    path: path.to_path_buf(),
    source,
  })
}

/// Parent directory of `path`, or `.` when it has none.
fn parent_or_current(path: &Path) -> &Path {
  match path.parent() {
    Some(parent) if !parent.as_os_str().is_empty() => parent,
    _ => Path::new("."),
  }
}

#[cfg(unix)]
fn permission_bits(metadata: &fs::Metadata) -> u32 {
  use std::os::unix::fs::PermissionsExt;
  metadata.permissions().mode() & 0o7777
}

#[cfg(not(unix))]
fn permission_bits(_metadata: &fs::Metadata) -> u32 {
  0
}

fn create_dir_all(path: &Path, mode: u32) -> Result<(), ApplyError> {
  let mut builder = fs::DirBuilder::new();
  builder.recursive(true);

  #[cfg(unix)]
  {
    use std::os::unix::fs::DirBuilderExt;
    builder.mode(mode);
  }
  #[cfg(not(unix))]
  let _ = mode;

  builder.create(path).map_err(|source| ApplyError::CreateDir {
    path: path.to_path_buf(),
    source,
  })
}

/// Write `content` to `path`. `mode` only takes effect when the file is created.
fn write_with_mode(path: &Path, content: &[u8], mode: u32) -> io::Result<()> {
  use std::io::Write;

  let mut options = fs::OpenOptions::new();
  options.write(true).create(true).truncate(true);

  #[cfg(unix)]
  {
    use std::os::unix::fs::OpenOptionsExt;
    options.mode(mode);
  }
  #[cfg(not(unix))]
  let _ = mode;

  let mut file = options.open(path)?;
  file.write_all(content)
}
