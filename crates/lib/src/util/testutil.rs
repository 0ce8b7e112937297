//! Test utilities for vipaths-lib.
//!
//! Helpers for tests that need a scripted stand-in for an interactive editor.

use std::path::{Path, PathBuf};

/// Write an executable shell script to `dir` that runs `body` as an editor.
///
/// The scratch file path is available to `body` as `$1`.
#[cfg(unix)]
pub fn fake_editor(dir: &Path, body: &str) -> PathBuf {
  use std::os::unix::fs::PermissionsExt;

  let path = dir.join("fake-editor.sh");
  std::fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
  std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
  path
}
