//! Edit command integration tests.

use predicates::prelude::*;

use super::common::TestEnv;

#[test]
fn rename_file_keeps_unchanged_directory() {
  let env = TestEnv::new();
  env.write_file("dir/old.txt", "hello");
  let editor = env.editor_writing(&["dir/new.txt", "dir"]);

  env
    .vi_paths(&editor)
    .args(["dir/old.txt", "dir"])
    .assert()
    .success()
    .stdout(predicate::str::contains("rename dir/old.txt\n    -> dir/new.txt"))
    .stdout(predicate::str::contains("Applied 1 change(s)"));

  assert!(!env.path("dir/old.txt").exists());
  assert_eq!(std::fs::read_to_string(env.path("dir/new.txt")).unwrap(), "hello");
}

#[test]
fn move_into_new_directories() {
  let env = TestEnv::new();
  env.write_file("song.flac", "x");
  let editor = env.editor_writing(&["music/artist/album/song.flac"]);

  env.vi_paths(&editor).arg("song.flac").assert().success();

  assert!(env.path("music/artist/album/song.flac").is_file());
  assert!(!env.path("song.flac").exists());
}

#[test]
fn cleared_lines_remove_files_and_trees() {
  let env = TestEnv::new();
  env.write_file("junk/a/b.txt", "x");
  env.write_file("note.txt", "x");
  env.write_file("keep.txt", "x");
  let editor = env.editor_writing(&["", "  ", "keep.txt"]);

  env
    .vi_paths(&editor)
    .args(["junk", "note.txt", "keep.txt"])
    .assert()
    .success()
    .stdout(predicate::str::contains("remove junk"))
    .stdout(predicate::str::contains("remove note.txt"));

  assert!(!env.path("junk").exists());
  assert!(!env.path("note.txt").exists());
  assert!(env.path("keep.txt").exists());
}

#[test]
fn children_are_handled_before_parents() {
  let env = TestEnv::new();
  env.write_file("a/x", "payload");
  let editor = env.editor_writing(&["", "copy b/x"]);

  let output = env.vi_paths(&editor).args(["a", "a/x"]).assert().success();
  let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();

  let copy_at = stdout.find("copy a/x\n  -> b/x").expect("copy traced");
  let remove_at = stdout.find("remove a").expect("remove traced");
  assert!(copy_at < remove_at, "copy must run before remove:\n{}", stdout);

  assert!(!env.path("a").exists());
  assert_eq!(std::fs::read_to_string(env.path("b/x")).unwrap(), "payload");
}

#[test]
fn copy_directory_creates_only_the_directory() {
  let env = TestEnv::new();
  env.write_file("photos/img.jpg", "x");
  let editor = env.editor_writing(&["copy archive/photos"]);

  env.vi_paths(&editor).arg("photos").assert().success();

  assert!(env.path("archive/photos").is_dir());
  assert!(!env.path("archive/photos/img.jpg").exists());
  assert!(env.path("photos/img.jpg").exists());
}

#[test]
fn dry_run_changes_nothing() {
  let env = TestEnv::new();
  env.write_file("a.txt", "x");
  let editor = env.editor_writing(&["b.txt"]);

  env
    .vi_paths(&editor)
    .args(["--dry-run", "a.txt"])
    .assert()
    .success()
    .stdout(predicate::str::contains("rename a.txt"))
    .stdout(predicate::str::contains("Dry run: 1 change(s) not applied"));

  assert!(env.path("a.txt").exists());
  assert!(!env.path("b.txt").exists());
}

#[test]
fn unchanged_listing_reports_no_changes() {
  let env = TestEnv::new();
  env.write_file("a.txt", "x");
  let editor = env.editor_script("true");

  env
    .vi_paths(&editor)
    .arg("a.txt")
    .assert()
    .success()
    .stdout(predicate::str::contains("No changes"));
}

#[test]
fn json_format_prints_instructions() {
  let env = TestEnv::new();
  env.write_file("a.txt", "x");
  env.write_file("b.txt", "x");
  let editor = env.editor_writing(&["c.txt", ""]);

  let output = env
    .vi_paths(&editor)
    .args(["--dry-run", "--format", "json", "a.txt", "b.txt"])
    .assert()
    .success();

  let json: serde_json::Value = serde_json::from_slice(&output.get_output().stdout).unwrap();
  assert_eq!(
    json,
    serde_json::json!([
      {"kind": "rename", "before": "a.txt", "after": "c.txt"},
      {"kind": "remove", "name": "b.txt"},
    ])
  );
  assert!(env.path("a.txt").exists());
}

#[test]
fn line_count_mismatch_aborts() {
  let env = TestEnv::new();
  env.write_file("a.txt", "x");
  env.write_file("b.txt", "x");
  let editor = env.editor_writing(&["c.txt"]);

  env
    .vi_paths(&editor)
    .args(["a.txt", "b.txt"])
    .assert()
    .failure()
    .stdout(predicate::str::is_empty())
    .stderr(predicate::str::contains("line count mismatch: before 2, after 1"));

  assert!(env.path("a.txt").exists());
  assert!(env.path("b.txt").exists());
}

#[test]
fn first_failure_stops_the_run() {
  let env = TestEnv::new();
  env.write_file("keep.txt", "x");
  let editor = env.editor_writing(&["other.txt", ""]);

  let output = env
    .vi_paths(&editor)
    .args(["missing.txt", "keep.txt"])
    .assert()
    .failure();

  // ENOENT, rendered the way the platform renders it
  let not_found = std::io::Error::from_raw_os_error(2);
  let expected = format!(
    "✗ Failed to apply changes: instruction 1 (rename missing.txt -> other.txt) failed: \
     failed to rename missing.txt to other.txt: {}\n",
    not_found
  );
  let stderr = String::from_utf8(output.get_output().stderr.clone()).unwrap();
  assert_eq!(stderr, expected);
  assert!(env.path("keep.txt").exists());
}

#[test]
fn failing_editor_aborts() {
  let env = TestEnv::new();
  env.write_file("a.txt", "x");
  let editor = env.editor_script("exit 1");

  env
    .vi_paths(&editor)
    .arg("a.txt")
    .assert()
    .failure()
    .stderr(predicate::str::contains("exited with"));

  assert!(env.path("a.txt").exists());
}
