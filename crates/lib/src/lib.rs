//! vipaths-lib: bulk filesystem edits through a text editor
//!
//! The user edits a listing of paths; this crate works out what changed and
//! applies it:
//! - `editor`: opens the listing in `$EDITOR` and reads the result back
//! - `reconcile`: pairs original and edited lines into `Instruction`s, deepest paths first
//! - `instruction`: rename, remove, and copy operations against the filesystem
//! - `execute`: applies instructions in order, stopping at the first failure

pub mod consts;
pub mod editor;
pub mod execute;
pub mod instruction;
pub mod reconcile;
pub mod util;

pub use editor::{EditorCommand, EditorError};
pub use execute::{ExecuteError, ExecuteOptions, ExecuteSummary, execute};
pub use instruction::{ApplyError, Instruction};
pub use reconcile::{ReconcileError, classify, reconcile};
