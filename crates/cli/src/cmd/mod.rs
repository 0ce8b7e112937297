mod edit;

pub use edit::{EditOptions, cmd_edit};
