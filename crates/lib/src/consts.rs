/// Program name, also used as the scratch file prefix.
pub const APP_NAME: &str = "vi-paths";

/// Environment variable naming the editor to run.
pub const EDITOR_ENV_VAR: &str = "EDITOR";
