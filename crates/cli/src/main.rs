mod cmd;
mod output;

use std::ffi::OsString;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cmd::{EditOptions, cmd_edit};
use output::OutputFormat;

/// vi-paths - rename, move, copy, and delete files by editing their paths in $EDITOR
///
/// Each line is one path. Change a line to rename or move it, clear it to
/// delete it, or write `copy <dest>` to copy it. Don't add or remove lines.
#[derive(Parser)]
#[command(name = "vi-paths")]
#[command(author, version)]
struct Cli {
  /// Don't execute any operations, just print them
  #[arg(long)]
  dry_run: bool,

  /// Enable verbose logging
  #[arg(short, long)]
  verbose: bool,

  /// Output format for the derived changes
  #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
  format: OutputFormat,

  /// Paths to edit, e.g. from your shell's globbing like ./**
  ///
  /// Paths must be valid UTF-8.
  paths: Vec<OsString>,
}

fn main() {
  let cli = Cli::parse();

  // RUST_LOG wins over --verbose
  let default_level = if cli.verbose { "debug" } else { "error" };
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .without_time()
    .init();

  let options = EditOptions {
    dry_run: cli.dry_run,
    format: cli.format,
  };

  if let Err(err) = cmd_edit(cli.paths, &options) {
    output::print_error(&format!("{:#}", err));
    std::process::exit(1);
  }
}
