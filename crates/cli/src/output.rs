//! CLI output formatting utilities.
//!
//! Provides consistent formatting for terminal output including colored status
//! messages, instruction traces, and Unicode symbols.

use anyhow::Context;
use clap::ValueEnum;
use owo_colors::{OwoColorize, Stream};

use vipaths_lib::Instruction;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
  #[default]
  Text,
  Json,
}

impl OutputFormat {
  pub fn is_json(self) -> bool {
    matches!(self, OutputFormat::Json)
  }
}

pub mod symbols {
  pub const SUCCESS: &str = "✓";
  pub const ERROR: &str = "✗";
  pub const INFO: &str = "•";
  pub const ADD: &str = "+";
  pub const MODIFY: &str = "~";
  pub const REMOVE: &str = "-";
}

/// Symbol shown next to an instruction in the trace.
pub fn instruction_symbol(instruction: &Instruction) -> &'static str {
  match instruction {
    Instruction::Rename { .. } => symbols::MODIFY,
    Instruction::Remove { .. } => symbols::REMOVE,
    Instruction::Copy { .. } => symbols::ADD,
  }
}

pub fn print_instruction(instruction: &Instruction) {
  let symbol = instruction_symbol(instruction);
  let colored = match instruction {
    Instruction::Rename { .. } => format!("{}", symbol.if_supports_color(Stream::Stdout, |s| s.yellow())),
    Instruction::Remove { .. } => format!("{}", symbol.if_supports_color(Stream::Stdout, |s| s.red())),
    Instruction::Copy { .. } => format!("{}", symbol.if_supports_color(Stream::Stdout, |s| s.green())),
  };
  println!("{} {}", colored, instruction);
}

pub fn print_success(message: &str) {
  println!(
    "{} {}",
    symbols::SUCCESS.if_supports_color(Stream::Stdout, |s| s.green()),
    message
  );
}

pub fn print_error(message: &str) {
  eprintln!(
    "{} {}",
    symbols::ERROR.if_supports_color(Stream::Stderr, |s| s.red()),
    message.if_supports_color(Stream::Stderr, |s| s.red())
  );
}

pub fn print_info(message: &str) {
  println!(
    "{} {}",
    symbols::INFO.if_supports_color(Stream::Stdout, |s| s.blue()),
    message
  );
}

pub fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
  let json = serde_json::to_string_pretty(value).context("Failed to serialize to JSON")?;
  println!("{}", json);
  Ok(())
}
