//! CLI command handlers
//!
//! This module bridges clap argument parsing, the interactive prompts and the
//! budget engine.

pub mod calculate;
pub mod prompt;

pub use calculate::{handle_calculate, CalculateArgs, OutputFormat};
pub use prompt::Prompter;
