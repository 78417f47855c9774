//! Display formatting for terminal output
//!
//! Renders budget results as tables for the terminal.

pub mod report;

pub use report::{format_budget_result, format_section};
