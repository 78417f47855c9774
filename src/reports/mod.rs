//! Report rows for the payday calculator
//!
//! The budget engine produces its output as captioned sections of
//! (name, amount) rows plus a balance outcome. Renderers and exporters
//! consume these without recomputing anything.

pub mod balance;
pub mod rows;

pub use balance::BalanceOutcome;
pub use rows::{ReportRow, ReportSection};
