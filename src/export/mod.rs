//! Export module for the payday calculator
//!
//! Writes a finished budget in machine-readable formats:
//! - JSON: exact amounts plus the balance outcome, with schema versioning
//! - CSV: one record per row, totals, income and balance (spreadsheet-friendly)

pub mod csv;
pub mod json;

pub use self::csv::export_budget_csv;
pub use self::json::{export_budget_json, BudgetExport, EXPORT_SCHEMA_VERSION};
