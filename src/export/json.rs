//! JSON Export functionality
//!
//! Exports a budget result with its balance outcome and schema versioning.
//! Amounts are written as exact decimal strings.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::Write;

use crate::error::{PaydayError, PaydayResult};
use crate::models::{HalfMonth, Money};
use crate::reports::{BalanceOutcome, ReportSection};
use crate::services::BudgetResult;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Budget export structure
#[derive(Debug, Clone, Serialize)]
pub struct BudgetExport<'a> {
    /// Schema version for compatibility checking
    pub schema_version: &'static str,

    /// Export timestamp
    pub generated_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: &'static str,

    pub half: HalfMonth,
    pub income: Money,
    pub charities: &'a ReportSection,
    pub expenses: &'a ReportSection,
    pub bills: &'a ReportSection,
    pub balance: Money,
    pub outcome: BalanceOutcome,
}

impl<'a> BudgetExport<'a> {
    /// Wrap a budget result for export
    pub fn new(result: &'a BudgetResult) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION,
            generated_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION"),
            half: result.half,
            income: result.income,
            charities: &result.charities,
            expenses: &result.expenses,
            bills: &result.bills,
            balance: result.balance,
            outcome: result.outcome(),
        }
    }
}

/// Export a budget result as pretty-printed JSON
pub fn export_budget_json<W: Write>(result: &BudgetResult, writer: &mut W) -> PaydayResult<()> {
    let export = BudgetExport::new(result);

    serde_json::to_writer_pretty(&mut *writer, &export)
        .map_err(|e| PaydayError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| PaydayError::Export(e.to_string()))?;

    Ok(())
}
