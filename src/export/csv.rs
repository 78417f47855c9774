//! CSV Export functionality
//!
//! Exports a budget result as `Section,Name,Amount` records. Amounts are
//! rounded to cents the same way they are displayed.

use std::io::Write;

use crate::error::{PaydayError, PaydayResult};
use crate::services::BudgetResult;

/// Export a budget result to CSV
pub fn export_budget_csv<W: Write>(result: &BudgetResult, writer: &mut W) -> PaydayResult<()> {
    let mut csv_writer = ::csv::Writer::from_writer(writer);

    csv_writer
        .write_record(["Section", "Name", "Amount"])
        .map_err(|e| PaydayError::Export(e.to_string()))?;

    let income = result.income.to_plain_string();
    csv_writer
        .write_record(["INCOME", "", income.as_str()])
        .map_err(|e| PaydayError::Export(e.to_string()))?;

    for section in result.sections() {
        for row in &section.rows {
            let amount = row.amount.to_plain_string();
            csv_writer
                .write_record([section.caption.as_str(), row.name.as_str(), amount.as_str()])
                .map_err(|e| PaydayError::Export(e.to_string()))?;
        }

        let total = section.total.to_plain_string();
        csv_writer
            .write_record([section.caption.as_str(), "TOTAL", total.as_str()])
            .map_err(|e| PaydayError::Export(e.to_string()))?;
    }

    let balance = result.balance.to_plain_string();
    csv_writer
        .write_record(["BALANCE", "", balance.as_str()])
        .map_err(|e| PaydayError::Export(e.to_string()))?;

    csv_writer
        .flush()
        .map_err(|e| PaydayError::Export(e.to_string()))?;

    Ok(())
}
