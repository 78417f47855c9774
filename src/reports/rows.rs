//! Captioned (name, amount) row lists

use serde::Serialize;

use crate::error::{PaydayError, PaydayResult};
use crate::models::Money;

/// Caption for the charities table
pub const CHARITIES_CAPTION: &str = "CHARITIES";

/// Caption for the expenses table
pub const EXPENSES_CAPTION: &str = "EXPENSES";

/// Caption for the bills table
pub const BILLS_CAPTION: &str = "BILLS DUE";

/// A single line in a report table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportRow {
    pub name: String,
    pub amount: Money,
}

impl ReportRow {
    /// Create a new row
    pub fn new(name: impl Into<String>, amount: Money) -> Self {
        Self {
            name: name.into(),
            amount,
        }
    }
}

/// One table's rows in insertion order, with their exact total
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportSection {
    pub caption: String,
    pub rows: Vec<ReportRow>,
    pub total: Money,
}

impl ReportSection {
    /// Create an empty section
    pub fn new(caption: impl Into<String>) -> Self {
        Self {
            caption: caption.into(),
            rows: Vec::new(),
            total: Money::zero(),
        }
    }

    /// Append a row and add its amount to the total
    pub fn push(&mut self, name: impl Into<String>, amount: Money) -> PaydayResult<()> {
        self.total = self
            .total
            .checked_add(amount)
            .ok_or_else(|| PaydayError::amount_overflow(format!("{} total", self.caption)))?;
        self.rows.push(ReportRow::new(name, amount));
        Ok(())
    }

    /// Row names in order
    pub fn names(&self) -> Vec<&str> {
        self.rows.iter().map(|r| r.name.as_str()).collect()
    }

    /// Check if the section has no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
