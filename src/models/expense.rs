//! Discretionary expense model

use serde::{Deserialize, Serialize};

use super::money::Money;

/// A monthly spending category, budgeted half at a time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    pub name: String,
    /// Full monthly amount
    pub amount: Money,
    /// Running balance for carrying leftovers forward. Not used in the
    /// half-month calculation.
    #[serde(default)]
    pub balance: Money,
}

impl Expense {
    /// Create a new expense with a zero running balance
    pub fn new(name: impl Into<String>, amount: Money) -> Self {
        Self {
            name: name.into(),
            amount,
            balance: Money::zero(),
        }
    }
}
