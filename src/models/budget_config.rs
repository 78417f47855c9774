//! The loaded budget configuration
//!
//! Four collections describe a month: paydays, charities, expenses and bills.
//! Declaration order is kept everywhere and drives report row order.

use serde::{Deserialize, Serialize};

use super::bill::Bill;
use super::charity::Charity;
use super::expense::Expense;
use super::income::IncomeSource;

/// Everything the calculator knows about a month's money
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetConfig {
    #[serde(default)]
    pub paydays: Vec<IncomeSource>,
    #[serde(default)]
    pub charities: Vec<Charity>,
    #[serde(default)]
    pub expenses: Vec<Expense>,
    #[serde(default)]
    pub bills: Vec<Bill>,
}

impl BudgetConfig {
    /// Check if the configuration has nothing in it at all
    pub fn is_empty(&self) -> bool {
        self.paydays.is_empty()
            && self.charities.is_empty()
            && self.expenses.is_empty()
            && self.bills.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Contribution, Money};
    use rust_decimal_macros::dec;

    #[test]
    fn test_deserialize_full_document() {
        let json = r#"{
            "paydays": [{"frequency": "semimonthly", "amount": 1500}],
            "charities": [{"name": "A", "amount": 0, "percentage": 0.1}],
            "expenses": [{"name": "Rent", "amount": 1000, "balance": 0}],
            "bills": [{"name": "Gym", "amount": 40, "dueOnDay": 5}]
        }"#;
        let config: BudgetConfig = serde_json::from_str(json).unwrap();

        assert_eq!(config.paydays.len(), 1);
        assert_eq!(
            config.charities[0].contribution,
            Contribution::PercentageOfIncome(dec!(0.1))
        );
        assert_eq!(config.expenses[0].amount, Money::new(dec!(1000)));
        assert_eq!(config.bills[0].due_on_day, 5);
    }

    #[test]
    fn test_missing_collections_are_empty() {
        let config: BudgetConfig = serde_json::from_str("{}").unwrap();
        assert!(config.is_empty());
    }
}
