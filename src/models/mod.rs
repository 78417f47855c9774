//! Core data models for the payday calculator
//!
//! Money, the half-month period, and the configuration entities the budget
//! engine reads.

pub mod bill;
pub mod budget_config;
pub mod charity;
pub mod expense;
pub mod income;
pub mod money;
pub mod period;

pub use bill::Bill;
pub use budget_config::BudgetConfig;
pub use charity::{Charity, Contribution};
pub use expense::Expense;
pub use income::IncomeSource;
pub use money::{Money, MoneyParseError};
pub use period::HalfMonth;
