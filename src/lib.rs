//! Payday Calculator - semimonthly budgeting from a config file
//!
//! Reads a month's paydays, charities, expenses and bills, and works out the
//! budget for one half of the month: charity gifts on the confirmed income,
//! half of each monthly expense, the bills due in that half, and what is left
//! over (or short).
//!
//! # Architecture
//!
//! - `config`: Config file location and loading
//! - `error`: Custom error types and exit codes
//! - `models`: Money, half-month periods and configuration entities
//! - `services`: The budget engine and income resolution
//! - `reports`: Report rows, sections and the balance outcome
//! - `display`: Terminal tables
//! - `export`: JSON and CSV output
//! - `cli`: Argument parsing and interactive prompts
//!
//! # Example
//!
//! ```rust
//! use payday::models::{Bill, BudgetConfig, Charity, Expense, HalfMonth, IncomeSource, Money};
//! use payday::services::BudgetService;
//! use rust_decimal_macros::dec;
//!
//! # fn main() -> payday::PaydayResult<()> {
//! let config = BudgetConfig {
//!     paydays: vec![IncomeSource::new("semimonthly", Money::new(dec!(1500)))],
//!     charities: vec![Charity::percentage("A", dec!(0.1))],
//!     expenses: vec![Expense::new("Rent", Money::new(dec!(1000)))],
//!     bills: vec![Bill::new("Gym", Money::new(dec!(40)), 5)],
//! };
//!
//! let service = BudgetService::new(&config);
//! let result = service.calculate(HalfMonth::First, service.total_income()?)?;
//! assert_eq!(result.balance, Money::new(dec!(810)));
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod reports;
pub mod services;

pub use error::{PaydayError, PaydayResult};
