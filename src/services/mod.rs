//! Service layer for the payday calculator
//!
//! Pure computations over an already-loaded configuration: income
//! resolution and the half-month budget engine.

pub mod budget;
pub mod income;

pub use budget::{
    compute_balance, compute_bill_rows, compute_charity_rows, compute_expense_rows,
    select_bills_for_half, BudgetResult, BudgetService,
};
pub use income::{resolve_income, sum_income};
