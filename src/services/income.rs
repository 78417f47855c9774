//! Income resolution
//!
//! The budget's income starts as the sum of the configured paydays. The
//! operator may replace it with a typed amount; a blank entry keeps the sum.

use crate::error::{PaydayError, PaydayResult};
use crate::models::{IncomeSource, Money};

/// Exact sum of every payday amount
pub fn sum_income(sources: &[IncomeSource]) -> PaydayResult<Money> {
    Money::checked_sum(sources.iter().map(|s| s.amount))
        .ok_or_else(|| PaydayError::amount_overflow("payday total"))
}

/// Apply the operator's override to the computed income
///
/// Whitespace-only input keeps `computed`. Anything else must parse as money;
/// there is no second attempt.
pub fn resolve_income(computed: Money, override_input: &str) -> PaydayResult<Money> {
    let trimmed = override_input.trim();
    if trimmed.is_empty() {
        return Ok(computed);
    }

    let income = Money::parse(trimmed).map_err(|e| PaydayError::input_parse(trimmed, e))?;
    tracing::info!(computed = %computed, income = %income, "income overridden");
    Ok(income)
}
