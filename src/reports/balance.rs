//! Classification of the final balance

use serde::Serialize;

use crate::models::Money;

/// What the balance means for the operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "amount", rename_all = "snake_case")]
pub enum BalanceOutcome {
    /// Money left over to save
    Surplus(Money),
    /// Amount that must be drawn from reserves (always non-negative)
    Shortfall(Money),
    /// Income exactly covers every outlay
    BreakEven,
}

impl BalanceOutcome {
    /// Classify a balance by its sign
    pub fn from_balance(balance: Money) -> Self {
        if balance.is_positive() {
            Self::Surplus(balance)
        } else if balance.is_negative() {
            Self::Shortfall(balance.abs())
        } else {
            Self::BreakEven
        }
    }

    /// One-line message for the end of the report
    pub fn message(&self) -> String {
        match self {
            Self::Surplus(amount) => format!("Left over to save: {}", amount),
            Self::Shortfall(amount) => format!(
                "Not enough to cover this half. Draw this much from your emergency fund: {}",
                amount
            ),
            Self::BreakEven => "You broke even. Exactly.".to_string(),
        }
    }
}
