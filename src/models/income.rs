//! Income source model
//!
//! A payday that feeds the budget. Only the amount takes part in any
//! computation; the frequency tag is carried for the operator's benefit.

use serde::{Deserialize, Serialize};

use super::money::Money;

/// A configured payday
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomeSource {
    /// Informational tag, e.g. "semimonthly"
    #[serde(default)]
    pub frequency: String,
    pub amount: Money,
}

impl IncomeSource {
    /// Create a new income source
    pub fn new(frequency: impl Into<String>, amount: Money) -> Self {
        Self {
            frequency: frequency.into(),
            amount,
        }
    }
}
