//! Charitable giving model
//!
//! A charity is given either a flat amount or a share of the period's income.
//! On disk an entry carries both an `amount` and a `percentage` field; a
//! non-zero percentage wins, matching how existing config files are written.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::money::{deserialize_decimal, Money};

/// How much a charity receives
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contribution {
    /// A fixed amount every half-month
    FlatAmount(Money),
    /// A fraction of the confirmed income (`0.10` for 10%)
    PercentageOfIncome(Decimal),
}

impl Contribution {
    /// The amount given for a period with the given income
    ///
    /// `None` if a percentage share of `income` overflows.
    pub fn amount_for(&self, income: Money) -> Option<Money> {
        match self {
            Self::FlatAmount(amount) => Some(*amount),
            Self::PercentageOfIncome(fraction) => income.checked_scale_by(*fraction),
        }
    }
}

/// A configured charity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "CharityRecord", into = "CharityRecord")]
pub struct Charity {
    pub name: String,
    pub contribution: Contribution,
}

impl Charity {
    /// Create a charity that receives a flat amount
    pub fn flat(name: impl Into<String>, amount: Money) -> Self {
        Self {
            name: name.into(),
            contribution: Contribution::FlatAmount(amount),
        }
    }

    /// Create a charity that receives a fraction of income
    pub fn percentage(name: impl Into<String>, fraction: Decimal) -> Self {
        Self {
            name: name.into(),
            contribution: Contribution::PercentageOfIncome(fraction),
        }
    }
}

/// Document shape of a charity entry
#[derive(Debug, Clone, Serialize, Deserialize)]
struct CharityRecord {
    name: String,
    #[serde(default)]
    amount: Money,
    #[serde(default, deserialize_with = "deserialize_decimal")]
    percentage: Decimal,
}

impl From<CharityRecord> for Charity {
    fn from(record: CharityRecord) -> Self {
        if record.percentage.is_zero() {
            return Self::flat(record.name, record.amount);
        }

        if !record.amount.is_zero() {
            tracing::warn!(
                charity = %record.name,
                amount = %record.amount,
                percentage = %record.percentage,
                "charity has both an amount and a percentage; using the percentage"
            );
        }
        Self::percentage(record.name, record.percentage)
    }
}

impl From<Charity> for CharityRecord {
    fn from(charity: Charity) -> Self {
        let (amount, percentage) = match charity.contribution {
            Contribution::FlatAmount(amount) => (amount, Decimal::ZERO),
            Contribution::PercentageOfIncome(fraction) => (Money::zero(), fraction),
        };
        Self {
            name: charity.name,
            amount,
            percentage,
        }
    }
}
