//! Half-month budget periods
//!
//! A month is budgeted in two halves: days 1 through 14, and the 15th through
//! the end of the month. Bills are assigned to a half by their due day.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// First day of the first half of the month
pub const FIRST_HALF_START_DAY: i32 = 1;

/// First day of the second half of the month
pub const SECOND_HALF_START_DAY: i32 = 15;

/// One of the two semimonthly budget periods
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HalfMonth {
    /// Due days in [1, 15)
    First,
    /// Everything else: due days from the 15th on, and anything below 1
    Second,
}

impl HalfMonth {
    /// Classify a bill's due day into the half-month it belongs to
    ///
    /// Days below 1 and past the end of any month fall in the second half.
    pub fn classify_due_day(day: i32) -> Self {
        if (FIRST_HALF_START_DAY..SECOND_HALF_START_DAY).contains(&day) {
            Self::First
        } else {
            Self::Second
        }
    }

    /// Suggest which half is being budgeted given today's day of month
    ///
    /// Uses the same thresholds as [`HalfMonth::classify_due_day`].
    pub fn suggest_for_day(day_of_month: u32) -> Self {
        i32::try_from(day_of_month).map_or(Self::Second, Self::classify_due_day)
    }

    /// Suggest a half for a calendar date
    pub fn suggest_for_date(date: NaiveDate) -> Self {
        Self::suggest_for_day(date.day())
    }

    /// Suggest a half based on the local date
    pub fn current() -> Self {
        Self::suggest_for_date(chrono::Local::now().date_naive())
    }

    /// The other half of the month
    pub fn other(self) -> Self {
        match self {
            Self::First => Self::Second,
            Self::Second => Self::First,
        }
    }

    /// Upper-case label used in prompts and report headers
    pub fn label(self) -> &'static str {
        match self {
            Self::First => "FIRST HALF",
            Self::Second => "SECOND HALF",
        }
    }
}

impl fmt::Display for HalfMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for HalfMonth {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "first" | "1" | "first_half" | "first-half" => Ok(Self::First),
            "second" | "2" | "second_half" | "second-half" => Ok(Self::Second),
            other => Err(format!(
                "Unknown half '{}': expected 'first' or 'second'",
                other
            )),
        }
    }
}
