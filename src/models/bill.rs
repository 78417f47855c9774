//! Recurring bill model

use serde::{Deserialize, Serialize};

use super::money::Money;
use super::period::HalfMonth;

/// A bill charged in full once a month on a fixed day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bill {
    pub name: String,
    pub amount: Money,
    /// Day of month the bill is due (1-31); anything else counts as second half
    #[serde(rename = "dueOnDay")]
    pub due_on_day: i32,
}

impl Bill {
    /// Create a new bill
    pub fn new(name: impl Into<String>, amount: Money, due_on_day: i32) -> Self {
        Self {
            name: name.into(),
            amount,
            due_on_day,
        }
    }

    /// The half of the month this bill falls in
    pub fn half_month(&self) -> HalfMonth {
        HalfMonth::classify_due_day(self.due_on_day)
    }

    /// Check if the bill is due during the given half
    pub fn is_due_in(&self, half: HalfMonth) -> bool {
        self.half_month() == half
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_deserialize_due_on_day() {
        let json = r#"{"name": "Gym", "amount": 40, "dueOnDay": 5}"#;
        let bill: Bill = serde_json::from_str(json).unwrap();
        assert_eq!(bill.due_on_day, 5);
        assert_eq!(bill.amount, Money::new(dec!(40)));
        assert_eq!(bill.half_month(), HalfMonth::First);
    }

    #[test]
    fn test_is_due_in() {
        let rent = Bill::new("Rent", Money::new(dec!(1200)), 15);
        assert!(rent.is_due_in(HalfMonth::Second));
        assert!(!rent.is_due_in(HalfMonth::First));

        let phone = Bill::new("Phone", Money::new(dec!(55)), 14);
        assert!(phone.is_due_in(HalfMonth::First));
        assert!(!phone.is_due_in(HalfMonth::Second));
    }

    #[test]
    fn test_negative_due_day_is_second_half() {
        let json = r#"{"name": "Odd", "amount": 10, "dueOnDay": -1}"#;
        let bill: Bill = serde_json::from_str(json).unwrap();
        assert_eq!(bill.due_on_day, -1);
        assert!(bill.is_due_in(HalfMonth::Second));
        assert!(!bill.is_due_in(HalfMonth::First));
    }
}
