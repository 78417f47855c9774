//! Money type for representing currency amounts
//!
//! Wraps a `rust_decimal::Decimal` so amounts are exact at any scale. Arithmetic
//! never rounds; rounding only happens when an amount is formatted for display.
//! Every operation is checked and reports leaving the decimal range as `None`.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Number of fractional digits shown when an amount is displayed
pub const DISPLAY_SCALE: u32 = 2;

/// Represents an exact monetary amount
///
/// Equality is by value, so `10.5` and `10.50` compare equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// Create a Money amount from a decimal
    ///
    /// # Examples
    /// ```
    /// use payday::models::Money;
    /// use rust_decimal_macros::dec;
    /// let amount = Money::new(dec!(10.50));
    /// ```
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    /// Get the exact decimal amount
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Check if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Check if the amount is positive
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// Check if the amount is negative
    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    /// Get the absolute value
    pub fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Add another amount, or `None` if the sum leaves the decimal range
    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    /// Subtract another amount, or `None` if the difference leaves the decimal range
    pub fn checked_sub(self, other: Self) -> Option<Self> {
        self.0.checked_sub(other.0).map(Self)
    }

    /// Multiply by a dimensionless fraction (e.g. `0.10` for 10%)
    ///
    /// The product is exact: `33.33 * 0.5` is `16.665`, not `16.66` or `16.67`.
    /// Returns `None` if the product leaves the decimal range.
    pub fn checked_scale_by(self, fraction: Decimal) -> Option<Self> {
        self.0.checked_mul(fraction).map(Self)
    }

    /// Exact sum of a sequence of amounts, or `None` on overflow
    pub fn checked_sum<I>(amounts: I) -> Option<Self>
    where
        I: IntoIterator<Item = Self>,
    {
        amounts
            .into_iter()
            .try_fold(Self::zero(), |acc, amount| acc.checked_add(amount))
    }

    /// The amount rounded to [`DISPLAY_SCALE`] places, half away from zero,
    /// always carrying exactly two fractional digits.
    pub fn rounded_for_display(&self) -> Decimal {
        let mut rounded = self
            .0
            .round_dp_with_strategy(DISPLAY_SCALE, RoundingStrategy::MidpointAwayFromZero);
        rounded.rescale(DISPLAY_SCALE);
        rounded
    }

    /// Format without a currency symbol (e.g. `"-16.67"`)
    pub fn to_plain_string(&self) -> String {
        self.rounded_for_display().to_string()
    }

    /// Parse a money amount from a string
    ///
    /// Accepts formats: "10.50", "-10.50", "+10.50", "$10.50", "10", "0.125", "1e3"
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(MoneyParseError::Empty);
        }

        let (negative, rest) = match trimmed.strip_prefix('-') {
            Some(stripped) => (true, stripped),
            None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
        };
        let rest = rest.strip_prefix('$').unwrap_or(rest);

        let amount = parse_unsigned_decimal(rest)
            .ok_or_else(|| MoneyParseError::InvalidFormat(trimmed.to_string()))?;

        Ok(Self(if negative { -amount } else { amount }))
    }

    /// Format with a currency symbol
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        let rounded = self.rounded_for_display();
        if rounded.is_sign_negative() && !rounded.is_zero() {
            format!("-{}{}", symbol, rounded.abs())
        } else {
            format!("{}{}", symbol, rounded.abs())
        }
    }
}

impl From<Decimal> for Money {
    fn from(amount: Decimal) -> Self {
        Self(amount)
    }
}

impl FromStr for Money {
    type Err = MoneyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_with_symbol("$"))
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserialize_decimal(deserializer).map(Money)
    }
}

/// Largest power of ten accepted in an exponent (`1e28`)
const MAX_EXPONENT: u32 = 28;

/// Map key serde_json uses to hand over a number's literal text when its
/// `arbitrary_precision` feature is on
const JSON_NUMBER_TOKEN: &str = "$serde_json::private::Number";

/// Parse an unsigned literal with an optional exponent ("12.5", "1e3", "2.5E-2")
fn parse_unsigned_decimal(text: &str) -> Option<Decimal> {
    let (mantissa, exponent) = match text.find(|c: char| c == 'e' || c == 'E') {
        Some(at) => (&text[..at], Some(&text[at + 1..])),
        None => (text, None),
    };

    // Decimal::from_str would also take a second sign, underscores or spaces
    if mantissa.is_empty() || !mantissa.chars().all(|c| c.is_ascii_digit() || c == '.') {
        return None;
    }
    let amount = Decimal::from_str(mantissa).ok()?;

    match exponent {
        None => Some(amount),
        Some(exponent) => {
            let exponent: i32 = exponent.parse().ok()?;
            if exponent.unsigned_abs() > MAX_EXPONENT {
                return None;
            }
            apply_exponent(amount, exponent)
        }
    }
}

fn apply_exponent(amount: Decimal, exponent: i32) -> Option<Decimal> {
    if exponent >= 0 {
        (0..exponent).try_fold(amount, |acc, _| acc.checked_mul(Decimal::TEN))
    } else {
        let mut scaled = amount;
        scaled
            .set_scale(amount.scale() + exponent.unsigned_abs())
            .ok()?;
        Some(scaled)
    }
}

/// Parse a literal with an optional leading sign
fn parse_signed_decimal(text: &str) -> Option<Decimal> {
    match text.strip_prefix('-') {
        Some(rest) => parse_unsigned_decimal(rest).map(|amount| -amount),
        None => parse_unsigned_decimal(text.strip_prefix('+').unwrap_or(text)),
    }
}

/// Deserialize an exact decimal from a number or a quoted string
///
/// JSON numbers arrive as their literal text, so `1234567890.123456789` keeps
/// every digit. Formats that only hand over an `f64` (plain YAML numbers) go
/// through the float's shortest round-trip text; quote amounts there that
/// need more than 15 significant digits.
pub fn deserialize_decimal<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(DecimalVisitor)
}

struct DecimalVisitor;

impl<'de> Visitor<'de> for DecimalVisitor {
    type Value = Decimal;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a decimal number or a string containing one")
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Decimal, E> {
        Ok(Decimal::from(value))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Decimal, E> {
        Ok(Decimal::from(value))
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<Decimal, E> {
        Decimal::from_str(&value.to_string())
            .or_else(|_| Decimal::from_scientific(&format!("{:e}", value)))
            .map_err(|_| E::invalid_value(de::Unexpected::Float(value), &self))
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Decimal, E> {
        parse_signed_decimal(value.trim())
            .ok_or_else(|| E::invalid_value(de::Unexpected::Str(value), &self))
    }

    fn visit_map<A>(self, mut map: A) -> Result<Decimal, A::Error>
    where
        A: de::MapAccess<'de>,
    {
        let key: Option<String> = map.next_key()?;
        if key.as_deref() != Some(JSON_NUMBER_TOKEN) {
            return Err(de::Error::invalid_type(de::Unexpected::Map, &self));
        }

        let text: String = map.next_value()?;
        parse_signed_decimal(&text)
            .ok_or_else(|| de::Error::invalid_value(de::Unexpected::Str(&text), &self))
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyParseError {
    #[error("No amount given")]
    Empty,
    #[error("Invalid money format: {0}")]
    InvalidFormat(String),
}
