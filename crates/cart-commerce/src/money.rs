//! Money type for representing monetary values.
//!
//! Amounts are unsigned integers in the smallest unit of the shop currency
//! (won by default), so prices can never go negative and no floating point
//! is involved anywhere in the cart arithmetic.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::Add;

/// A non-negative monetary amount.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Money(u64);

impl Money {
    /// Zero amount.
    pub const ZERO: Money = Money(0);

    /// Create a new amount.
    pub const fn new(amount: u64) -> Self {
        Self(amount)
    }

    /// The raw amount.
    pub const fn amount(&self) -> u64 {
        self.0
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Multiply by a quantity, saturating at `u64::MAX`.
    pub fn times(&self, quantity: u32) -> Money {
        Money(self.0.saturating_mul(u64::from(quantity)))
    }

    /// Add another amount, saturating at `u64::MAX`.
    pub fn saturating_add(&self, other: Money) -> Money {
        Money(self.0.saturating_add(other.0))
    }

    /// Format with the given currency convention (e.g., "145,000원").
    pub fn display(&self, format: &CurrencyFormat) -> String {
        format.format(*self)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        self.saturating_add(other)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, |acc, m| acc + m)
    }
}

impl From<u64> for Money {
    fn from(amount: u64) -> Self {
        Self(amount)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Where the currency marker goes relative to the amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MarkerPosition {
    /// "$1,000"
    Prefix,
    /// "1,000원"
    #[default]
    Suffix,
}

/// Locale convention for displaying amounts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurrencyFormat {
    /// Separator inserted between groups of three digits.
    pub group_separator: String,
    /// Currency marker.
    pub marker: String,
    /// Marker placement.
    pub marker_position: MarkerPosition,
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self::won()
    }
}

impl CurrencyFormat {
    /// Korean won: "1,234원".
    pub fn won() -> Self {
        Self {
            group_separator: ",".to_string(),
            marker: "원".to_string(),
            marker_position: MarkerPosition::Suffix,
        }
    }

    /// Format an amount according to this convention.
    pub fn format(&self, amount: Money) -> String {
        let grouped = group_digits(amount.amount(), &self.group_separator);
        match self.marker_position {
            MarkerPosition::Prefix => format!("{}{}", self.marker, grouped),
            MarkerPosition::Suffix => format!("{}{}", grouped, self.marker),
        }
    }
}

fn group_digits(value: u64, separator: &str) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 * separator.len());
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push_str(separator);
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_won_format() {
        let won = CurrencyFormat::won();
        assert_eq!(Money::new(0).display(&won), "0원");
        assert_eq!(Money::new(999).display(&won), "999원");
        assert_eq!(Money::new(3000).display(&won), "3,000원");
        assert_eq!(Money::new(145000).display(&won), "145,000원");
        assert_eq!(Money::new(1234567).display(&won), "1,234,567원");
    }

    #[test]
    fn test_prefix_format() {
        let format = CurrencyFormat {
            group_separator: ".".to_string(),
            marker: "€".to_string(),
            marker_position: MarkerPosition::Prefix,
        };
        assert_eq!(Money::new(1000000).display(&format), "€1.000.000");
    }

    #[test]
    fn test_saturating_arithmetic() {
        let max = Money::new(u64::MAX);
        assert_eq!(max.times(2), max);
        assert_eq!(max + Money::new(1), max);
    }

    #[test]
    fn test_sum() {
        let total: Money = [Money::new(100), Money::new(250)].into_iter().sum();
        assert_eq!(total, Money::new(350));
    }
}
