//! Money type for representing prices and totals.
//!
//! Amounts are whole units of the smallest currency denomination (e.g. whole
//! rupees), stored as integers so totals never accumulate floating-point
//! error. Arithmetic saturates instead of overflowing: the cart never fails on
//! a total.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Add;

/// A monetary amount in the smallest currency unit.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Money {
    /// Amount in smallest currency unit.
    pub amount: i64,
}

impl Money {
    /// Create a new Money value.
    pub const fn new(amount: i64) -> Self {
        Self { amount }
    }

    /// Zero.
    pub const fn zero() -> Self {
        Self::new(0)
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount == 0
    }

    /// Check if this is positive.
    pub fn is_positive(&self) -> bool {
        self.amount > 0
    }

    /// Multiply by a quantity, saturating at the bounds of `i64`.
    pub fn saturating_multiply(&self, factor: i64) -> Money {
        Money::new(self.amount.saturating_mul(factor))
    }

    /// Sum an iterator of Money values, saturating at the bounds of `i64`.
    pub fn sum<I: IntoIterator<Item = Money>>(iter: I) -> Money {
        iter.into_iter().fold(Money::zero(), |acc, m| acc + m)
    }

    /// Format with a currency prefix and thousands grouping (e.g. "₹8,500").
    pub fn display(&self, symbol: &str) -> String {
        format!("{}{}", symbol, self.display_amount())
    }

    /// Format the amount with thousands grouping and no symbol.
    pub fn display_amount(&self) -> String {
        group_thousands(self.amount)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        Money::new(self.amount.saturating_add(other.amount))
    }
}

impl From<i64> for Money {
    fn from(amount: i64) -> Self {
        Money::new(amount)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_amount())
    }
}

fn group_thousands(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if amount < 0 {
        out.push('-');
    }
    let lead = digits.len() % 3;
    for (i, ch) in digits.chars().enumerate() {
        if i != 0 && (i + 3 - lead) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(8500), "8,500");
        assert_eq!(group_thousands(123456), "123,456");
        assert_eq!(group_thousands(1234567), "1,234,567");
        assert_eq!(group_thousands(-1234), "-1,234");
    }

    #[test]
    fn test_group_thousands_extremes() {
        assert_eq!(group_thousands(i64::MAX), "9,223,372,036,854,775,807");
        assert_eq!(group_thousands(i64::MIN), "-9,223,372,036,854,775,808");
    }

    #[test]
    fn test_money_display() {
        assert_eq!(Money::new(8500).display("\u{20b9}"), "\u{20b9}8,500");
        assert_eq!(Money::zero().display("$"), "$0");
        assert_eq!(Money::new(1_000_000).to_string(), "1,000,000");
    }

    #[test]
    fn test_money_saturates() {
        let big = Money::new(i64::MAX);
        assert_eq!((big + Money::new(1)).amount, i64::MAX);
        assert_eq!(big.saturating_multiply(2).amount, i64::MAX);
    }

    #[test]
    fn test_money_sum() {
        let total = Money::sum([Money::new(100), Money::new(200), Money::new(300)]);
        assert_eq!(total, Money::new(600));
        assert_eq!(Money::sum(Vec::<Money>::new()), Money::zero());
    }

    #[test]
    fn test_money_serializes_as_integer() {
        let json = serde_json::to_string(&Money::new(8500)).unwrap();
        assert_eq!(json, "8500");
    }
}
