//! Price input resolution for add-to-cart triggers.

use crate::money::Money;

/// A price as supplied by an add-to-cart trigger.
///
/// Triggers scraped from product cards usually hand over the displayed text
/// (`"₹8,500"`); programmatic callers pass an integer. A legitimately free
/// item must be flagged with [`PriceInput::Free`]: a zero or unparseable
/// price is treated as missing, not as free.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PriceInput {
    /// No price supplied.
    #[default]
    Unspecified,
    /// Integer amount in the smallest currency unit.
    Amount(i64),
    /// Currency-formatted text; every non-digit character is discarded.
    Text(String),
    /// Explicitly free (price 0).
    Free,
}

impl PriceInput {
    /// Resolve to a unit price, using `fallback` whenever the input is
    /// absent, non-positive or unparseable.
    pub fn resolve(&self, fallback: Money) -> Money {
        match self {
            PriceInput::Free => Money::zero(),
            PriceInput::Amount(amount) if *amount > 0 => Money::new(*amount),
            PriceInput::Text(text) => match parse_price(text) {
                Some(amount) if amount > 0 => Money::new(amount),
                _ => fallback,
            },
            PriceInput::Amount(_) | PriceInput::Unspecified => fallback,
        }
    }
}

impl From<i64> for PriceInput {
    fn from(amount: i64) -> Self {
        PriceInput::Amount(amount)
    }
}

impl From<&str> for PriceInput {
    fn from(text: &str) -> Self {
        PriceInput::Text(text.to_string())
    }
}

impl From<String> for PriceInput {
    fn from(text: String) -> Self {
        PriceInput::Text(text)
    }
}

impl<T: Into<PriceInput>> From<Option<T>> for PriceInput {
    fn from(value: Option<T>) -> Self {
        value.map_or(PriceInput::Unspecified, Into::into)
    }
}

/// Extract the integer embedded in a currency-formatted string.
///
/// All characters other than ASCII digits are discarded, so `"₹8,500"` and
/// `"Rs. 8500/-"` both yield `8500`. Returns `None` when no digits remain or
/// the value does not fit in an `i64`.
pub fn parse_price(text: &str) -> Option<i64> {
    let digits: String = text.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    const FALLBACK: Money = Money::new(4999);

    #[test]
    fn test_parse_price() {
        assert_eq!(parse_price("\u{20b9}8,500"), Some(8500));
        assert_eq!(parse_price("Rs. 8500/-"), Some(8500));
        assert_eq!(parse_price("1200"), Some(1200));
        assert_eq!(parse_price("  0  "), Some(0));
    }

    #[test]
    fn test_parse_price_discards_decimal_point() {
        // Decoration includes the decimal point.
        assert_eq!(parse_price("8,500.00"), Some(850000));
    }

    #[test]
    fn test_parse_price_without_digits() {
        assert_eq!(parse_price(""), None);
        assert_eq!(parse_price("\u{20b9}"), None);
        assert_eq!(parse_price("free!"), None);
    }

    #[test]
    fn test_parse_price_overflow() {
        assert_eq!(parse_price("99999999999999999999999"), None);
    }

    #[test]
    fn test_resolve_amount() {
        assert_eq!(PriceInput::Amount(100).resolve(FALLBACK), Money::new(100));
        assert_eq!(PriceInput::Amount(0).resolve(FALLBACK), FALLBACK);
        assert_eq!(PriceInput::Amount(-5).resolve(FALLBACK), FALLBACK);
    }

    #[test]
    fn test_resolve_text() {
        assert_eq!(
            PriceInput::from("\u{20b9}8,500").resolve(FALLBACK),
            Money::new(8500)
        );
        assert_eq!(PriceInput::from("\u{20b9}0").resolve(FALLBACK), FALLBACK);
        assert_eq!(PriceInput::from("N/A").resolve(FALLBACK), FALLBACK);
    }

    #[test]
    fn test_resolve_unspecified_and_free() {
        assert_eq!(PriceInput::Unspecified.resolve(FALLBACK), FALLBACK);
        assert_eq!(PriceInput::Free.resolve(FALLBACK), Money::zero());
    }

    #[test]
    fn test_from_option() {
        assert_eq!(PriceInput::from(None::<i64>), PriceInput::Unspecified);
        assert_eq!(PriceInput::from(Some(10_i64)), PriceInput::Amount(10));
        assert_eq!(
            PriceInput::from(Some("\u{20b9}10")),
            PriceInput::Text("\u{20b9}10".to_string())
        );
    }
}
