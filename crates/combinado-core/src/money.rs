//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Céntimos                                         │
//! │    S/ 2.50 is stored as 250 and every sum is exact                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use combinado_core::money::Money;
//!
//! let combo = Money::from_soles(8);
//! let line_total = combo.multiply_quantity(2);
//! assert_eq!(line_total.to_string(), "16");
//!
//! let half = Money::from_cents(250);
//! assert_eq!(half.to_string(), "2.50");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in céntimos (1/100 of a sol).
///
/// ## Design Decisions
/// - **i64 (signed)**: arithmetic never needs a sign check, prices are
///   validated non-negative when the menu is loaded
/// - **Single field tuple struct**: Zero-cost abstraction over i64
///
/// ## Where Money is Used
/// ```text
/// CatalogItem.price ──► CartLine line total ──► Cart.subtotal
///                                                    │
///                         DELIVERY_FEE (if any) ─────┤
///                                                    ▼
///                                              Cart.total ──► order summary
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from céntimos.
    ///
    /// ## Example
    /// ```rust
    /// use combinado_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // S/ 10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from whole soles.
    #[inline]
    pub const fn from_soles(soles: i64) -> Self {
        Money(soles * 100)
    }

    /// Returns the value in céntimos.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the whole soles portion (truncated towards zero).
    #[inline]
    pub const fn soles(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the céntimos portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies money by a quantity, saturating at the `i64` bounds.
    ///
    /// ## Example
    /// ```rust
    /// use combinado_core::money::Money;
    ///
    /// let chicha = Money::from_soles(5);
    /// assert_eq!(chicha.multiply_quantity(3), Money::from_soles(15));
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: u32) -> Self {
        Money(self.0.saturating_mul(qty as i64))
    }

    /// Parses an amount as printed by [`Display`](fmt::Display).
    ///
    /// Accepts `16`, `16.5` and `16.50`. Anything else is `None`.
    ///
    /// ## Example
    /// ```rust
    /// use combinado_core::money::Money;
    ///
    /// assert_eq!(Money::parse("21"), Some(Money::from_soles(21)));
    /// assert_eq!(Money::parse("2.5"), Some(Money::from_cents(250)));
    /// assert_eq!(Money::parse("abc"), None);
    /// ```
    pub fn parse(text: &str) -> Option<Money> {
        let text = text.trim();
        let (negative, digits) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text),
        };

        let (whole, frac) = match digits.split_once('.') {
            Some((whole, frac)) => (whole, frac),
            None => (digits, ""),
        };

        if whole.is_empty() || !whole.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }
        if frac.len() > 2 || !frac.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }

        let whole: i64 = whole.parse().ok()?;
        let frac: i64 = match frac.len() {
            0 => 0,
            1 => frac.parse::<i64>().ok()? * 10,
            _ => frac.parse().ok()?,
        };

        let cents = whole.checked_mul(100)?.checked_add(frac)?;
        Some(Money(if negative { -cents } else { cents }))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Shows whole amounts without decimals (`16`) and fractional amounts with
/// two (`16.50`). The currency symbol is added by the caller.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        if self.cents_part() == 0 {
            write!(f, "{}{}", sign, self.soles().abs())
        } else {
            write!(f, "{}{}.{:02}", sign, self.soles().abs(), self.cents_part())
        }
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

/// Multiplication by a cart quantity (saturating).
impl Mul<u32> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: u32) -> Self {
        self.multiply_quantity(qty)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
        assert_eq!(money.soles(), 10);
        assert_eq!(money.cents_part(), 99);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_soles(21).to_string(), "21");
        assert_eq!(Money::from_cents(1650).to_string(), "16.50");
        assert_eq!(Money::from_cents(5).to_string(), "0.05");
        assert_eq!(Money::zero().to_string(), "0");
        assert_eq!(Money::from_cents(-250).to_string(), "-2.50");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_soles(8);
        let b = Money::from_soles(5);

        assert_eq!((a + b).cents(), 1300);
        assert_eq!((a * 2).cents(), 1600);

        let mut c = a;
        c += b;
        assert_eq!(c, Money::from_soles(13));
    }

    #[test]
    fn test_arithmetic_saturates() {
        let huge = Money::from_cents(i64::MAX / 2);

        assert_eq!(huge.multiply_quantity(3), Money::from_cents(i64::MAX));
        assert_eq!(huge + huge + huge, Money::from_cents(i64::MAX));

        let mut acc = Money::from_cents(i64::MAX);
        acc += Money::from_soles(3);
        assert_eq!(acc.cents(), i64::MAX);
    }

    #[test]
    fn test_sum() {
        let total: Money = [Money::from_soles(16), Money::from_soles(5), Money::zero()]
            .into_iter()
            .sum();
        assert_eq!(total, Money::from_soles(21));

        let empty: Money = std::iter::empty().sum();
        assert!(empty.is_zero());
    }

    #[test]
    fn test_parse() {
        assert_eq!(Money::parse("24"), Some(Money::from_soles(24)));
        assert_eq!(Money::parse(" 16.50 "), Some(Money::from_cents(1650)));
        assert_eq!(Money::parse("0.05"), Some(Money::from_cents(5)));
        assert_eq!(Money::parse("-3"), Some(Money::from_cents(-300)));

        assert_eq!(Money::parse(""), None);
        assert_eq!(Money::parse("1.234"), None);
        assert_eq!(Money::parse("S/ 3"), None);
        assert_eq!(Money::parse(".5"), None);
    }

    #[test]
    fn test_parse_accepts_display_output() {
        for cents in [0, 5, 99, 100, 1650, 2400, 123_456] {
            let money = Money::from_cents(cents);
            assert_eq!(Money::parse(&money.to_string()), Some(money));
        }
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_negative());
        assert!(Money::from_cents(-1).is_negative());
    }
}
