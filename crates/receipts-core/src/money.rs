//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  As a float:                                                            │
//! │    0.30 % 0.10  = 0.09999999999999998 ❌ "not a multiple"!              │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    "35.35" → 3535 cents                                                 │
//! │    3535 % 25 == 10 → exact answer, every time                           │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use receipts_core::money::Money;
//!
//! // Parse the wire format (always two decimals)
//! let total = Money::parse("35.35").unwrap();
//! assert_eq!(total.cents(), 3535);
//!
//! // Exact divisibility checks
//! assert!(Money::parse("9.00").unwrap().is_multiple_of(25));
//!
//! // NEVER do this:
//! // let bad = Money::from_float(35.35); // NO SUCH METHOD EXISTS!
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{CoreError, CoreResult};

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents for USD).
///
/// Receipt amounts are never negative: `parse` only accepts unsigned digits.
/// The inner value stays `i64` so sums and comparisons use plain integer
/// arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use receipts_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // Represents $10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Parses a receipt amount of the form `<digits>.<two digits>`.
    ///
    /// ## Accepted
    /// `"0.00"`, `"9.00"`, `"1234.56"`
    ///
    /// ## Rejected
    /// `"9"`, `"9.0"`, `"9.000"`, `"-1.00"`, `".50"`, `"1,000.00"`, `" 1.00"`
    ///
    /// ## Example
    /// ```rust
    /// use receipts_core::money::Money;
    ///
    /// assert_eq!(Money::parse("12.25").unwrap().cents(), 1225);
    /// assert!(Money::parse("12.5").is_err());
    /// ```
    pub fn parse(input: &str) -> CoreResult<Money> {
        let (major, minor) = input
            .split_once('.')
            .ok_or_else(|| CoreError::InvalidAmount(input.to_string()))?;

        let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
        if !all_digits(major) || !all_digits(minor) || minor.len() != 2 {
            return Err(CoreError::InvalidAmount(input.to_string()));
        }

        let out_of_range = || CoreError::AmountOutOfRange(input.to_string());
        let major: i64 = major.parse().map_err(|_| out_of_range())?;
        let minor: i64 = minor.parse().map_err(|_| out_of_range())?;

        major
            .checked_mul(100)
            .and_then(|cents| cents.checked_add(minor))
            .map(Money)
            .ok_or_else(out_of_range)
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion (always 0-99).
    ///
    /// ## Example
    /// ```rust
    /// use receipts_core::money::Money;
    ///
    /// let price = Money::from_cents(1099);
    /// assert_eq!(price.cents_part(), 99);
    /// ```
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Adds two amounts, returning `None` if the sum leaves the i64 range.
    #[inline]
    pub const fn checked_add(self, other: Money) -> Option<Money> {
        match self.0.checked_add(other.0) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }

    /// True when the amount has no cents (`9.00`, `0.00`).
    #[inline]
    pub const fn is_whole_dollars(&self) -> bool {
        self.0 % 100 == 0
    }

    /// True when the amount is an exact multiple of `step_cents`.
    ///
    /// ## Example
    /// ```rust
    /// use receipts_core::money::Money;
    ///
    /// assert!(Money::from_cents(975).is_multiple_of(25));   // $9.75
    /// assert!(!Money::from_cents(3535).is_multiple_of(25)); // $35.35
    /// ```
    #[inline]
    pub const fn is_multiple_of(&self, step_cents: i64) -> bool {
        step_cents != 0 && self.0 % step_cents == 0
    }

    /// Takes `rate_bps` basis points of the amount and rounds the result UP to
    /// whole dollars.
    ///
    /// ## Implementation
    /// Integer math only: `ceil(cents * bps / (100 * 10000))`.
    /// Any positive fractional remainder moves to the next dollar; exact
    /// results stay unchanged.
    ///
    /// ## Example
    /// ```rust
    /// use receipts_core::money::Money;
    ///
    /// // 20% of $12.25 = $2.45 → 3
    /// assert_eq!(Money::from_cents(1225).percentage_ceil_dollars(2000), 3);
    /// // 20% of $12.00 = $2.40 → 3
    /// assert_eq!(Money::from_cents(1200).percentage_ceil_dollars(2000), 3);
    /// // 20% of $10.00 = $2.00 → 2
    /// assert_eq!(Money::from_cents(1000).percentage_ceil_dollars(2000), 2);
    /// ```
    pub fn percentage_ceil_dollars(&self, rate_bps: u32) -> u64 {
        // i128 keeps cents * bps from overflowing for any i64 amount
        const DIVISOR: i128 = 100 * 10_000;
        let scaled = self.0.max(0) as i128 * rate_bps as i128;
        ((scaled + DIVISOR - 1) / DIVISOR) as u64
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Renders in the receipt wire format (`"35.35"`).
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}{}.{:02}", sign, self.dollars().abs(), self.cents_part())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_amounts() {
        assert_eq!(Money::parse("0.00").unwrap().cents(), 0);
        assert_eq!(Money::parse("9.00").unwrap().cents(), 900);
        assert_eq!(Money::parse("35.35").unwrap().cents(), 3535);
        assert_eq!(Money::parse("007.05").unwrap().cents(), 705);
    }

    #[test]
    fn test_parse_rejects_bad_shapes() {
        for bad in [
            "", "9", "9.", ".50", "9.0", "9.000", "-1.00", "+1.00", "1,000.00", " 1.00", "1.0a",
            "1.2.3",
        ] {
            assert!(
                matches!(Money::parse(bad), Err(CoreError::InvalidAmount(_))),
                "expected {bad:?} to be rejected"
            );
        }
    }

    #[test]
    fn test_parse_rejects_overflow() {
        let huge = format!("{}.00", "9".repeat(30));
        assert!(matches!(
            Money::parse(&huge),
            Err(CoreError::AmountOutOfRange(_))
        ));
    }

    #[test]
    fn test_display_round_trips_wire_format() {
        assert_eq!(Money::parse("35.35").unwrap().to_string(), "35.35");
        assert_eq!(Money::from_cents(500).to_string(), "5.00");
        assert_eq!(Money::from_cents(0).to_string(), "0.00");
    }

    #[test]
    fn test_whole_dollars_and_quarters() {
        assert!(Money::from_cents(900).is_whole_dollars());
        assert!(!Money::from_cents(901).is_whole_dollars());

        for cents in [0, 25, 50, 75, 100, 1025] {
            assert!(Money::from_cents(cents).is_multiple_of(25), "{cents}");
        }
        for cents in [1, 24, 26, 3535] {
            assert!(!Money::from_cents(cents).is_multiple_of(25), "{cents}");
        }
        assert!(!Money::from_cents(100).is_multiple_of(0));
    }

    #[test]
    fn test_percentage_ceil_dollars() {
        assert_eq!(Money::from_cents(1225).percentage_ceil_dollars(2000), 3);
        assert_eq!(Money::from_cents(1200).percentage_ceil_dollars(2000), 3);
        assert_eq!(Money::from_cents(1000).percentage_ceil_dollars(2000), 2);
        assert_eq!(Money::from_cents(1).percentage_ceil_dollars(2000), 1);
        assert_eq!(Money::from_cents(0).percentage_ceil_dollars(2000), 0);
    }

    #[test]
    fn test_checked_add() {
        let sum = Money::from_cents(225).checked_add(Money::from_cents(650));
        assert_eq!(sum, Some(Money::from_cents(875)));
        assert_eq!(Money::from_cents(i64::MAX).checked_add(Money::from_cents(1)), None);
    }
}
