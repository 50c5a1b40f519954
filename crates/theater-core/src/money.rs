//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  Summing many performances as floats:                                   │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    Every line amount and every total is an i64 count of cents.          │
//! │    Only the renderer turns 173000 into "$1,730.00".                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use theater_core::money::Money;
//!
//! let base = Money::from_cents(40_000);          // $400.00
//! let surcharge = Money::from_cents(1_000).times(25);
//! assert_eq!((base + surcharge).cents(), 65_000);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents for USD).
///
/// ## Design Decisions
/// - **i64 (signed)**: Matches the signed cents the renderers format
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Serde transparent**: Serializes as a bare integer
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use theater_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // Represents $10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
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

    /// Multiplies money by a head count.
    ///
    /// ## Example
    /// ```rust
    /// use theater_core::money::Money;
    ///
    /// let per_attendee = Money::from_cents(300); // $3.00
    /// assert_eq!(per_attendee.times(35).cents(), 10_500);
    /// ```
    #[inline]
    pub const fn times(&self, count: u32) -> Self {
        Money(self.0 * count as i64)
    }

    /// Splits the absolute value into major and minor units.
    ///
    /// `minor_digits` is the number of minor-unit digits of the currency
    /// (2 for USD / EUR, 0 for JPY). Integer division only.
    ///
    /// ## Example
    /// ```rust
    /// use theater_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(173_000).split_units(2), (1730, 0));
    /// assert_eq!(Money::from_cents(-550).split_units(2), (5, 50));
    /// assert_eq!(Money::from_cents(1234).split_units(0), (1234, 0));
    /// ```
    pub fn split_units(&self, minor_digits: u32) -> (u64, u64) {
        let scale = 10u64.pow(minor_digits);
        let magnitude = self.0.unsigned_abs();
        (magnitude / scale, magnitude % scale)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money as US dollars.
///
/// ## Note
/// This is for debugging and log fields. Statements are formatted by the
/// locale-aware renderer.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.is_negative() { "-" } else { "" };
        let (dollars, cents) = self.split_units(2);
        write!(f, "{}${}.{:02}", sign, dollars, cents)
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
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
        assert_eq!(money.split_units(2), (10, 99));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1099)), "$10.99");
        assert_eq!(format!("{}", Money::from_cents(500)), "$5.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-$5.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "$0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!(a.times(7).cents(), 7000);

        let mut total = Money::zero();
        total += a;
        total += b;
        assert_eq!(total.cents(), 1500);
    }

    #[test]
    fn test_sum() {
        let amounts = [65_000, 58_000, 50_000].map(Money::from_cents);
        let total: Money = amounts.into_iter().sum();
        assert_eq!(total.cents(), 173_000);
    }

    #[test]
    fn test_zero_and_sign() {
        assert!(Money::zero().is_zero());
        assert!(Money::default().is_zero());
        assert!(Money::from_cents(-1).is_negative());
        assert!(!Money::from_cents(250).is_negative());
    }

    #[test]
    fn test_split_units_other_scales() {
        assert_eq!(Money::from_cents(7).split_units(2), (0, 7));
        assert_eq!(Money::from_cents(12_345).split_units(3), (12, 345));
        assert_eq!(Money::from_cents(500).split_units(0), (500, 0));
    }

    #[test]
    fn test_serializes_as_integer() {
        let json = serde_json::to_string(&Money::from_cents(65_000)).unwrap();
        assert_eq!(json, "65000");
    }

    /// Accumulating many small line amounts must be exact.
    #[test]
    fn test_no_drift_over_many_additions() {
        let total: Money = std::iter::repeat(Money::from_cents(10))
            .take(10_000)
            .sum();
        assert_eq!(total.cents(), 100_000);
    }
}
