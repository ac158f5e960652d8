//! # Money Module
//!
//! Provides the `Money` type for prices, line totals and cart totals.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Catalog prices are whole Colombian pesos (COP has no minor unit in    │
//! │  everyday retail): 78000, 92000, ...                                    │
//! │                                                                         │
//! │  Keeping them as integers means:                                        │
//! │    78000 × 2 = 156000, exactly, every time                              │
//! │    totals never drift between renders                                   │
//! │                                                                         │
//! │  Formatting ("$ 156.000") belongs to the page script, not here.         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use bloom_core::money::Money;
//!
//! let price = Money::from_units(78000);
//! let line_total = price.multiply_quantity(2);
//! assert_eq!(line_total.units(), 156000);
//! ```

use serde::{Deserialize, Serialize};
use std::iter::Sum;
use std::ops::{Add, AddAssign};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary amount in whole currency units.
///
/// Serializes as a bare integer so the page script receives plain numbers.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize, TS,
)]
#[serde(transparent)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from whole currency units.
    #[inline]
    pub const fn from_units(units: i64) -> Self {
        Money(units)
    }

    /// Returns the amount in whole currency units.
    #[inline]
    pub const fn units(&self) -> i64 {
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

    /// Multiplies a unit price by a held quantity, saturating at the `i64`
    /// bounds.
    ///
    /// ## Example
    /// ```rust
    /// use bloom_core::money::Money;
    ///
    /// let unit_price = Money::from_units(45000);
    /// assert_eq!(unit_price.multiply_quantity(3).units(), 135000);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: u32) -> Self {
        Money(self.0.saturating_mul(qty as i64))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

// Addition saturates; a cart total never wraps or panics.
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
        *self = *self + other;
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
