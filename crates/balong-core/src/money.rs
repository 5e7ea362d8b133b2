//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                         │
//! │                                                                     │
//! │  In floating point:  0.1 + 0.2 = 0.30000000000000004                │
//! │                                                                     │
//! │  OUR SOLUTION: integer centavos                                     │
//! │    ₱8.00 is 800. Tax at 12% is (800 * 1200 + 5000) / 10000 = 96.    │
//! │    Exact, every time, no drift across thousands of tickets.         │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All currency math in the workspace is integer centavos. Rounding happens
//! once per derived amount (tax, percent discount) inside this module;
//! display formatting is the only other place cents become "₱D.CC".

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

use crate::types::TaxRate;

/// Currency symbol used for display (Philippine peso).
pub const CURRENCY_SYMBOL: &str = "₱";

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in centavos (the smallest currency unit).
///
/// ## Design Decisions
/// - **i64 (signed)**: intermediate values (subtotal minus discount) may dip
///   below zero before clamping
/// - **Single field tuple struct**: zero-cost abstraction over i64
/// - **Transparent serde**: serializes as a bare integer in the state blob
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from centavos.
    ///
    /// ```rust
    /// use balong_core::money::Money;
    ///
    /// let price = Money::from_cents(800); // ₱8.00
    /// assert_eq!(price.cents(), 800);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in centavos.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the whole-peso portion.
    #[inline]
    pub const fn pesos(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the centavo portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is greater than zero.
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Calculates tax on this amount.
    ///
    /// ## Implementation
    /// Integer math: `(cents * bps + 5000) / 10000`. The `+5000` rounds the
    /// half-centavo case up instead of truncating.
    ///
    /// ```rust
    /// use balong_core::money::Money;
    /// use balong_core::types::TaxRate;
    ///
    /// let price = Money::from_cents(800);   // ₱8.00
    /// let rate = TaxRate::from_bps(1200);   // 12%
    /// assert_eq!(price.tax(rate).cents(), 96); // ₱0.96
    /// ```
    pub fn tax(&self, rate: TaxRate) -> Money {
        // i128 guards against overflow on large amounts
        let tax_cents = (self.0 as i128 * rate.bps() as i128 + 5000) / 10000;
        Money::from_cents(tax_cents as i64)
    }

    /// Returns a percentage of this amount, where the percentage is given in
    /// basis points (5000 = 50%). Used for percent discounts.
    pub fn percent_of(&self, bps: u32) -> Money {
        let part = (self.0 as i128 * bps as i128 + 5000) / 10000;
        Money::from_cents(part as i64)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display as `₱D.CC`. Matches the receipt column format.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}{}{}.{:02}",
            sign,
            CURRENCY_SYMBOL,
            self.pesos().abs(),
            self.cents_part()
        )
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
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by a unit count (quantity pricing).
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

/// Summing an iterator of line prices yields a subtotal.
impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
