//! # Pricing Calculator
//!
//! Pure cart-pricing math: line items + discount + tax rate in, a full
//! breakdown out. No side effects, no clock, no state.
//!
//! ## Order of Operations
//! ```text
//! subtotal         = Σ line.price
//! discount_amount  = percent-of-subtotal | flat amount | 0, clamped to [0, subtotal]
//! taxable          = max(subtotal - discount_amount, 0)
//! tax              = taxable × rate
//! total            = taxable + tax
//! ```
//! Discount applies before tax; tax is computed on the discounted base.

use serde::{Deserialize, Serialize};

use crate::cart::LineItem;
use crate::money::Money;
use crate::types::{Discount, TaxRate};

/// The full pricing breakdown for a cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Totals {
    pub subtotal: Money,
    pub discount_amount: Money,
    pub taxable: Money,
    pub tax: Money,
    pub total: Money,
}

impl Totals {
    /// All-zero breakdown (empty cart).
    pub fn zero() -> Self {
        Totals {
            subtotal: Money::zero(),
            discount_amount: Money::zero(),
            taxable: Money::zero(),
            tax: Money::zero(),
            total: Money::zero(),
        }
    }
}

/// Prices a set of cart lines.
///
/// The discount is clamped to `[0, subtotal]`: it can never push the taxable
/// base below zero, and a flat amount larger than the subtotal simply zeroes
/// the ticket.
pub fn price_cart(lines: &[LineItem], discount: Discount, tax_rate: TaxRate) -> Totals {
    let subtotal: Money = lines.iter().map(|line| line.price).sum();

    let raw_discount = match discount {
        Discount::None => Money::zero(),
        Discount::Percent(bps) => subtotal.percent_of(bps),
        Discount::Amount(amount) => amount,
    };
    let discount_amount = raw_discount.clamp(Money::zero(), subtotal);

    let taxable = (subtotal - discount_amount).max(Money::zero());
    let tax = taxable.tax(tax_rate);
    let total = taxable + tax;

    Totals {
        subtotal,
        discount_amount,
        taxable,
        tax,
        total,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
