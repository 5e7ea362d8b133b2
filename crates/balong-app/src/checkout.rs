//! # Checkout
//!
//! Turns the current cart into an immutable [`Sale`] record.
//!
//! ## Commit Sequence
//! ```text
//! empty-cart guard ──► resolve barber ──► price cart ──► build Sale
//!        │                                                   │
//!        └─ Err(EmptyCart), nothing touched                  ▼
//!                                   one Store::update transform:
//!                                     append sale + decrement stock
//!                                                            │
//!                                                            ▼
//!                                   publish SalesChanged, InventoryChanged
//!                                                            │
//!                                                            ▼
//!                                                       clear cart
//! ```
//!
//! The append and the stock decrements ride the same transform so a reader
//! never observes a sale whose product lines have not yet left inventory.
//! Durability is best effort: a failed disk write is logged by the store and
//! the in-memory commit stands.

use std::time::{SystemTime, UNIX_EPOCH};

use balong_core::{Barber, Discount, ItemKind, PaymentType, Sale, SaleLine, price_cart};
use balong_store::ChangeEvent;
use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::session::PosSession;

// ============================================================================
// Checkout Context
// ============================================================================

/// Everything checkout needs besides the cart itself.
#[derive(Debug, Clone, Default)]
pub struct CheckoutContext {
    /// Blank names become "Walk-in".
    pub customer_name: String,
    /// Preferred barber. Unknown or absent ids fall back, never fail.
    pub barber_id: Option<String>,
    pub payment_type: PaymentType,
    pub discount: Discount,
}

// ============================================================================
// Checkout Command
// ============================================================================

impl PosSession {
    /// Finalizes the cart into a sale.
    ///
    /// Fails only on an empty cart, in which case no state is mutated and
    /// no events are published. On success the committed [`Sale`] is
    /// returned and the cart is empty.
    pub fn checkout(&mut self, ctx: CheckoutContext) -> AppResult<Sale> {
        if self.cart.is_empty() {
            return Err(AppError::EmptyCart);
        }

        let state = self.store.state();
        let (barber_id, barber_name) = resolve_barber(&state.barbers, ctx.barber_id.as_deref());
        let totals = price_cart(self.cart.lines(), ctx.discount, state.settings.tax_rate());

        let customer_name = match ctx.customer_name.trim() {
            "" => "Walk-in".to_string(),
            trimmed => trimmed.to_string(),
        };

        let lines: Vec<SaleLine> = self
            .cart
            .lines()
            .iter()
            .map(|line| SaleLine {
                kind: line.kind,
                ref_id: line.ref_id.clone(),
                name: line.name.clone(),
                price: line.price,
            })
            .collect();

        let created_at = Utc::now();
        let sale = Sale {
            id: Uuid::new_v4().to_string(),
            ticket_number: generate_ticket_number(),
            created_at,
            date_key: created_at.date_naive(),
            customer_name,
            barber_id,
            barber_name,
            payment_type: ctx.payment_type,
            lines,
            subtotal: totals.subtotal,
            discount: ctx.discount,
            discount_amount: totals.discount_amount,
            taxable: totals.taxable,
            tax: totals.tax,
            total: totals.total,
        };

        let committed = sale.clone();
        self.store.update(move |mut state| {
            // Each product line consumes one unit; stock never goes below zero.
            for line in sale.lines.iter().filter(|l| l.kind == ItemKind::Product) {
                if let Some(product) = state.products.iter_mut().find(|p| p.id == line.ref_id) {
                    product.stock = product.stock.saturating_sub(1);
                }
            }
            state.sales.push(sale);
            state
        });

        self.bus.publish(ChangeEvent::SalesChanged);
        self.bus.publish(ChangeEvent::InventoryChanged);
        self.cart.clear();

        info!(
            ticket = %committed.ticket_number,
            total = %committed.total,
            lines = committed.lines.len(),
            "checkout committed"
        );
        Ok(committed)
    }
}

/// Picks the barber recorded on the sale.
///
/// Order: the requested id if it exists, otherwise the first barber on the
/// roster, otherwise the literal "Unassigned" with no id. Checkout must not
/// fail over staffing data.
fn resolve_barber(barbers: &[Barber], wanted: Option<&str>) -> (Option<String>, String) {
    if let Some(id) = wanted {
        if let Some(barber) = barbers.iter().find(|b| b.id == id) {
            return (Some(barber.id.clone()), barber.name.clone());
        }
    }
    match barbers.first() {
        Some(barber) => (Some(barber.id.clone()), barber.name.clone()),
        None => (None, "Unassigned".to_string()),
    }
}

/// Display ticket number: "T" plus a clock-derived number below 100000.
///
/// Tickets are labels for the printed receipt, not identifiers; `Sale::id`
/// carries the UUID and collisions here are acceptable.
fn generate_ticket_number() -> String {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or(0);
    format!("T{:05}", nanos % 99_999)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use balong_core::Money;
    use balong_store::Store;

    fn session() -> PosSession {
        PosSession::new(Store::in_memory())
    }

    #[test]
    fn test_empty_cart_checkout_fails_without_mutation() {
        let mut session = session();
        let subscription = session.subscribe();
        let sales_before = session.state().sales.len();

        let err = session.checkout(CheckoutContext::default()).unwrap_err();

        assert!(matches!(err, AppError::EmptyCart));
        assert_eq!(session.state().sales.len(), sales_before);
        assert!(subscription.try_recv().is_none());
    }

    #[test]
    fn test_checkout_records_sale_and_clears_cart() {
        let mut session = session();
        session.add_service_to_cart("svc1").unwrap();

        let sale = session
            .checkout(CheckoutContext {
                customer_name: "Ana".to_string(),
                payment_type: PaymentType::Cash,
                ..Default::default()
            })
            .unwrap();

        // Scenario: one 8.00 service at the seeded 12% rate.
        assert_eq!(sale.subtotal, Money::from_cents(800));
        assert_eq!(sale.tax, Money::from_cents(96));
        assert_eq!(sale.total, Money::from_cents(896));
        assert_eq!(sale.customer_name, "Ana");
        assert!(session.cart().is_empty());
        assert_eq!(session.state().sales.len(), 1);
        assert_eq!(session.state().sales[0].id, sale.id);
    }

    #[test]
    fn test_checkout_publishes_sales_then_inventory() {
        let mut session = session();
        let subscription = session.subscribe();
        session.add_product_to_cart("prd1").unwrap();

        session.checkout(CheckoutContext::default()).unwrap();

        assert_eq!(
            subscription.drain(),
            vec![ChangeEvent::SalesChanged, ChangeEvent::InventoryChanged]
        );
    }

    #[test]
    fn test_product_line_decrements_stock_by_one() {
        let mut session = session();
        // Seeded Matte Pomade starts at 10.
        session.add_product_to_cart("prd1").unwrap();
        session.add_product_to_cart("prd1").unwrap();

        session.checkout(CheckoutContext::default()).unwrap();

        let pomade = session
            .state()
            .products
            .iter()
            .find(|p| p.id == "prd1")
            .unwrap();
        assert_eq!(pomade.stock, 8);
    }

    #[test]
    fn test_stock_floors_at_zero_and_sale_still_records() {
        let mut session = session();
        session.store.update(|mut state| {
            state.products[0].stock = 1;
            state
        });
        session.add_product_to_cart("prd1").unwrap();
        session.add_product_to_cart("prd1").unwrap();
        session.add_product_to_cart("prd1").unwrap();

        let sale = session.checkout(CheckoutContext::default()).unwrap();

        assert_eq!(sale.lines.len(), 3);
        assert_eq!(session.state().products[0].stock, 0);
        assert_eq!(session.state().sales.len(), 1);
    }

    #[test]
    fn test_service_lines_leave_stock_alone() {
        let mut session = session();
        let stocks_before: Vec<u32> =
            session.state().products.iter().map(|p| p.stock).collect();
        session.add_service_to_cart("svc2").unwrap();

        session.checkout(CheckoutContext::default()).unwrap();

        let stocks_after: Vec<u32> =
            session.state().products.iter().map(|p| p.stock).collect();
        assert_eq!(stocks_before, stocks_after);
    }

    #[test]
    fn test_percent_discount_scenario() {
        let mut session = session();
        session.store.update(|mut state| {
            state.settings.tax_rate_bps = 0;
            state
        });
        // 12.00 + 10.00 = 22.00, half off.
        session.add_product_to_cart("prd2").unwrap();
        session.add_product_to_cart("prd1").unwrap();

        let sale = session
            .checkout(CheckoutContext {
                discount: Discount::Percent(5000),
                ..Default::default()
            })
            .unwrap();

        assert_eq!(sale.subtotal, Money::from_cents(2200));
        assert_eq!(sale.discount_amount, Money::from_cents(1100));
        assert_eq!(sale.total, Money::from_cents(1100));
    }

    #[test]
    fn test_amount_discount_clamps_to_subtotal() {
        let mut session = session();
        session.store.update(|mut state| {
            state.settings.tax_rate_bps = 0;
            state
        });
        session.add_service_to_cart("svc4").unwrap(); // 5.00

        let sale = session
            .checkout(CheckoutContext {
                discount: Discount::Amount(Money::from_cents(10_000)),
                ..Default::default()
            })
            .unwrap();

        assert_eq!(sale.discount_amount, sale.subtotal);
        assert_eq!(sale.total, Money::zero());
    }

    #[test]
    fn test_unknown_barber_falls_back_to_first() {
        let mut session = session();
        session.add_service_to_cart("svc1").unwrap();

        let sale = session
            .checkout(CheckoutContext {
                barber_id: Some("brb99".to_string()),
                ..Default::default()
            })
            .unwrap();

        assert_eq!(sale.barber_id.as_deref(), Some("brb1"));
        assert_eq!(sale.barber_name, "Juan Dela Cruz");
    }

    #[test]
    fn test_empty_roster_records_unassigned() {
        let mut session = session();
        session.store.update(|mut state| {
            state.barbers.clear();
            state
        });
        session.add_service_to_cart("svc1").unwrap();

        let sale = session.checkout(CheckoutContext::default()).unwrap();

        assert_eq!(sale.barber_id, None);
        assert_eq!(sale.barber_name, "Unassigned");
    }

    #[test]
    fn test_blank_customer_becomes_walk_in() {
        let mut session = session();
        session.add_service_to_cart("svc1").unwrap();

        let sale = session
            .checkout(CheckoutContext {
                customer_name: "   ".to_string(),
                ..Default::default()
            })
            .unwrap();

        assert_eq!(sale.customer_name, "Walk-in");
    }

    #[test]
    fn test_sale_snapshot_ignores_later_catalog_edits() {
        let mut session = session();
        session.add_service_to_cart("svc1").unwrap();
        let sale = session.checkout(CheckoutContext::default()).unwrap();

        session.store.update(|mut state| {
            state.services[0].name = "Deluxe Haircut".to_string();
            state.services[0].price = Money::from_cents(9999);
            state
        });

        let recorded = &session.state().sales[0];
        assert_eq!(recorded.lines[0].name, "Classic Haircut");
        assert_eq!(recorded.lines[0].price, Money::from_cents(800));
        assert_eq!(recorded.total, sale.total);
    }

    #[test]
    fn test_ticket_number_shape() {
        let ticket = generate_ticket_number();
        assert!(ticket.starts_with('T'));
        let digits: u32 = ticket[1..].parse().unwrap();
        assert!(digits < 100_000);
    }
}
