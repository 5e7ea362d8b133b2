//! # Sales Reports
//!
//! Read-only queries over recorded sales. These are pure functions of
//! [`AppState`] so the reporting screen can be tested without a session.

use balong_core::{Money, PaymentType, Sale};
use balong_store::AppState;
use chrono::NaiveDate;

// ============================================================================
// Filter
// ============================================================================

/// Inclusive date window plus an optional payment-type restriction.
/// `None` bounds are open ended.
#[derive(Debug, Clone, Copy, Default)]
pub struct SalesFilter {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub payment: Option<PaymentType>,
}

impl SalesFilter {
    fn matches(&self, sale: &Sale) -> bool {
        if let Some(from) = self.from {
            if sale.date_key < from {
                return false;
            }
        }
        if let Some(to) = self.to {
            if sale.date_key > to {
                return false;
            }
        }
        if let Some(payment) = self.payment {
            if sale.payment_type != payment {
                return false;
            }
        }
        true
    }
}

/// Matching sales, newest first.
pub fn filter_sales<'a>(state: &'a AppState, filter: &SalesFilter) -> Vec<&'a Sale> {
    let mut matched: Vec<&Sale> = state
        .sales
        .iter()
        .filter(|sale| filter.matches(sale))
        .collect();
    matched.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    matched
}

// ============================================================================
// Summary
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SalesSummary {
    pub tickets: usize,
    pub revenue: Money,
    /// Revenue divided by ticket count, zero for an empty report.
    pub average_ticket: Money,
}

pub fn summarize(sales: &[&Sale]) -> SalesSummary {
    let tickets = sales.len();
    let revenue: Money = sales.iter().map(|sale| sale.total).sum();
    let average_ticket = if tickets == 0 {
        Money::zero()
    } else {
        Money::from_cents(revenue.cents() / tickets as i64)
    };
    SalesSummary {
        tickets,
        revenue,
        average_ticket,
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use balong_core::Discount;
    use chrono::{Duration, TimeZone, Utc};

    fn sale(day: NaiveDate, offset_secs: i64, total_cents: i64, payment: PaymentType) -> Sale {
        let created_at = Utc
            .from_utc_datetime(&day.and_hms_opt(10, 0, 0).unwrap())
            + Duration::seconds(offset_secs);
        Sale {
            id: format!("sale-{day}-{offset_secs}"),
            ticket_number: "T00001".to_string(),
            created_at,
            date_key: day,
            customer_name: "Walk-in".to_string(),
            barber_id: None,
            barber_name: "Unassigned".to_string(),
            payment_type: payment,
            lines: Vec::new(),
            subtotal: Money::from_cents(total_cents),
            discount: Discount::None,
            discount_amount: Money::zero(),
            taxable: Money::from_cents(total_cents),
            tax: Money::zero(),
            total: Money::from_cents(total_cents),
        }
    }

    fn state_with(sales: Vec<Sale>) -> AppState {
        let mut state = AppState::seed();
        state.sales = sales;
        state
    }

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, d).unwrap()
    }

    #[test]
    fn test_date_window_is_inclusive() {
        let state = state_with(vec![
            sale(day(1), 0, 100, PaymentType::Cash),
            sale(day(2), 0, 200, PaymentType::Cash),
            sale(day(3), 0, 300, PaymentType::Cash),
        ]);
        let filter = SalesFilter {
            from: Some(day(2)),
            to: Some(day(3)),
            ..Default::default()
        };

        let matched = filter_sales(&state, &filter);
        assert_eq!(matched.len(), 2);
        assert!(matched.iter().all(|s| s.date_key >= day(2)));
    }

    #[test]
    fn test_payment_filter_and_newest_first() {
        let state = state_with(vec![
            sale(day(1), 0, 100, PaymentType::Cash),
            sale(day(1), 60, 200, PaymentType::Gcash),
            sale(day(1), 120, 300, PaymentType::Cash),
        ]);
        let filter = SalesFilter {
            payment: Some(PaymentType::Cash),
            ..Default::default()
        };

        let matched = filter_sales(&state, &filter);
        assert_eq!(matched.len(), 2);
        assert_eq!(matched[0].total, Money::from_cents(300));
        assert_eq!(matched[1].total, Money::from_cents(100));
    }

    #[test]
    fn test_summary_math() {
        let state = state_with(vec![
            sale(day(1), 0, 500, PaymentType::Cash),
            sale(day(1), 60, 700, PaymentType::Cash),
        ]);
        let matched = filter_sales(&state, &SalesFilter::default());

        let summary = summarize(&matched);
        assert_eq!(summary.tickets, 2);
        assert_eq!(summary.revenue, Money::from_cents(1200));
        assert_eq!(summary.average_ticket, Money::from_cents(600));
    }

    #[test]
    fn test_empty_summary_is_all_zero() {
        let summary = summarize(&[]);
        assert_eq!(summary.tickets, 0);
        assert_eq!(summary.revenue, Money::zero());
        assert_eq!(summary.average_ticket, Money::zero());
    }
}
