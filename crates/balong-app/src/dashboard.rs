//! # Dashboard Queries
//!
//! The numbers on the landing screen: today's trade, the 7-day revenue
//! strip, payment mix, leaderboards and the low-stock shelf. All pure reads
//! over [`AppState`].

use balong_core::{ItemKind, Money, PaymentType, Product, Sale};
use balong_store::AppState;
use chrono::{Duration, NaiveDate};

/// Flat commission applied to every sale on the dashboard.
// TODO: weight by each barber's commission_rate_bps once payroll reporting lands.
pub const DEFAULT_COMMISSION_BPS: u32 = 4000;

// ============================================================================
// Headline Stats
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardStats {
    pub today_tickets: usize,
    pub today_revenue: Money,
    pub total_tickets: usize,
    pub total_revenue: Money,
    /// All-time revenue divided by ticket count, zero with no history.
    pub average_ticket: Money,
    /// Flat-rate commission owed on all recorded revenue.
    pub commissions_total: Money,
    /// All-time revenue after commissions.
    pub commissions_net: Money,
    pub low_stock_count: usize,
}

pub fn dashboard_stats(state: &AppState, today: NaiveDate) -> DashboardStats {
    let todays: Vec<&Sale> = sales_on(state, today);
    let today_revenue: Money = todays.iter().map(|sale| sale.total).sum();

    let total_tickets = state.sales.len();
    let total_revenue: Money = state.sales.iter().map(|sale| sale.total).sum();
    let average_ticket = if total_tickets == 0 {
        Money::zero()
    } else {
        Money::from_cents(total_revenue.cents() / total_tickets as i64)
    };
    let commissions_total = total_revenue.percent_of(DEFAULT_COMMISSION_BPS);

    DashboardStats {
        today_tickets: todays.len(),
        today_revenue,
        total_tickets,
        total_revenue,
        average_ticket,
        commissions_total,
        commissions_net: total_revenue - commissions_total,
        low_stock_count: low_stock(state).len(),
    }
}

fn sales_on(state: &AppState, day: NaiveDate) -> Vec<&Sale> {
    state.sales.iter().filter(|s| s.date_key == day).collect()
}

// ============================================================================
// Trends and Leaderboards
// ============================================================================

/// Revenue per day for the week ending today, oldest day first. Days with
/// no sales still appear, at zero, so the chart has a fixed width.
pub fn seven_day_revenue(state: &AppState, today: NaiveDate) -> Vec<(NaiveDate, Money)> {
    (0..7)
        .rev()
        .map(|back| {
            let day = today - Duration::days(back);
            let revenue = sales_on(state, day).iter().map(|sale| sale.total).sum();
            (day, revenue)
        })
        .collect()
}

/// Today's revenue split by payment type, in first-seen order.
pub fn revenue_by_payment_today(state: &AppState, today: NaiveDate) -> Vec<(PaymentType, Money)> {
    let mut mix: Vec<(PaymentType, Money)> = Vec::new();
    for sale in sales_on(state, today) {
        match mix.iter_mut().find(|(payment, _)| *payment == sale.payment_type) {
            Some((_, revenue)) => *revenue += sale.total,
            None => mix.push((sale.payment_type, sale.total)),
        }
    }
    mix
}

/// One row per service sold today: name, units, revenue. Biggest earner
/// first.
pub fn top_services_today(state: &AppState, today: NaiveDate) -> Vec<ServiceTally> {
    let mut tally: Vec<ServiceTally> = Vec::new();
    for sale in sales_on(state, today) {
        for line in sale.lines.iter().filter(|l| l.kind == ItemKind::Service) {
            match tally.iter_mut().find(|row| row.name == line.name) {
                Some(row) => {
                    row.quantity += 1;
                    row.revenue += line.price;
                }
                None => tally.push(ServiceTally {
                    name: line.name.clone(),
                    quantity: 1,
                    revenue: line.price,
                }),
            }
        }
    }
    tally.sort_by(|a, b| b.revenue.cmp(&a.revenue));
    tally
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceTally {
    pub name: String,
    pub quantity: u32,
    pub revenue: Money,
}

/// All-time top earner by recorded barber name. Ties keep the earlier name.
pub fn top_barber(state: &AppState) -> Option<(String, Money)> {
    top_by(state, |sale| Some(sale.barber_name.clone()))
}

/// All-time top service line by revenue.
pub fn top_service(state: &AppState) -> Option<(String, Money)> {
    let mut tally: Vec<(String, Money)> = Vec::new();
    for sale in &state.sales {
        for line in sale.lines.iter().filter(|l| l.kind == ItemKind::Service) {
            match tally.iter_mut().find(|(name, _)| *name == line.name) {
                Some((_, revenue)) => *revenue += line.price,
                None => tally.push((line.name.clone(), line.price)),
            }
        }
    }
    best_of(tally)
}

fn top_by(state: &AppState, key: impl Fn(&Sale) -> Option<String>) -> Option<(String, Money)> {
    let mut tally: Vec<(String, Money)> = Vec::new();
    for sale in &state.sales {
        let Some(name) = key(sale) else { continue };
        match tally.iter_mut().find(|(n, _)| *n == name) {
            Some((_, revenue)) => *revenue += sale.total,
            None => tally.push((name, sale.total)),
        }
    }
    best_of(tally)
}

fn best_of(tally: Vec<(String, Money)>) -> Option<(String, Money)> {
    let mut best: Option<(String, Money)> = None;
    for entry in tally {
        match &best {
            Some((_, top)) if entry.1 <= *top => {}
            _ => best = Some(entry),
        }
    }
    best
}

/// Products at or below the reorder threshold.
pub fn low_stock(state: &AppState) -> Vec<&Product> {
    state.products.iter().filter(|p| p.is_low_stock()).collect()
}

// ============================================================================
// Tests
// ============================================================================
