//! # Domain Types
//!
//! Core domain types for Balong POS: the catalog (services, products), the
//! people (barbers, customers), appointments, shop settings, and the
//! immutable sale record a checkout produces.
//!
//! ## Identity
//! Every entity carries a string `id` (UUID v4 for new records, seeded ids
//! like `svc1` for the default catalog). Ids are unique within their
//! collection and immutable once created.
//!
//! ## Snapshot Pattern
//! `SaleLine` denormalizes name and price at sale time. Catalog edits after
//! a checkout must never change what a recorded sale says was sold.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::money::Money;

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate in basis points (bps).
///
/// 1 basis point = 0.01%, so 1200 bps = 12% (the shop default).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxRate(u32);

impl TaxRate {
    /// Creates a tax rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TaxRate(bps)
    }

    /// Creates a tax rate from a percentage.
    pub fn from_percentage(pct: f64) -> Self {
        TaxRate((pct * 100.0).round() as u32)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Zero tax rate.
    #[inline]
    pub const fn zero() -> Self {
        TaxRate(0)
    }
}

impl Default for TaxRate {
    fn default() -> Self {
        TaxRate::zero()
    }
}

// =============================================================================
// Catalog: Services & Products
// =============================================================================

/// A service on the menu (haircut, beard trim, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: String,
    pub name: String,
    pub price: Money,
    /// Expected chair time in minutes.
    pub duration_minutes: u32,
}

/// A retail product with tracked stock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    /// Stock Keeping Unit - business identifier shown in inventory.
    pub sku: String,
    pub category: String,
    pub price: Money,
    /// Units on hand. Never goes below zero; selling at zero records the
    /// sale and leaves stock at zero.
    pub stock: u32,
    pub supplier: String,
}

impl Product {
    /// Stock level at or below which the dashboard flags the product.
    pub const LOW_STOCK_THRESHOLD: u32 = 5;

    /// Whether this product should appear in low-stock alerts.
    pub fn is_low_stock(&self) -> bool {
        self.stock <= Self::LOW_STOCK_THRESHOLD
    }
}

// =============================================================================
// People: Barbers & Customers
// =============================================================================

/// Whether a barber currently takes customers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BarberStatus {
    #[default]
    Active,
    Inactive,
}

/// A staff member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Barber {
    pub id: String,
    pub name: String,
    pub username: String,
    pub contact: String,
    /// Commission share in basis points (4000 = 40%).
    pub commission_rate_bps: u32,
    pub status: BarberStatus,
}

/// A customer record kept for the regulars.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub notes: String,
}

// =============================================================================
// Appointments
// =============================================================================

/// Appointment lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AppointmentStatus {
    #[default]
    Booked,
    Completed,
    Cancelled,
}

/// A booked slot on the calendar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub customer_name: String,
    pub barber_id: String,
    pub service_id: String,
    pub status: AppointmentStatus,
}

// =============================================================================
// Sale Building Blocks
// =============================================================================

/// What kind of catalog entry a cart line points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Service,
    Product,
}

/// How the customer paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentType {
    #[default]
    Cash,
    Gcash,
    Other,
}

impl PaymentType {
    /// Human-facing label used in reports and the receipt.
    pub fn label(&self) -> &'static str {
        match self {
            PaymentType::Cash => "Cash",
            PaymentType::Gcash => "GCash",
            PaymentType::Other => "Card/Other",
        }
    }
}

/// A price reduction applied before tax.
///
/// `Percent` is stored in basis points so a negative percentage is
/// unrepresentable; an `Amount` below zero is clamped away by the pricing
/// engine. Either way the resulting discount never exceeds the subtotal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum Discount {
    #[default]
    None,
    /// Percentage of the subtotal, in basis points (5000 = 50%).
    Percent(u32),
    /// Flat amount off the subtotal.
    Amount(Money),
}

/// A purchased line frozen into a sale record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleLine {
    pub kind: ItemKind,
    /// Id of the catalog entry this line was created from.
    pub ref_id: String,
    /// Name at sale time (frozen).
    pub name: String,
    /// Price at sale time (frozen).
    pub price: Money,
}

/// An immutable, completed sale.
///
/// ## Invariants (established by the checkout transaction)
/// - `total == taxable + tax`
/// - `taxable == max(subtotal - discount_amount, 0)`
/// - `discount_amount == clamp(computed discount, 0, subtotal)`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sale {
    pub id: String,
    /// Human-facing ticket identifier printed on the receipt, e.g. `T04821`.
    /// Drawn from a bounded range; not guaranteed globally unique.
    pub ticket_number: String,
    pub created_at: DateTime<Utc>,
    /// Date-only key used by report range filters.
    pub date_key: NaiveDate,
    pub customer_name: String,
    /// `None` when no barber existed to assign.
    pub barber_id: Option<String>,
    /// Barber name at sale time (frozen), or "Unassigned".
    pub barber_name: String,
    pub payment_type: PaymentType,
    pub lines: Vec<SaleLine>,
    pub subtotal: Money,
    pub discount: Discount,
    pub discount_amount: Money,
    pub taxable: Money,
    pub tax: Money,
    pub total: Money,
}

// =============================================================================
// Shop Settings
// =============================================================================

/// Shop identity and checkout configuration.
///
/// Every field has a serde default so a partially-persisted settings object
/// fills in its missing siblings instead of dropping them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShopSettings {
    #[serde(default = "default_shop_name")]
    pub shop_name: String,
    #[serde(default = "default_shop_address")]
    pub shop_address: String,
    #[serde(default = "default_shop_phone")]
    pub shop_phone: String,
    /// Checkout tax rate in basis points (1200 = 12%).
    #[serde(default = "default_tax_rate_bps")]
    pub tax_rate_bps: u32,
    #[serde(default)]
    pub dark_mode: bool,
    #[serde(default = "default_receipt_header")]
    pub receipt_header: String,
    #[serde(default = "default_receipt_footer")]
    pub receipt_footer: String,
}

impl ShopSettings {
    /// Returns the configured tax rate.
    pub fn tax_rate(&self) -> TaxRate {
        TaxRate::from_bps(self.tax_rate_bps)
    }
}

impl Default for ShopSettings {
    fn default() -> Self {
        ShopSettings {
            shop_name: default_shop_name(),
            shop_address: default_shop_address(),
            shop_phone: default_shop_phone(),
            tax_rate_bps: default_tax_rate_bps(),
            dark_mode: false,
            receipt_header: default_receipt_header(),
            receipt_footer: default_receipt_footer(),
        }
    }
}

fn default_shop_name() -> String {
    "BALONG Barbershop".to_string()
}

fn default_shop_address() -> String {
    "123 Main St, City".to_string()
}

fn default_shop_phone() -> String {
    "+63 900 000 0000".to_string()
}

fn default_tax_rate_bps() -> u32 {
    1200
}

fn default_receipt_header() -> String {
    "BALONG BARBERSHOP".to_string()
}

fn default_receipt_footer() -> String {
    "Thank you for visiting BALONG!".to_string()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tax_rate_conversions() {
        let rate = TaxRate::from_bps(1200);
        assert_eq!(rate.bps(), 1200);
        assert!((rate.percentage() - 12.0).abs() < 0.001);

        assert_eq!(TaxRate::from_percentage(8.25).bps(), 825);
    }

    #[test]
    fn test_discount_serde_shape() {
        let json = serde_json::to_string(&Discount::Percent(5000)).unwrap();
        assert_eq!(json, r#"{"kind":"percent","value":5000}"#);

        let none: Discount = serde_json::from_str(r#"{"kind":"none"}"#).unwrap();
        assert_eq!(none, Discount::None);
    }

    #[test]
    fn test_payment_type_labels() {
        assert_eq!(PaymentType::Cash.label(), "Cash");
        assert_eq!(PaymentType::Gcash.label(), "GCash");
        assert_eq!(PaymentType::Other.label(), "Card/Other");
    }

    #[test]
    fn test_settings_deep_merge_on_partial_blob() {
        // A blob that only overrides the name keeps every default sibling.
        let settings: ShopSettings =
            serde_json::from_str(r#"{"shopName":"Cut Above"}"#).unwrap();
        assert_eq!(settings.shop_name, "Cut Above");
        assert_eq!(settings.tax_rate_bps, 1200);
        assert_eq!(settings.receipt_footer, "Thank you for visiting BALONG!");
    }

    #[test]
    fn test_low_stock_flag() {
        let mut product = Product {
            id: "prd1".to_string(),
            name: "Matte Pomade".to_string(),
            sku: "STY-001".to_string(),
            category: "Styling".to_string(),
            price: Money::from_cents(1000),
            stock: 10,
            supplier: "Groom Co.".to_string(),
        };
        assert!(!product.is_low_stock());

        product.stock = 5;
        assert!(product.is_low_stock());
    }
}
