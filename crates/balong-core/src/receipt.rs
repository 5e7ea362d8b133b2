//! # Receipt Formatter
//!
//! Renders a sale as a fixed 32-character-wide monospaced receipt, the shape
//! a small thermal printer expects:
//!
//! ```text
//!        BALONG BARBERSHOP
//!        123 Main St, City
//!         +63 900 000 0000
//! --------------------------------
//! Ticket: T04821
//! Date: 2026-03-14 10:30
//! Customer: Walk-in
//! Barber: Juan Dela Cruz
//! --------------------------------
//! ITEM                 AMT
//! Classic Haircut          ₱8.00
//! --------------------------------
//! Subtotal:             ₱8.00
//! Tax:                  ₱0.96
//! Total:                ₱8.96
//! --------------------------------
//!   Thank you for visiting BALONG!
//! ```
//!
//! Pure string formatting; the only branching is on optional fields
//! (address, phone, discount, footer). Deterministic, so the tests are
//! golden-output comparisons.

use crate::types::{Sale, ShopSettings};

/// Receipt paper width in characters.
pub const RECEIPT_WIDTH: usize = 32;

/// Item names are cut to this many characters on the itemized lines.
const ITEM_NAME_WIDTH: usize = 16;

/// Formats a sale as receipt text. Lines are joined with `\n`, no trailing
/// newline.
pub fn format_receipt(sale: &Sale, settings: &ShopSettings) -> String {
    let mut lines: Vec<String> = Vec::new();

    let header = if settings.receipt_header.is_empty() {
        &settings.shop_name
    } else {
        &settings.receipt_header
    };
    lines.push(center(&header.to_uppercase()));
    if !settings.shop_address.is_empty() {
        lines.push(center(&settings.shop_address));
    }
    if !settings.shop_phone.is_empty() {
        lines.push(center(&settings.shop_phone));
    }

    lines.push(rule());
    lines.push(format!("Ticket: {}", sale.ticket_number));
    lines.push(format!("Date: {}", sale.created_at.format("%Y-%m-%d %H:%M")));
    lines.push(format!("Customer: {}", sale.customer_name));
    lines.push(format!("Barber: {}", sale.barber_name));
    lines.push(rule());

    lines.push("ITEM                 AMT".to_string());
    for line in &sale.lines {
        let name: String = line.name.chars().take(ITEM_NAME_WIDTH).collect();
        lines.push(format!("{:<20}{:>10}", name, line.price.to_string()));
    }

    lines.push(rule());
    lines.push(format!("Subtotal:         {:>10}", sale.subtotal.to_string()));
    if !sale.discount_amount.is_zero() {
        lines.push(format!(
            "Discount:        -{:>9}",
            sale.discount_amount.to_string()
        ));
    }
    lines.push(format!("Tax:              {:>10}", sale.tax.to_string()));
    lines.push(format!("Total:            {:>10}", sale.total.to_string()));
    lines.push(rule());

    if !settings.receipt_footer.is_empty() {
        lines.push(center(&settings.receipt_footer));
    }

    lines.join("\n")
}

/// Left-pads a line so it sits centered on the paper.
fn center(text: &str) -> String {
    let len = text.chars().count();
    let pad = RECEIPT_WIDTH.saturating_sub(len) / 2;
    format!("{}{}", " ".repeat(pad), text)
}

fn rule() -> String {
    "-".repeat(RECEIPT_WIDTH)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;
    use crate::types::{Discount, ItemKind, PaymentType, SaleLine};
    use chrono::{TimeZone, Utc};

    fn sale_line(kind: ItemKind, name: &str, cents: i64) -> SaleLine {
        SaleLine {
            kind,
            ref_id: "ref".to_string(),
            name: name.to_string(),
            price: Money::from_cents(cents),
        }
    }

    fn fixture_sale() -> Sale {
        let created_at = Utc.with_ymd_and_hms(2026, 3, 14, 10, 30, 0).unwrap();
        Sale {
            id: "sale-1".to_string(),
            ticket_number: "T04821".to_string(),
            created_at,
            date_key: created_at.date_naive(),
            customer_name: "Walk-in".to_string(),
            barber_id: Some("brb1".to_string()),
            barber_name: "Juan Dela Cruz".to_string(),
            payment_type: PaymentType::Cash,
            lines: vec![
                sale_line(ItemKind::Service, "Classic Haircut", 800),
                sale_line(ItemKind::Product, "Matte Pomade", 1000),
            ],
            subtotal: Money::from_cents(1800),
            discount: Discount::None,
            discount_amount: Money::zero(),
            taxable: Money::from_cents(1800),
            tax: Money::from_cents(216),
            total: Money::from_cents(2016),
        }
    }

    #[test]
    fn test_golden_receipt_without_discount() {
        let text = format_receipt(&fixture_sale(), &ShopSettings::default());

        let expected = "       BALONG BARBERSHOP
       123 Main St, City
        +63 900 000 0000
--------------------------------
Ticket: T04821
Date: 2026-03-14 10:30
Customer: Walk-in
Barber: Juan Dela Cruz
--------------------------------
ITEM                 AMT
Classic Haircut          ₱8.00
Matte Pomade            ₱10.00
--------------------------------
Subtotal:             ₱18.00
Tax:                   ₱2.16
Total:                ₱20.16
--------------------------------
 Thank you for visiting BALONG!";

        assert_eq!(text, expected);
    }

    #[test]
    fn test_golden_receipt_with_discount_line() {
        let mut sale = fixture_sale();
        sale.discount = Discount::Percent(5000);
        sale.discount_amount = Money::from_cents(900);
        sale.taxable = Money::from_cents(900);
        sale.tax = Money::from_cents(108);
        sale.total = Money::from_cents(1008);

        let text = format_receipt(&sale, &ShopSettings::default());
        assert!(text.contains("Discount:        -    ₱9.00"));
        assert!(text.contains("Total:                ₱10.08"));
    }

    #[test]
    fn test_long_item_names_are_truncated_to_sixteen_chars() {
        let mut sale = fixture_sale();
        sale.lines = vec![sale_line(
            ItemKind::Product,
            "Extra Strength Volumizing Shampoo",
            900,
        )];

        let text = format_receipt(&sale, &ShopSettings::default());
        assert!(text.contains("Extra Strength V"));
        assert!(!text.contains("Extra Strength Vo"));
    }

    #[test]
    fn test_header_falls_back_to_shop_name() {
        let settings = ShopSettings {
            receipt_header: String::new(),
            shop_name: "Cut Above".to_string(),
            shop_address: String::new(),
            shop_phone: String::new(),
            receipt_footer: String::new(),
            ..ShopSettings::default()
        };

        let text = format_receipt(&fixture_sale(), &settings);
        let first_line = text.lines().next().unwrap();
        assert_eq!(first_line.trim(), "CUT ABOVE");
        // No address/phone/footer lines when those fields are empty.
        assert!(!text.contains("+63"));
    }

    #[test]
    fn test_every_line_fits_the_paper() {
        let text = format_receipt(&fixture_sale(), &ShopSettings::default());
        for line in text.lines() {
            assert!(
                line.chars().count() <= RECEIPT_WIDTH,
                "line overflows paper: {line:?}"
            );
        }
    }
}
