//! # Cart
//!
//! The transient, session-scoped list of catalog entries pending sale.
//!
//! ## Snapshot Semantics
//! Adding an item copies its name and price into the line. A catalog price
//! change after the add does not retroactively change the cart.
//!
//! ## No Quantity Field
//! Each line is exactly one unit. Selling three pomades means three lines;
//! checkout decrements stock once per product line.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::money::Money;
use crate::types::{ItemKind, Product, Service};

/// One catalog entry placed into the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Unique per cart instance; used to remove a specific line.
    pub id: String,
    pub kind: ItemKind,
    /// Id of the catalog entry this line was created from.
    pub ref_id: String,
    /// Name at add time (frozen).
    pub name: String,
    /// Price at add time (frozen).
    pub price: Money,
}

/// The in-progress sale.
#[derive(Debug, Clone, Default)]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { items: Vec::new() }
    }

    /// Adds one unit of a service; returns the new line's id.
    pub fn add_service(&mut self, service: &Service) -> String {
        self.push_line(ItemKind::Service, &service.id, &service.name, service.price)
    }

    /// Adds one unit of a product; returns the new line's id.
    pub fn add_product(&mut self, product: &Product) -> String {
        self.push_line(ItemKind::Product, &product.id, &product.name, product.price)
    }

    fn push_line(&mut self, kind: ItemKind, ref_id: &str, name: &str, price: Money) -> String {
        let id = Uuid::new_v4().to_string();
        self.items.push(LineItem {
            id: id.clone(),
            kind,
            ref_id: ref_id.to_string(),
            name: name.to_string(),
            price,
        });
        id
    }

    /// Removes a line by its id. Returns false when no such line exists.
    pub fn remove(&mut self, line_id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|line| line.id != line_id);
        self.items.len() != before
    }

    /// Empties the cart (after a successful checkout).
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// The lines currently in the cart, in add order.
    pub fn lines(&self) -> &[LineItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Sum of line prices before discount and tax.
    pub fn subtotal(&self) -> Money {
        self.items.iter().map(|line| line.price).sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
