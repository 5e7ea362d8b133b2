//! # Application State
//!
//! The single root aggregate: every collection the shop works with plus the
//! shop settings, owned exclusively by the [`Store`](crate::Store).
//!
//! ## Lifecycle
//! Created at process start from the persisted blob (or from
//! [`AppState::seed`] when nothing usable is on disk), then mutated only
//! through the store's transform-based update. Callers get read snapshots;
//! nobody holds a mutable reference into it.
//!
//! ## Merge-on-Load
//! Every field carries a serde default, so a blob missing a top-level
//! collection (an older version, a hand-edited file) deserializes with that
//! collection restored from the seed instead of failing.

use serde::{Deserialize, Serialize};

use balong_core::{
    Appointment, Barber, BarberStatus, Customer, Money, Product, Sale, Service, ShopSettings,
};

/// The whole persisted application state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    #[serde(default = "seed_services")]
    pub services: Vec<Service>,
    #[serde(default = "seed_products")]
    pub products: Vec<Product>,
    #[serde(default = "seed_barbers")]
    pub barbers: Vec<Barber>,
    #[serde(default)]
    pub customers: Vec<Customer>,
    #[serde(default)]
    pub appointments: Vec<Appointment>,
    #[serde(default)]
    pub sales: Vec<Sale>,
    #[serde(default)]
    pub settings: ShopSettings,
}

impl AppState {
    /// The well-known default state: a small seeded catalog and staff
    /// roster, no history. Used on first run and whenever the persisted
    /// blob cannot be read.
    pub fn seed() -> Self {
        AppState {
            services: seed_services(),
            products: seed_products(),
            barbers: seed_barbers(),
            customers: Vec::new(),
            appointments: Vec::new(),
            sales: Vec::new(),
            settings: ShopSettings::default(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        AppState::seed()
    }
}

fn seed_services() -> Vec<Service> {
    vec![
        Service {
            id: "svc1".to_string(),
            name: "Classic Haircut".to_string(),
            price: Money::from_cents(800),
            duration_minutes: 30,
        },
        Service {
            id: "svc2".to_string(),
            name: "Premium Haircut".to_string(),
            price: Money::from_cents(1200),
            duration_minutes: 45,
        },
        Service {
            id: "svc3".to_string(),
            name: "Kids Cut".to_string(),
            price: Money::from_cents(600),
            duration_minutes: 25,
        },
        Service {
            id: "svc4".to_string(),
            name: "Beard Trim".to_string(),
            price: Money::from_cents(500),
            duration_minutes: 20,
        },
    ]
}

fn seed_products() -> Vec<Product> {
    vec![
        Product {
            id: "prd1".to_string(),
            name: "Matte Pomade".to_string(),
            sku: "STY-001".to_string(),
            category: "Styling".to_string(),
            price: Money::from_cents(1000),
            stock: 10,
            supplier: "Groom Co.".to_string(),
        },
        Product {
            id: "prd2".to_string(),
            name: "Beard Oil".to_string(),
            sku: "BRD-001".to_string(),
            category: "Beard Care".to_string(),
            price: Money::from_cents(1200),
            stock: 6,
            supplier: "Groom Co.".to_string(),
        },
        Product {
            id: "prd3".to_string(),
            name: "Shampoo".to_string(),
            sku: "HAIR-001".to_string(),
            category: "Hair Care".to_string(),
            price: Money::from_cents(900),
            stock: 8,
            supplier: "HairLabs".to_string(),
        },
    ]
}

fn seed_barbers() -> Vec<Barber> {
    vec![
        Barber {
            id: "brb1".to_string(),
            name: "Juan Dela Cruz".to_string(),
            username: "juan".to_string(),
            contact: "0917 000 0001".to_string(),
            commission_rate_bps: 4000,
            status: BarberStatus::Active,
        },
        Barber {
            id: "brb2".to_string(),
            name: "Mark Santos".to_string(),
            username: "mark".to_string(),
            contact: "0917 000 0002".to_string(),
            commission_rate_bps: 3500,
            status: BarberStatus::Active,
        },
    ]
}

// =============================================================================
// Unit Tests
// =============================================================================
