//! # POS Session
//!
//! `PosSession` is the composition root of a running terminal: it owns the
//! persistent [`Store`], the in-memory [`Cart`] and the [`ChangeBus`] that
//! fans out change notifications to views.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                       PosSession                         │
//! │                                                          │
//! │  ┌───────────┐   ┌───────────┐   ┌───────────────────┐   │
//! │  │   Store   │   │   Cart    │   │     ChangeBus     │   │
//! │  │ (durable  │   │ (volatile │   │ (SalesChanged,    │   │
//! │  │  state)   │   │  lines)   │   │  InventoryChanged)│   │
//! │  └───────────┘   └───────────┘   └───────────────────┘   │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! Command modules (`checkout`, `catalog`, `roster`, ...) are implemented as
//! `impl PosSession` blocks so each file stays focused on one slice of the
//! domain while sharing the same three components.

use balong_core::validation::{validate_name, validate_tax_rate_bps};
use balong_core::{Cart, Discount, ShopSettings, Totals, price_cart};
use balong_store::{AppState, ChangeBus, Store, StoreError, Subscription};

use crate::error::{AppError, AppResult};

// ============================================================================
// Session
// ============================================================================

pub struct PosSession {
    pub(crate) store: Store,
    pub(crate) cart: Cart,
    pub(crate) bus: ChangeBus,
}

impl PosSession {
    /// Builds a session around an already-opened store.
    pub fn new(store: Store) -> Self {
        Self {
            store,
            cart: Cart::new(),
            bus: ChangeBus::new(),
        }
    }

    /// Current durable state. All reads go through here.
    pub fn state(&self) -> &AppState {
        self.store.state()
    }

    /// Registers a view for change notifications.
    pub fn subscribe(&self) -> Subscription {
        self.bus.subscribe()
    }

    /// The most recent failed disk write, if any, so the shell can show a
    /// durability warning next to otherwise-successful commands.
    pub fn last_write_error(&self) -> Option<&StoreError> {
        self.store.last_write_error()
    }

    // ------------------------------------------------------------------------
    // Cart commands
    // ------------------------------------------------------------------------

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Adds one unit of a catalog service to the cart.
    ///
    /// The returned id identifies the new line for later removal. Name and
    /// price are snapshotted at add time; later catalog edits do not reach
    /// lines already in the cart.
    pub fn add_service_to_cart(&mut self, service_id: &str) -> AppResult<String> {
        let service = self
            .state()
            .services
            .iter()
            .find(|s| s.id == service_id)
            .cloned()
            .ok_or_else(|| AppError::not_found("Service", service_id))?;
        Ok(self.cart.add_service(&service))
    }

    /// Adds one unit of a catalog product to the cart.
    ///
    /// Stock is not reserved here; it is only decremented at checkout.
    pub fn add_product_to_cart(&mut self, product_id: &str) -> AppResult<String> {
        let product = self
            .state()
            .products
            .iter()
            .find(|p| p.id == product_id)
            .cloned()
            .ok_or_else(|| AppError::not_found("Product", product_id))?;
        Ok(self.cart.add_product(&product))
    }

    /// Removes one line by id. Returns `false` for ids not in the cart.
    pub fn remove_cart_line(&mut self, line_id: &str) -> bool {
        self.cart.remove(line_id)
    }

    pub fn clear_cart(&mut self) {
        self.cart.clear();
    }

    /// Prices the current cart with the shop's configured tax rate.
    pub fn cart_totals(&self, discount: Discount) -> Totals {
        price_cart(self.cart.lines(), discount, self.state().settings.tax_rate())
    }

    // ------------------------------------------------------------------------
    // Settings
    // ------------------------------------------------------------------------

    /// Replaces the shop settings. The new tax rate applies to the next
    /// checkout; committed sales keep the rate they were priced with.
    pub fn update_settings(&mut self, settings: ShopSettings) -> AppResult<()> {
        validate_name("shopName", &settings.shop_name)?;
        validate_tax_rate_bps(settings.tax_rate_bps)?;

        self.store.update(move |mut state| {
            state.settings = settings;
            state
        });
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
