//! # Catalog Commands
//!
//! CRUD over the service menu and the retail product list. Drafts carry the
//! caller's raw form input; ids are assigned here, never by the caller.
//! Every product mutation announces [`ChangeEvent::InventoryChanged`] so the
//! dashboard's low-stock panel stays current.

use balong_core::validation::{validate_name, validate_price};
use balong_core::{Money, Product, Service};
use balong_store::ChangeEvent;
use tracing::debug;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::session::PosSession;

// ============================================================================
// Drafts
// ============================================================================

/// Unvalidated service input from a form.
#[derive(Debug, Clone)]
pub struct ServiceDraft {
    pub name: String,
    pub price: Money,
    pub duration_minutes: u32,
}

/// Unvalidated product input from a form.
#[derive(Debug, Clone)]
pub struct ProductDraft {
    pub name: String,
    pub sku: String,
    pub category: String,
    pub price: Money,
    pub stock: u32,
    pub supplier: String,
}

// ============================================================================
// Service Commands
// ============================================================================

impl PosSession {
    pub fn add_service(&mut self, draft: ServiceDraft) -> AppResult<Service> {
        let name = validate_name("name", &draft.name)?;
        validate_price(draft.price)?;

        let service = Service {
            id: Uuid::new_v4().to_string(),
            name,
            price: draft.price,
            duration_minutes: draft.duration_minutes,
        };
        let stored = service.clone();
        self.store.update(move |mut state| {
            state.services.push(service);
            state
        });
        debug!(id = %stored.id, name = %stored.name, "service added");
        Ok(stored)
    }

    pub fn update_service(&mut self, id: &str, draft: ServiceDraft) -> AppResult<Service> {
        let name = validate_name("name", &draft.name)?;
        validate_price(draft.price)?;
        if !self.state().services.iter().any(|s| s.id == id) {
            return Err(AppError::not_found("Service", id));
        }

        let id = id.to_string();
        let updated = Service {
            id: id.clone(),
            name,
            price: draft.price,
            duration_minutes: draft.duration_minutes,
        };
        let stored = updated.clone();
        self.store.update(move |mut state| {
            if let Some(slot) = state.services.iter_mut().find(|s| s.id == id) {
                *slot = updated;
            }
            state
        });
        Ok(stored)
    }

    pub fn delete_service(&mut self, id: &str) -> AppResult<()> {
        if !self.state().services.iter().any(|s| s.id == id) {
            return Err(AppError::not_found("Service", id));
        }
        let id = id.to_string();
        self.store.update(move |mut state| {
            state.services.retain(|s| s.id != id);
            state
        });
        Ok(())
    }

    // ------------------------------------------------------------------------
    // Product commands
    // ------------------------------------------------------------------------

    pub fn add_product(&mut self, draft: ProductDraft) -> AppResult<Product> {
        let name = validate_name("name", &draft.name)?;
        validate_price(draft.price)?;

        let product = Product {
            id: Uuid::new_v4().to_string(),
            name,
            sku: draft.sku.trim().to_string(),
            category: draft.category.trim().to_string(),
            price: draft.price,
            stock: draft.stock,
            supplier: draft.supplier.trim().to_string(),
        };
        let stored = product.clone();
        self.store.update(move |mut state| {
            state.products.push(product);
            state
        });
        self.bus.publish(ChangeEvent::InventoryChanged);
        debug!(id = %stored.id, sku = %stored.sku, "product added");
        Ok(stored)
    }

    pub fn update_product(&mut self, id: &str, draft: ProductDraft) -> AppResult<Product> {
        let name = validate_name("name", &draft.name)?;
        validate_price(draft.price)?;
        if !self.state().products.iter().any(|p| p.id == id) {
            return Err(AppError::not_found("Product", id));
        }

        let id = id.to_string();
        let updated = Product {
            id: id.clone(),
            name,
            sku: draft.sku.trim().to_string(),
            category: draft.category.trim().to_string(),
            price: draft.price,
            stock: draft.stock,
            supplier: draft.supplier.trim().to_string(),
        };
        let stored = updated.clone();
        self.store.update(move |mut state| {
            if let Some(slot) = state.products.iter_mut().find(|p| p.id == id) {
                *slot = updated;
            }
            state
        });
        self.bus.publish(ChangeEvent::InventoryChanged);
        Ok(stored)
    }

    pub fn delete_product(&mut self, id: &str) -> AppResult<()> {
        if !self.state().products.iter().any(|p| p.id == id) {
            return Err(AppError::not_found("Product", id));
        }
        let id = id.to_string();
        self.store.update(move |mut state| {
            state.products.retain(|p| p.id != id);
            state
        });
        self.bus.publish(ChangeEvent::InventoryChanged);
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
