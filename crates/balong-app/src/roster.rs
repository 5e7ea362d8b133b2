//! # Roster Commands
//!
//! Barbers and customers. Staff records feed the checkout barber fallback
//! and the dashboard leaderboards; customer records are plain address-book
//! entries for now.

use balong_core::validation::validate_name;
use balong_core::{Barber, BarberStatus, Customer};
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::session::PosSession;

// ============================================================================
// Drafts
// ============================================================================

#[derive(Debug, Clone)]
pub struct BarberDraft {
    pub name: String,
    /// Login handle. Blank derives one from the first name.
    pub username: String,
    pub contact: String,
    pub commission_rate_bps: u32,
    pub status: BarberStatus,
}

#[derive(Debug, Clone, Default)]
pub struct CustomerDraft {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub notes: String,
}

/// Lowercased first word of the display name, e.g. "Juan Dela Cruz" -> "juan".
fn derive_username(name: &str) -> String {
    name.split_whitespace()
        .next()
        .unwrap_or_default()
        .to_lowercase()
}

// ============================================================================
// Barber Commands
// ============================================================================

impl PosSession {
    pub fn add_barber(&mut self, draft: BarberDraft) -> AppResult<Barber> {
        let name = validate_name("name", &draft.name)?;
        let username = match draft.username.trim() {
            "" => derive_username(&name),
            handle => handle.to_lowercase(),
        };

        let barber = Barber {
            id: Uuid::new_v4().to_string(),
            name,
            username,
            contact: draft.contact.trim().to_string(),
            commission_rate_bps: draft.commission_rate_bps,
            status: draft.status,
        };
        let stored = barber.clone();
        self.store.update(move |mut state| {
            state.barbers.push(barber);
            state
        });
        Ok(stored)
    }

    pub fn update_barber(&mut self, id: &str, draft: BarberDraft) -> AppResult<Barber> {
        let name = validate_name("name", &draft.name)?;
        if !self.state().barbers.iter().any(|b| b.id == id) {
            return Err(AppError::not_found("Barber", id));
        }
        let username = match draft.username.trim() {
            "" => derive_username(&name),
            handle => handle.to_lowercase(),
        };

        let id = id.to_string();
        let updated = Barber {
            id: id.clone(),
            name,
            username,
            contact: draft.contact.trim().to_string(),
            commission_rate_bps: draft.commission_rate_bps,
            status: draft.status,
        };
        let stored = updated.clone();
        self.store.update(move |mut state| {
            if let Some(slot) = state.barbers.iter_mut().find(|b| b.id == id) {
                *slot = updated;
            }
            state
        });
        Ok(stored)
    }

    /// Removes a barber from the roster. Past sales keep their recorded
    /// barber name; future checkouts simply fall back elsewhere.
    pub fn delete_barber(&mut self, id: &str) -> AppResult<()> {
        if !self.state().barbers.iter().any(|b| b.id == id) {
            return Err(AppError::not_found("Barber", id));
        }
        let id = id.to_string();
        self.store.update(move |mut state| {
            state.barbers.retain(|b| b.id != id);
            state
        });
        Ok(())
    }

    // ------------------------------------------------------------------------
    // Customer commands
    // ------------------------------------------------------------------------

    pub fn add_customer(&mut self, draft: CustomerDraft) -> AppResult<Customer> {
        let name = validate_name("name", &draft.name)?;

        let customer = Customer {
            id: Uuid::new_v4().to_string(),
            name,
            phone: draft.phone.trim().to_string(),
            email: draft.email.trim().to_string(),
            notes: draft.notes.trim().to_string(),
        };
        let stored = customer.clone();
        self.store.update(move |mut state| {
            state.customers.push(customer);
            state
        });
        Ok(stored)
    }

    pub fn update_customer(&mut self, id: &str, draft: CustomerDraft) -> AppResult<Customer> {
        let name = validate_name("name", &draft.name)?;
        if !self.state().customers.iter().any(|c| c.id == id) {
            return Err(AppError::not_found("Customer", id));
        }

        let id = id.to_string();
        let updated = Customer {
            id: id.clone(),
            name,
            phone: draft.phone.trim().to_string(),
            email: draft.email.trim().to_string(),
            notes: draft.notes.trim().to_string(),
        };
        let stored = updated.clone();
        self.store.update(move |mut state| {
            if let Some(slot) = state.customers.iter_mut().find(|c| c.id == id) {
                *slot = updated;
            }
            state
        });
        Ok(stored)
    }

    pub fn delete_customer(&mut self, id: &str) -> AppResult<()> {
        if !self.state().customers.iter().any(|c| c.id == id) {
            return Err(AppError::not_found("Customer", id));
        }
        let id = id.to_string();
        self.store.update(move |mut state| {
            state.customers.retain(|c| c.id != id);
            state
        });
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use balong_store::Store;

    fn session() -> PosSession {
        PosSession::new(Store::in_memory())
    }

    #[test]
    fn test_blank_username_derives_from_first_name() {
        let mut session = session();
        let barber = session
            .add_barber(BarberDraft {
                name: "Pedro Reyes".to_string(),
                username: "".to_string(),
                contact: "".to_string(),
                commission_rate_bps: 3000,
                status: BarberStatus::Active,
            })
            .unwrap();

        assert_eq!(barber.username, "pedro");
    }

    #[test]
    fn test_explicit_username_is_lowercased() {
        let mut session = session();
        let barber = session
            .add_barber(BarberDraft {
                name: "Pedro Reyes".to_string(),
                username: " PReyes ".to_string(),
                contact: "".to_string(),
                commission_rate_bps: 3000,
                status: BarberStatus::Active,
            })
            .unwrap();

        assert_eq!(barber.username, "preyes");
    }

    #[test]
    fn test_delete_barber_keeps_sale_history_intact() {
        let mut session = session();
        session.add_service_to_cart("svc1").unwrap();
        let sale = session
            .checkout(crate::checkout::CheckoutContext {
                barber_id: Some("brb1".to_string()),
                ..Default::default()
            })
            .unwrap();

        session.delete_barber("brb1").unwrap();

        assert!(session.state().barbers.iter().all(|b| b.id != "brb1"));
        assert_eq!(session.state().sales[0].barber_name, sale.barber_name);
    }

    #[test]
    fn test_customer_round_trip() {
        let mut session = session();
        let customer = session
            .add_customer(CustomerDraft {
                name: "Liza Cruz".to_string(),
                phone: "+63 917 000 1111".to_string(),
                ..Default::default()
            })
            .unwrap();

        let updated = session
            .update_customer(
                &customer.id,
                CustomerDraft {
                    name: "Liza Cruz".to_string(),
                    notes: "prefers svc2".to_string(),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(updated.notes, "prefers svc2");

        session.delete_customer(&customer.id).unwrap();
        assert!(session.state().customers.is_empty());
    }
}
