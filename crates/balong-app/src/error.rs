//! # Application Errors
//!
//! Errors surfaced by session commands. Pricing and formatting in
//! `balong-core` are total functions and never fail; the failures that
//! remain at this layer are empty-cart checkouts, rejected input and
//! lookups by a stale id.

use balong_core::ValidationError;
use thiserror::Error;

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug, Error)]
pub enum AppError {
    /// Checkout was attempted with nothing in the cart.
    #[error("cart is empty")]
    EmptyCart,

    /// Input rejected before any state was touched.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// An id-based command referenced a record that no longer exists.
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },
}

impl AppError {
    pub fn not_found(entity: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity,
            id: id.into(),
        }
    }
}

/// Convenience alias for command results.
pub type AppResult<T> = Result<T, AppError>;

// ============================================================================
// Tests
// ============================================================================
