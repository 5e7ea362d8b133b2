//! # balong-core: Pure Business Logic for Balong POS
//!
//! This crate is the heart of the POS. Pricing math, the cart, the receipt
//! formatter, and every domain type live here as pure, deterministic code
//! with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌────────────────────────────────────────────────────────────────────┐
//! │                       Balong POS Workspace                         │
//! │                                                                    │
//! │  ┌──────────────────────────────────────────────────────────────┐  │
//! │  │                 UI shell (not in this workspace)             │  │
//! │  └──────────────────────────────┬───────────────────────────────┘  │
//! │  ┌──────────────────────────────▼───────────────────────────────┐  │
//! │  │        balong-app: session, checkout, reports, dashboard     │  │
//! │  └──────────────┬───────────────────────────────┬───────────────┘  │
//! │  ┌──────────────▼───────────────┐ ┌─────────────▼───────────────┐  │
//! │  │  ★ balong-core (THIS CRATE)  │ │ balong-store: state + blob  │  │
//! │  │  money · pricing · cart      │ │ persistence + change bus    │  │
//! │  │  receipt · types · rules     │ │                             │  │
//! │  │  NO I/O · PURE FUNCTIONS     │ │                             │  │
//! │  └──────────────────────────────┘ └─────────────────────────────┘  │
//! └────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money type with integer-centavo arithmetic
//! - [`types`] - Domain types (Service, Product, Sale, settings, ...)
//! - [`pricing`] - Cart pricing: subtotal, discount, tax, total
//! - [`cart`] - The transient line-item accumulator
//! - [`receipt`] - 32-column receipt text formatter
//! - [`validation`] - Form-input business rules
//! - [`error`] - Validation error types

pub mod cart;
pub mod error;
pub mod money;
pub mod pricing;
pub mod receipt;
pub mod types;
pub mod validation;

// Re-exports so callers can `use balong_core::Money` directly.
pub use cart::{Cart, LineItem};
pub use error::{ValidationError, ValidationResult};
pub use money::Money;
pub use pricing::{price_cart, Totals};
pub use receipt::format_receipt;
pub use types::*;
