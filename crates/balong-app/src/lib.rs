//! # balong-app: Application Layer for Balong POS
//!
//! Wires the pure domain (`balong-core`) to durable state (`balong-store`)
//! and exposes the commands a UI shell calls.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                        Command Flow                                 │
//! │                                                                     │
//! │  UI shell                                                           │
//! │     │  session.add_product_to_cart("prd1")                          │
//! │     │  session.checkout(ctx)                                        │
//! │     ▼                                                               │
//! │  PosSession ─────► balong-core (price_cart, format_receipt)         │
//! │     │                                                               │
//! │     ├────────────► balong-store::Store (one transform per command)  │
//! │     │                                                               │
//! │     └────────────► ChangeBus (SalesChanged, InventoryChanged)       │
//! │                        │                                            │
//! │                        ▼                                            │
//! │                   subscribed views re-render                        │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//! ```text
//! src/
//! ├── session.rs      ◄─── PosSession: store + cart + bus
//! ├── checkout.rs     ◄─── cart -> Sale commit
//! ├── catalog.rs      ◄─── service/product CRUD
//! ├── roster.rs       ◄─── barber/customer CRUD
//! ├── appointments.rs ◄─── booking calendar
//! ├── reports.rs      ◄─── filtered sales + summaries
//! ├── dashboard.rs    ◄─── landing-screen queries
//! └── error.rs        ◄─── AppError
//! ```

use tracing::info;
use tracing_subscriber::EnvFilter;

pub mod appointments;
pub mod catalog;
pub mod checkout;
pub mod dashboard;
pub mod error;
pub mod reports;
pub mod roster;
pub mod session;

pub use appointments::AppointmentDraft;
pub use catalog::{ProductDraft, ServiceDraft};
pub use checkout::CheckoutContext;
pub use dashboard::{DashboardStats, ServiceTally};
pub use error::{AppError, AppResult};
pub use reports::{SalesFilter, SalesSummary};
pub use roster::{BarberDraft, CustomerDraft};
pub use session::PosSession;

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=balong=trace` - Show trace for balong crates only
/// - Default: INFO level
///
/// Safe to call more than once; later calls are no-ops.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,balong=debug"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init();

    info!("tracing initialized");
}
