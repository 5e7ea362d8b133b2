//! # balong-store: State Container & Persistence for Balong POS
//!
//! This crate owns the one shared mutable resource in the system: the
//! [`AppState`] aggregate. Everything else reads snapshots and submits
//! whole-state transforms.
//!
//! ## Data Flow
//! ```text
//! ┌────────────────────────────────────────────────────────────────────┐
//! │  balong-app command (checkout, edit product, ...)                  │
//! │       │                                                            │
//! │       ▼                                                            │
//! │  Store::update(|state| ...)   one transform = one atomic change    │
//! │       │                                                            │
//! │       ├── swap in-memory state (always)                            │
//! │       └── write JSON blob      (best-effort, warns on failure)     │
//! │                                                                    │
//! │  ChangeBus::publish(SalesChanged / InventoryChanged)               │
//! │       └── observers re-read Store::state() and re-render           │
//! └────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`] - The `AppState` aggregate and its seeded defaults
//! - [`store`] - JSON-blob persistence with load-or-default semantics
//! - [`events`] - Change notification bus (explicit observer registration)
//! - [`error`] - Storage error types

pub mod error;
pub mod events;
pub mod state;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use events::{ChangeBus, ChangeEvent, Subscription};
pub use state::AppState;
pub use store::{Store, STATE_FILE_NAME};
