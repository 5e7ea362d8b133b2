//! # Change Notification Bus
//!
//! In-process pub/sub for "something you render from changed" signals.
//!
//! After a successful checkout the session publishes [`SalesChanged`] and
//! [`InventoryChanged`]; catalog edits publish [`InventoryChanged`]. The
//! events carry no payload on purpose: observers (dashboard, reports,
//! inventory view) re-derive whatever they show from the store, the bus
//! never pushes differential updates.
//!
//! - No I/O, no async
//! - Best-effort fan-out; dead subscribers are dropped on publish
//! - Observers register explicitly; there is no ambient global signal
//!
//! [`SalesChanged`]: ChangeEvent::SalesChanged
//! [`InventoryChanged`]: ChangeEvent::InventoryChanged

use std::sync::{mpsc, Mutex};

/// A named change signal, no payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeEvent {
    /// The sales collection changed (a checkout committed).
    SalesChanged,
    /// Product stock or the product catalog changed.
    InventoryChanged,
}

/// A registered observer's end of the bus.
#[derive(Debug)]
pub struct Subscription {
    receiver: mpsc::Receiver<ChangeEvent>,
}

impl Subscription {
    /// Receives the next pending event without blocking.
    pub fn try_recv(&self) -> Option<ChangeEvent> {
        self.receiver.try_recv().ok()
    }

    /// Drains every pending event, in publish order.
    pub fn drain(&self) -> Vec<ChangeEvent> {
        std::iter::from_fn(|| self.try_recv()).collect()
    }
}

/// The change bus, owned by the composition root.
#[derive(Debug, Default)]
pub struct ChangeBus {
    subscribers: Mutex<Vec<mpsc::Sender<ChangeEvent>>>,
}

impl ChangeBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new observer.
    pub fn subscribe(&self) -> Subscription {
        let (tx, rx) = mpsc::channel();

        if let Ok(mut subs) = self.subscribers.lock() {
            subs.push(tx);
        }

        Subscription { receiver: rx }
    }

    /// Publishes an event to every live subscriber.
    pub fn publish(&self, event: ChangeEvent) {
        let Ok(mut subs) = self.subscribers.lock() else {
            return;
        };

        // Drop any dead subscribers while publishing.
        subs.retain(|tx| tx.send(event).is_ok());
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
