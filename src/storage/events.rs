//! Store change notifications
//!
//! Publishes an event after every persisted mutation so presentation code can
//! drop cached aggregates and redraw. Subscribers receive events over an
//! mpsc channel; disconnected subscribers are pruned on the next publish.

use std::sync::mpsc;
use std::sync::Mutex;

use crate::models::{ExpenseId, Money};

/// A persisted change to the store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreEvent {
    /// A new expense was saved
    ExpenseAdded(ExpenseId),
    /// An expense was deleted
    ExpenseDeleted(ExpenseId),
    /// The monthly budget was changed
    BudgetChanged(Money),
}

impl StoreEvent {
    /// Whether this event invalidates the cached total spend
    pub fn invalidates_total(&self) -> bool {
        matches!(self, Self::ExpenseAdded(_) | Self::ExpenseDeleted(_))
    }
}

/// Fan-out publisher for store events
#[derive(Default)]
pub struct StoreEvents {
    subscribers: Mutex<Vec<mpsc::Sender<StoreEvent>>>,
}

impl StoreEvents {
    /// Create a publisher with no subscribers
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new subscriber
    pub fn subscribe(&self) -> mpsc::Receiver<StoreEvent> {
        let (sender, receiver) = mpsc::channel();
        // A poisoned list only means a publisher panicked mid-send
        let mut subscribers = match self.subscribers.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        subscribers.push(sender);
        receiver
    }

    /// Send an event to every live subscriber
    pub fn publish(&self, event: StoreEvent) {
        let mut subscribers = match self.subscribers.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        subscribers.retain(|sender| sender.send(event).is_ok());
    }

    /// Number of live subscribers as of the last publish
    pub fn subscriber_count(&self) -> usize {
        match self.subscribers.lock() {
            Ok(guard) => guard.len(),
            Err(poisoned) => poisoned.into_inner().len(),
        }
    }
}
