//! Change notifications for record store subscribers
//!
//! Screens that show the same collections register a callback and re-read
//! the store when it fires, instead of polling.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{PoisonError, RwLock};

use crate::audit::Operation;
use crate::models::RecordRef;

/// A successful mutation of one record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreEvent {
    pub operation: Operation,
    pub record: RecordRef,
}

impl StoreEvent {
    pub fn new(operation: Operation, record: RecordRef) -> Self {
        Self { operation, record }
    }
}

/// Callback invoked after each mutation
///
/// Callbacks run synchronously on the mutating thread, after the collection
/// lock is released, so they may read the store. They must not subscribe or
/// unsubscribe from inside the callback.
pub type Observer = Box<dyn Fn(&StoreEvent) + Send + Sync>;

/// Handle returned by `subscribe`, used to unsubscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Registered observers, notified in subscription order
#[derive(Default)]
pub struct Observers {
    next_id: AtomicU64,
    list: RwLock<Vec<(SubscriptionId, Observer)>>,
}

impl Observers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, observer: Observer) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.list
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push((id, observer));
        id
    }

    /// Remove an observer; returns false if it was not registered
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut list = self.list.write().unwrap_or_else(PoisonError::into_inner);
        let before = list.len();
        list.retain(|(sid, _)| *sid != id);
        list.len() != before
    }

    pub fn notify(&self, event: &StoreEvent) {
        let list = self.list.read().unwrap_or_else(PoisonError::into_inner);
        for (_, observer) in list.iter() {
            observer(event);
        }
    }

    pub fn len(&self) -> usize {
        self.list.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl std::fmt::Debug for Observers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Observers").field("count", &self.len()).finish()
    }
}
