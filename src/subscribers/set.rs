//! # SubscriptionSet: per-owner scoped subscriptions with guaranteed cleanup.
//!
//! [`SubscriptionSet`] tracks every subscription an owning object made and
//! retracts them all when the set is dropped — the core safety contract of
//! the subsystem: no listener closure outlives its owner while still
//! registered.
//!
//! ## Rules
//! - Each record binds to the **manager instance active at subscribe time**
//!   (the `Arc` is stored alongside the id). Repointing the registry's
//!   "current" afterwards never migrates or strands a subscription; cleanup
//!   always reaches the right manager.
//! - Duplicate names are allowed, but [`SubscriptionSet::unsubscribe`]
//!   removes **all** records under the name — callers who subscribed twice
//!   intentionally should hold two sets (a `warn!` flags the situation both
//!   on the duplicate subscribe and on the blanket removal).
//! - With no current manager in the registry, `subscribe` degrades to a
//!   no-op and returns `false`.
//!
//! ## Example
//! ```rust
//! use tickbus::{Event, Registry, SubscriptionSet};
//!
//! let registry = Registry::new();
//! registry.create("game");
//!
//! {
//!     let mut subs = SubscriptionSet::new();
//!     subs.subscribe(&registry, "quit", |_, _| { /* owner reacts */ });
//!     assert_eq!(registry.current().unwrap().list_listeners().len(), 1);
//! } // owner destroyed: the set drops and unsubscribes everything
//!
//! assert!(registry.current().unwrap().list_listeners().is_empty());
//! ```

use std::sync::Arc;

use tracing::{debug, warn};

use crate::bus::{EventManager, Registry, SubscriptionId};
use crate::events::Args;

/// One scoped registration: where it lives and how to cancel it.
struct Record {
    name: String,
    id: SubscriptionId,
    /// Manager the registration was made against; kept so cleanup works even
    /// after the registry's current selection moves on.
    manager: Arc<EventManager>,
}

/// Per-owner bookkeeping of subscriptions, released on drop.
///
/// Embed one in any object that registers listeners; dropping the object
/// drops the set, which unsubscribes every remaining record. [`clear`] is
/// the explicit release path for teardown that happens before drop.
///
/// [`clear`]: SubscriptionSet::clear
#[derive(Default)]
pub struct SubscriptionSet {
    records: Vec<Record>,
}

impl SubscriptionSet {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribes `callback` under `name` on the registry's current manager.
    ///
    /// Records the registration for automatic cleanup. Returns `false`
    /// (no-op) when the registry has no current manager.
    pub fn subscribe<F>(&mut self, registry: &Registry, name: &str, callback: F) -> bool
    where
        F: Fn(&str, &Args) + Send + Sync + 'static,
    {
        let Some(manager) = registry.current() else {
            warn!(event = %name, "scoped subscribe skipped: no current manager");
            return false;
        };
        self.subscribe_to(&manager, name, callback);
        true
    }

    /// Subscribes on an explicit manager, bypassing the current selection.
    ///
    /// Returns the new registration's id (also recorded for cleanup).
    pub fn subscribe_to<F>(
        &mut self,
        manager: &Arc<EventManager>,
        name: &str,
        callback: F,
    ) -> SubscriptionId
    where
        F: Fn(&str, &Args) + Send + Sync + 'static,
    {
        if self.records.iter().any(|r| r.name == name) {
            // Allowed, but a later unsubscribe(name) removes both.
            warn!(event = %name, "owner already subscribed to this event; unsubscribe will remove all");
        }
        let id = manager.subscribe(name, callback);
        self.records.push(Record {
            name: name.to_string(),
            id,
            manager: Arc::clone(manager),
        });
        id
    }

    /// Removes every record this owner holds under `name`.
    ///
    /// Unsubscribes each from the manager it was registered with. Returns
    /// `false` if no record under that name was held.
    pub fn unsubscribe(&mut self, name: &str) -> bool {
        let held = self.records.iter().filter(|r| r.name == name).count();
        if held == 0 {
            debug!(event = %name, "no scoped records to unsubscribe");
            return false;
        }
        if held > 1 {
            warn!(event = %name, count = held, "removing multiple records for one event");
        }
        let mut kept = Vec::with_capacity(self.records.len() - held);
        for record in self.records.drain(..) {
            if record.name == name {
                record.manager.unsubscribe(record.id);
            } else {
                kept.push(record);
            }
        }
        self.records = kept;
        true
    }

    /// Explicitly releases every remaining record.
    ///
    /// Equivalent to dropping the set, for owners with a teardown path that
    /// runs earlier.
    pub fn clear(&mut self) {
        for record in self.records.drain(..) {
            record.manager.unsubscribe(record.id);
        }
    }

    /// Number of live records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True if no records are held.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Drop for SubscriptionSet {
    fn drop(&mut self) {
        self.clear();
    }
}

impl std::fmt::Debug for SubscriptionSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SubscriptionSet")
            .field("records", &self.records.len())
            .finish()
    }
}
