//! # Event manager: listener registry + deferred FIFO dispatch.
//!
//! [`EventManager`] owns one subscription registry and one event queue.
//! `publish` only appends; nothing is dispatched until the driving loop calls
//! [`EventManager::drain`] — by design, so a subsystem may publish mid-update
//! without triggering callbacks that mutate state the publisher is still
//! iterating over.
//!
//! ## Architecture
//! ```text
//! Producers (many):                       Driving loop (one):
//!   input   ──┐
//!   UI      ──┼── publish ──► [FIFO queue] ◄── drain (once per tick)
//!   world   ──┘                    │
//!                                  ▼ per event: snapshot listeners(name)
//!                        cb₀(name, args) … cbₙ(name, args)
//!                                  │
//!                                  └─ may re-enter publish/subscribe:
//!                                     new events join the tail and are
//!                                     consumed before drain returns
//! ```
//!
//! ## Rules
//! - **Deterministic order**: listeners sharing a name are invoked in
//!   registration order.
//! - **Snapshot dispatch**: the listener list for the event being delivered
//!   is snapshotted first; `subscribe`/`unsubscribe` from inside a callback
//!   take effect from the next event on, never for the snapshot in flight.
//! - **No lock across callbacks**: internal state is unlocked while a
//!   callback runs, so re-entrant calls never deadlock.
//! - **No runaway guard**: a callback publishing the name it is handling
//!   makes `drain` unbounded; that is the caller's responsibility.

use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::sync::{Arc, Mutex, MutexGuard};

use tracing::{debug, trace};

use crate::events::{Args, Event};

/// Unique handle identifying one registration within a manager.
///
/// Strictly increasing per manager; never reused, even after unsubscription.
pub type SubscriptionId = u64;

/// Shared callback contract: `(event name, args) -> ()`.
///
/// Must not block; may re-enter the bus (publish, subscribe, unsubscribe).
pub type Callback = Arc<dyn Fn(&str, &Args) + Send + Sync + 'static>;

/// One registration under an event name.
struct Listener {
    id: SubscriptionId,
    callback: Callback,
}

/// Registry + queue, guarded together.
#[derive(Default)]
struct Inner {
    /// Listeners per event name, in registration order.
    listeners: HashMap<String, Vec<Listener>>,
    /// Pending events, strictly FIFO; may grow while being drained.
    queue: VecDeque<Event>,
}

/// Deferred publish/subscribe bus.
///
/// Owns exactly one subscription registry and one FIFO queue; several
/// managers may exist concurrently under distinct names (see
/// [`Registry`](crate::Registry)). All operations are total: misuse such as
/// unsubscribing an unknown id is reported through the return value, never
/// an error.
///
/// ## Example
/// ```rust
/// use std::sync::Arc;
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use tickbus::{Event, EventManager};
///
/// let bus = EventManager::new();
/// let hits = Arc::new(AtomicUsize::new(0));
///
/// let h = Arc::clone(&hits);
/// let id = bus.subscribe("ping", move |_name, _args| {
///     h.fetch_add(1, Ordering::Relaxed);
/// });
/// assert_eq!(id, 0);
///
/// bus.publish(Event::new("ping"));
/// assert_eq!(hits.load(Ordering::Relaxed), 0); // deferred
///
/// bus.drain();
/// assert_eq!(hits.load(Ordering::Relaxed), 1);
///
/// assert!(bus.unsubscribe(id));
/// assert!(!bus.unsubscribe(id)); // second time is a no-op
/// ```
#[derive(Default)]
pub struct EventManager {
    /// Next subscription id; monotonically increasing, never reused.
    next_id: AtomicU64,
    inner: Mutex<Inner>,
}

impl EventManager {
    /// Creates a manager with an empty registry and queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `callback` under `name` and returns a fresh id.
    ///
    /// Any number of callbacks may share a name; they are invoked in
    /// registration order when an event with that name is drained.
    pub fn subscribe<F>(&self, name: impl Into<String>, callback: F) -> SubscriptionId
    where
        F: Fn(&str, &Args) + Send + Sync + 'static,
    {
        let name = name.into();
        let id = self.next_id.fetch_add(1, AtomicOrdering::Relaxed);
        debug!(event = %name, id, "subscribed");
        self.lock()
            .listeners
            .entry(name)
            .or_default()
            .push(Listener {
                id,
                callback: Arc::new(callback),
            });
        id
    }

    /// Removes the single registration with `id`, if present.
    ///
    /// Returns whether one was removed; unknown (or already removed) ids are
    /// not an error and return `false`.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut inner = self.lock();
        let mut removed = false;
        for (name, listeners) in inner.listeners.iter_mut() {
            if let Some(pos) = listeners.iter().position(|l| l.id == id) {
                listeners.remove(pos);
                debug!(event = %name, id, "unsubscribed");
                removed = true;
                break;
            }
        }
        if removed {
            // Names with no listeners left are dropped from the registry.
            inner.listeners.retain(|_, ls| !ls.is_empty());
        }
        removed
    }

    /// Appends `event` to the tail of the queue.
    ///
    /// Never dispatches synchronously; the event waits for the next
    /// [`EventManager::drain`]. Publishing a name with no listeners is fine —
    /// the event drains silently.
    pub fn publish(&self, event: Event) {
        trace!(event = %event.name(), "queued");
        self.lock().queue.push_back(event);
    }

    /// Fully processes the queue, including re-entrant production.
    ///
    /// Pops events FIFO; for each, snapshots the listeners currently
    /// registered under its name and invokes every one exactly once with
    /// `(name, &args)`. Events published by listeners during the call join
    /// the tail and are consumed before `drain` returns, so the queue is
    /// empty afterwards — unless a listener publishes without bound, which
    /// the manager deliberately does not guard against.
    ///
    /// Registry mutations made by listeners apply from the next event on;
    /// the snapshot being delivered is always invoked in full.
    pub fn drain(&self) {
        loop {
            let (event, targets) = {
                let mut inner = self.lock();
                let Some(event) = inner.queue.pop_front() else {
                    break;
                };
                let targets: Vec<Callback> = inner
                    .listeners
                    .get(event.name())
                    .map(|ls| ls.iter().map(|l| Callback::clone(&l.callback)).collect())
                    .unwrap_or_default();
                (event, targets)
            };
            trace!(event = %event.name(), listeners = targets.len(), "dispatching");
            for callback in targets {
                callback(event.name(), event.args());
            }
        }
    }

    /// Diagnostic enumeration of `(name, id)` pairs, sorted for determinism.
    ///
    /// No side effects; the order is (name, id), not registration order
    /// across names.
    #[must_use]
    pub fn list_listeners(&self) -> Vec<(String, SubscriptionId)> {
        let inner = self.lock();
        let mut out: Vec<(String, SubscriptionId)> = inner
            .listeners
            .iter()
            .flat_map(|(name, ls)| ls.iter().map(move |l| (name.clone(), l.id)))
            .collect();
        out.sort_unstable();
        out
    }

    /// Number of events currently queued (not yet drained).
    #[must_use]
    pub fn pending(&self) -> usize {
        self.lock().queue.len()
    }

    /// Locks internal state, recovering from poisoning.
    ///
    /// A callback panic during `drain` happens with the lock released, so a
    /// poisoned mutex can only come from a panicking `Value`/`Args` clone;
    /// the registry and queue remain structurally valid either way.
    fn lock(&self) -> MutexGuard<'_, Inner> {
        match self.inner.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl std::fmt::Debug for EventManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.lock();
        f.debug_struct("EventManager")
            .field("listeners", &inner.listeners.values().map(Vec::len).sum::<usize>())
            .field("pending", &inner.queue.len())
            .finish()
    }
}
