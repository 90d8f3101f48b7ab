//! # Named manager registry with a mutable "current" selection.
//!
//! [`Registry`] maps names to shared [`EventManager`] instances and keeps a
//! single `(name, manager)` "current" slot for code that has no explicit
//! manager reference. It is an explicit, cloneable handle — construct one,
//! clone it into whatever needs bus access — rather than process-wide state,
//! so tests get isolated registries for free.
//!
//! ## Rules
//! - `create` inserts **and selects** the new manager as current; duplicate
//!   names are refused and leave the existing manager untouched.
//! - `remove` refuses both unknown names and the currently selected manager
//!   (no dangling current reference, ever).
//! - Managers are handed out as `Arc`s: a subscriber keeps using the manager
//!   it bound to even after current is repointed elsewhere. Changing current
//!   never migrates existing subscriptions.
//! - All misuse is reported through `bool`/`Option` returns; nothing here is
//!   fatal. With no manager ever created, `current()` is `None` and callers
//!   degrade to no-ops.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use tracing::{debug, warn};

use super::manager::EventManager;

#[derive(Default)]
struct Inner {
    managers: HashMap<String, Arc<EventManager>>,
    /// The mutable "current" slot; empty until the first `create`.
    current: Option<(String, Arc<EventManager>)>,
}

/// Cloneable handle to a named set of managers plus the current selection.
///
/// Cheap to clone (`Arc`-backed); all clones observe the same registry.
///
/// ## Example
/// ```rust
/// use tickbus::Registry;
///
/// let registry = Registry::new();
/// assert!(registry.create("game"));
/// assert!(!registry.create("game"));          // duplicate refused
/// assert_eq!(registry.current_name().as_deref(), Some("game"));
///
/// assert!(registry.create("menu"));           // created and selected
/// assert!(!registry.remove("menu"));          // refuses current
/// assert!(registry.set_current("game"));
/// assert!(registry.remove("menu"));
/// ```
#[derive(Clone, Default)]
pub struct Registry {
    inner: Arc<Mutex<Inner>>,
}

impl Registry {
    /// Creates an empty registry with no current manager.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a manager under `name` and selects it as current.
    ///
    /// Returns `false` (and changes nothing) if the name is already taken.
    pub fn create(&self, name: &str) -> bool {
        let mut inner = self.lock();
        if inner.managers.contains_key(name) {
            warn!(manager = %name, "create refused: name already exists");
            return false;
        }
        let manager = Arc::new(EventManager::new());
        inner.managers.insert(name.to_string(), Arc::clone(&manager));
        inner.current = Some((name.to_string(), manager));
        debug!(manager = %name, "manager created and selected");
        true
    }

    /// Removes the manager under `name`.
    ///
    /// Returns `false` if the name is unknown **or** names the currently
    /// selected manager; factory state is unchanged on failure. Subscribers
    /// holding an `Arc` to a removed manager keep a working bus — removal
    /// only unlists it.
    pub fn remove(&self, name: &str) -> bool {
        let mut inner = self.lock();
        if !inner.managers.contains_key(name) {
            warn!(manager = %name, "remove refused: unknown name");
            return false;
        }
        if inner.current.as_ref().is_some_and(|(cur, _)| cur == name) {
            warn!(manager = %name, "remove refused: manager is current");
            return false;
        }
        inner.managers.remove(name);
        debug!(manager = %name, "manager removed");
        true
    }

    /// Repoints current at the manager under `name`.
    ///
    /// Returns `false` if the name is unknown; current is then unchanged.
    /// No other manager's state or subscriptions are affected.
    pub fn set_current(&self, name: &str) -> bool {
        let mut inner = self.lock();
        match inner.managers.get(name) {
            Some(manager) => {
                let manager = Arc::clone(manager);
                inner.current = Some((name.to_string(), manager));
                debug!(manager = %name, "manager selected");
                true
            }
            None => {
                warn!(manager = %name, "select refused: unknown name");
                false
            }
        }
    }

    /// The currently selected manager, if any manager was ever created.
    #[must_use]
    pub fn current(&self) -> Option<Arc<EventManager>> {
        self.lock().current.as_ref().map(|(_, m)| Arc::clone(m))
    }

    /// Name of the currently selected manager.
    #[must_use]
    pub fn current_name(&self) -> Option<String> {
        self.lock().current.as_ref().map(|(name, _)| name.clone())
    }

    /// Shared handle to the manager under `name`, if present.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Arc<EventManager>> {
        self.lock().managers.get(name).map(Arc::clone)
    }

    /// Sorted list of registered manager names.
    #[must_use]
    pub fn list(&self) -> Vec<String> {
        let inner = self.lock();
        let mut names: Vec<String> = inner.managers.keys().cloned().collect();
        names.sort_unstable();
        names
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        match self.inner.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.lock();
        f.debug_struct("Registry")
            .field("managers", &inner.managers.len())
            .field("current", &inner.current.as_ref().map(|(n, _)| n))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::Event;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_empty_registry_has_no_current() {
        let registry = Registry::new();
        assert!(registry.current().is_none());
        assert!(registry.current_name().is_none());
        assert!(registry.list().is_empty());
    }

    #[test]
    fn test_create_selects_and_refuses_duplicates() {
        let registry = Registry::new();
        assert!(registry.create("a"));
        assert_eq!(registry.current_name().as_deref(), Some("a"));

        // Give the first "a" observable state, then try to shadow it.
        let first = registry.get("a").unwrap();
        first.subscribe("x", |_, _| {});
        assert!(!registry.create("a"));
        assert_eq!(registry.get("a").unwrap().list_listeners().len(), 1);
        assert_eq!(registry.current_name().as_deref(), Some("a"));
    }

    #[test]
    fn test_remove_refuses_unknown_and_current() {
        let registry = Registry::new();
        assert!(!registry.remove("ghost"));

        registry.create("a");
        assert!(!registry.remove("a")); // current
        assert_eq!(registry.list(), vec!["a".to_string()]);

        registry.create("b");
        assert!(registry.remove("a")); // no longer current
        assert_eq!(registry.list(), vec!["b".to_string()]);
    }

    #[test]
    fn test_set_current_unknown_leaves_current_unchanged() {
        let registry = Registry::new();
        registry.create("a");
        assert!(!registry.set_current("ghost"));
        assert_eq!(registry.current_name().as_deref(), Some("a"));
    }

    #[test]
    fn test_subscriptions_never_migrate_on_reselect() {
        let registry = Registry::new();
        registry.create("a");
        let hits = Arc::new(AtomicUsize::new(0));
        let h = Arc::clone(&hits);
        registry.current().unwrap().subscribe("ping", move |_, _| {
            h.fetch_add(1, Ordering::Relaxed);
        });

        registry.create("b");
        // "b" is now current and has no listeners.
        let b = registry.current().unwrap();
        b.publish(Event::new("ping"));
        b.drain();
        assert_eq!(hits.load(Ordering::Relaxed), 0);

        // The subscription still lives on "a".
        let a = registry.get("a").unwrap();
        a.publish(Event::new("ping"));
        a.drain();
        assert_eq!(hits.load(Ordering::Relaxed), 1);
    }

    #[test]
    fn test_removed_manager_stays_usable_through_held_arc() {
        let registry = Registry::new();
        registry.create("old");
        let held = registry.get("old").unwrap();
        registry.create("new");
        assert!(registry.remove("old"));
        assert!(registry.get("old").is_none());

        let hits = Arc::new(AtomicUsize::new(0));
        let h = Arc::clone(&hits);
        held.subscribe("ping", move |_, _| {
            h.fetch_add(1, Ordering::Relaxed);
        });
        held.publish(Event::new("ping"));
        held.drain();
        assert_eq!(hits.load(Ordering::Relaxed), 1);
    }
}
