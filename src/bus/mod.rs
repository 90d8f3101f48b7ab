//! Routing: the event manager and the named-manager registry.
//!
//! - [`EventManager`] — listener registry + FIFO queue + deferred dispatch
//! - [`Registry`] — named managers with a mutable "current" selection
//!
//! The data model these route lives in [`events`](crate::events).

mod manager;
mod registry;

pub use manager::{Callback, EventManager, SubscriptionId};
pub use registry::Registry;
