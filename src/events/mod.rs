//! Event data model: payload bag, event type and schema conventions.
//!
//! This module groups everything that travels through the bus:
//! - [`Value`], [`Args`] — the dynamically typed argument bag
//! - [`Event`] — a named occurrence carrying one bag
//! - [`names`] — the documented (unenforced) producer/consumer schema table
//!
//! Routing itself lives in [`EventManager`](crate::EventManager) and
//! [`Registry`](crate::Registry).

mod args;
mod event;
pub mod names;

pub use args::{Args, Value};
pub use event::Event;
