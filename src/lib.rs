//! # tickbus
//!
//! **Tickbus** is a deferred publish/subscribe event bus for interactive
//! real-time applications whose subsystems (input capture, on-screen UI, 3D
//! scene, world state) must communicate without holding direct references to
//! one another.
//!
//! ## Architecture
//! ### Overview
//! ```text
//!   Producers                     EventManager "game"          Consumers
//!   ┌────────────┐  publish   ┌───────────────────────┐
//!   │ input      │ ─────────► │  [FIFO event queue]   │
//!   │ UI         │ ─────────► │                       │   drain (1×/tick)
//!   │ world      │ ─────────► │  listener registry    │ ──► cb(name, args)
//!   └────────────┘            │  name → [cb₀ … cbₙ]   │        │
//!        ▲                    └───────────────────────┘        │
//!        │                               ▲                     │ may re-enter
//!        │                               │                     ▼
//!   SubscriptionSet ── subscribe/drop ───┘              publish / subscribe
//!   (per-owner cleanup)
//!
//!   Registry: { "game" ─► manager, "menu" ─► manager, … } + current slot
//! ```
//!
//! ### Lifecycle
//! ```text
//! Registry::create("game")         manager created and selected as current
//!   owner.subs.subscribe(...)      records (name, id, manager) per owner
//!   producers publish(Event)       appended to queue, never dispatched here
//!   loop { manager.drain() }       once per external tick: FIFO delivery,
//!                                  re-entrant events consumed in-call
//!   drop(owner)                    SubscriptionSet unsubscribes everything
//! ```
//!
//! ## Features
//! | Area            | Description                                            | Key types                 |
//! |-----------------|--------------------------------------------------------|---------------------------|
//! | **Routing**     | Deferred FIFO dispatch, re-entrancy-safe drain.        | [`EventManager`]          |
//! | **Payloads**    | Dynamically typed bags with checked extraction.        | [`Args`], [`Value`]       |
//! | **Scoping**     | Per-owner subscriptions, auto-cleanup on drop.         | [`SubscriptionSet`]       |
//! | **Instances**   | Named managers with a mutable "current" selection.     | [`Registry`]              |
//! | **Conventions** | Documented producer/consumer schema table.             | [`events::names`]         |
//! | **Errors**      | Typed extraction failures; misuse is `bool`/`Option`.  | [`ArgError`]              |
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicBool, Ordering};
//! use tickbus::{events::names, Event, Registry, SubscriptionSet};
//!
//! let registry = Registry::new();
//! registry.create("game");
//!
//! // An owner registers scoped listeners; dropping it cleans them up.
//! let mut subs = SubscriptionSet::new();
//! let running = Arc::new(AtomicBool::new(true));
//! let r = Arc::clone(&running);
//! subs.subscribe(&registry, names::QUIT, move |_name, _args| {
//!     r.store(false, Ordering::Relaxed);
//! });
//!
//! // A producer publishes; delivery waits for the tick's drain call.
//! let bus = registry.current().unwrap();
//! bus.publish(Event::new(names::QUIT));
//! assert!(running.load(Ordering::Relaxed));
//!
//! bus.drain();
//! assert!(!running.load(Ordering::Relaxed));
//! ```

mod bus;
mod error;
pub mod events;
mod subscribers;

// ---- Public re-exports ----

pub use bus::{Callback, EventManager, Registry, SubscriptionId};
pub use error::ArgError;
pub use events::{Args, Event, Value};
pub use subscribers::SubscriptionSet;
