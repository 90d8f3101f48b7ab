//! # The event payload queued for deferred delivery.
//!
//! An [`Event`] is a name plus an argument bag. Names are open-ended strings
//! (see [`names`](crate::events::names) for the conventional set); the bag is
//! validated only by convention between producer and consumer.
//!
//! Events are immutable once enqueued: `publish` takes the event by value and
//! `drain` hands listeners a shared reference to the bag.

use std::sync::Arc;

use super::args::{Args, Value};

/// A named occurrence carrying an [`Args`] bag.
///
/// Built with the chained builder:
///
/// ```rust
/// use tickbus::Event;
///
/// let ev = Event::new("paintVoxel")
///     .with("matter", "rock")
///     .with("x", 4)
///     .with("y", 1)
///     .with("z", 9)
///     .with("radius", 2);
///
/// assert_eq!(ev.name(), "paintVoxel");
/// assert_eq!(ev.args().get_int("radius"), Ok(2));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    /// Event name; shared cheaply between the queue and diagnostics.
    name: Arc<str>,
    /// Payload bag; never mutated after enqueue.
    args: Args,
}

impl Event {
    /// Creates an event with an empty bag.
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self {
            name: name.into(),
            args: Args::new(),
        }
    }

    /// Creates an event carrying a pre-built bag.
    pub fn with_args(name: impl Into<Arc<str>>, args: Args) -> Self {
        Self {
            name: name.into(),
            args,
        }
    }

    /// Adds one argument to the bag (builder).
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.args.insert(key, value);
        self
    }

    /// The event name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The argument bag.
    #[inline]
    pub fn args(&self) -> &Args {
        &self.args
    }

    /// Consumes the event, returning its bag.
    #[must_use]
    pub fn into_args(self) -> Args {
        self.args
    }
}
