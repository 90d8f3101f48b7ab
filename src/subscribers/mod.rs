//! Scoped subscriptions: per-owner bookkeeping with cleanup on drop.

mod set;

pub use set::SubscriptionSet;
