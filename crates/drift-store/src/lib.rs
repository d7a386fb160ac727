//! In-memory chat state store.
//!
//! Implements the query and command surfaces the action engine depends on.
//! Commands are fire-and-forget: they enqueue on a channel and take effect
//! only when `apply_pending` drains it, the way the production store applies
//! server round-trips.

mod store;

pub use store::{MemoryStore, OpenRequest, StoreCommand};
