//! Contextual action composition for the Drift chat client.
//!
//! Given a chat/user snapshot and a view context, [`ActionResolver`] computes
//! the ordered list of context-menu actions: title, icon, destructive flag,
//! and a bound side-effecting handler. Side effects are deferred into
//! [`Handler`] closures over the injected [`ChatCommands`] surface;
//! resolution itself is pure, synchronous, and never runs a handler.

mod action;
mod catalog;
mod commands;
mod context;
mod memo;
mod resolver;

pub use action::{Action, ActionList, ActionRole, Handler, IconId};
pub use commands::{ChatCommands, MenuEvent, Tracker};
pub use context::{MenuCallbacks, MenuFlags, MenuRequest, ViewContext};
pub use memo::{MemoizedResolver, MenuKey};
pub use resolver::ActionResolver;
