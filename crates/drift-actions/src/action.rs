//! Action types produced by the resolver.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Semantic role of an action within a menu.
///
/// A resolved list never contains two actions with the same role; toggles
/// (pin/unpin, mute/unmute) share one role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActionRole {
    Snooze,
    Done,
    MarkAsRead,
    MarkAsUnread,
    Archive,
    Mute,
    Pin,
    OpenInNewSurface,
    AddToFolder,
    Report,
    Delete,
}

/// Icon identifiers from the client icon font.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconId {
    Schedule,
    Select,
    #[serde(rename = "readchats")]
    ReadChats,
    Unread,
    Archive,
    Unarchive,
    Mute,
    Unmute,
    Pin,
    Unpin,
    OpenInNewTab,
    Folder,
    Flag,
    Delete,
}

impl IconId {
    /// Icon font symbol name.
    pub fn as_str(self) -> &'static str {
        match self {
            IconId::Schedule => "schedule",
            IconId::Select => "select",
            IconId::ReadChats => "readchats",
            IconId::Unread => "unread",
            IconId::Archive => "archive",
            IconId::Unarchive => "unarchive",
            IconId::Mute => "mute",
            IconId::Unmute => "unmute",
            IconId::Pin => "pin",
            IconId::Unpin => "unpin",
            IconId::OpenInNewTab => "open-in-new-tab",
            IconId::Folder => "folder",
            IconId::Flag => "flag",
            IconId::Delete => "delete",
        }
    }
}

/// A bound, self-contained side effect.
///
/// Invoking a handler requires nothing further from the caller; everything
/// it needs is captured at resolution time. Handlers are cheap to clone.
#[derive(Clone)]
pub struct Handler(Arc<dyn Fn() + Send + Sync>);

impl Handler {
    /// Wrap a closure.
    pub fn new(f: impl Fn() + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    /// A handler that does nothing. Stands in for absent caller callbacks.
    pub fn noop() -> Self {
        Self::new(|| {})
    }

    /// Run the side effect.
    pub fn invoke(&self) {
        (self.0)()
    }
}

impl fmt::Debug for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Handler(..)")
    }
}

/// One selectable menu row.
#[derive(Debug, Clone)]
pub struct Action {
    /// Semantic role; unique within a list.
    pub role: ActionRole,

    /// Fully resolved display title, never a raw key.
    pub title: String,

    /// Icon identifier.
    pub icon: IconId,

    /// Whether the row renders as destructive.
    pub destructive: bool,

    /// Bound side effect, invoked by the caller on selection.
    pub handler: Handler,
}

/// Structural equality: handler identity is not part of it.
impl PartialEq for Action {
    fn eq(&self, other: &Self) -> bool {
        self.role == other.role
            && self.title == other.title
            && self.icon == other.icon
            && self.destructive == other.destructive
    }
}

/// An ordered action list for one menu.
pub type ActionList = Vec<Action>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_handler_invokes_closure() {
        let hits = Arc::new(AtomicUsize::new(0));
        let handler = {
            let hits = Arc::clone(&hits);
            Handler::new(move || {
                hits.fetch_add(1, Ordering::Relaxed);
            })
        };
        handler.invoke();
        handler.clone().invoke();
        assert_eq!(hits.load(Ordering::Relaxed), 2);
    }

    #[test]
    fn test_structural_equality_ignores_handler() {
        let a = Action {
            role: ActionRole::Pin,
            title: "Pin to top".to_string(),
            icon: IconId::Pin,
            destructive: false,
            handler: Handler::noop(),
        };
        let b = Action {
            handler: Handler::new(|| {}),
            ..a.clone()
        };
        assert_eq!(a, b);

        let c = Action {
            title: "Unpin from top".to_string(),
            ..a.clone()
        };
        assert_ne!(a, c);
    }

    #[test]
    fn test_icon_symbol_names() {
        assert_eq!(IconId::ReadChats.as_str(), "readchats");
        assert_eq!(IconId::OpenInNewTab.as_str(), "open-in-new-tab");
    }
}
