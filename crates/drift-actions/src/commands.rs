//! Collaborator surfaces the resolver depends on.
//!
//! Both surfaces are injected at construction. The resolver references
//! commands from the handlers it binds but never calls them during
//! resolution, and it never observes their completion: every command is
//! fire-and-forget against an eventually-consistent store.

use serde::Serialize;

use drift_core::{FolderId, PeerId};

/// Store command surface.
///
/// Each method issues exactly one mutation command (or window request) and
/// returns immediately.
#[cfg_attr(test, mockall::automock)]
pub trait ChatCommands: Send + Sync {
    /// Toggle the chat's pinned state within a folder.
    fn toggle_chat_pinned(&self, id: &PeerId, folder_id: FolderId);

    /// Toggle a saved dialog's pinned state.
    fn toggle_saved_dialog_pinned(&self, id: &PeerId);

    /// Set the chat's muted state.
    fn set_chat_muted(&self, id: &PeerId, muted: bool);

    /// Flip the chat between read and unread.
    fn toggle_chat_unread(&self, id: &PeerId);

    /// Move the chat into or out of the archive.
    fn set_chat_archived(&self, id: &PeerId, archived: bool);

    /// Set the chat's done state.
    fn set_chat_done(&self, id: &PeerId, done: bool);

    /// Snooze the chat until the user asks to be notified.
    fn snooze_chat(&self, id: &PeerId);

    /// Open the chat in a separate window or tab.
    fn open_chat_in_new_tab(&self, id: &PeerId, thread_id: Option<PeerId>);
}

/// Analytics events emitted by menu action handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MenuEvent {
    SnoozeChat,
    MarkChatRead,
    MarkChatUnread,
    MarkChatDone,
    MarkChatNotDone,
}

/// Analytics collaborator.
///
/// Handlers emit events; delivery is entirely the sink's concern.
pub trait Tracker: Send + Sync {
    fn track(&self, event: MenuEvent);
}
