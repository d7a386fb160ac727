//! Menu invocation context.

use serde::{Deserialize, Serialize};

use drift_core::{Chat, FolderId, PeerId, User};

use crate::action::Handler;

/// Where the menu is being shown.
///
/// Determines which catalog subset applies and in what order. Supplied by
/// the caller, never derived.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ViewContext {
    /// The primary chat list.
    #[default]
    ChatList,
    /// A chat folder tab.
    Folder,
    /// Rows inside global search results.
    SearchResults,
    /// The saved-messages dialog list.
    SavedDialog,
}

/// Situational flags supplied by the caller alongside the snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuFlags {
    /// Folder scope; present means the menu is shown inside a folder.
    pub folder_id: Option<FolderId>,

    /// Whether the surrounding list is the inbox surface.
    pub is_inbox: bool,

    /// Current pinned state of the row.
    pub is_pinned: bool,

    /// Current muted state of the chat.
    pub is_muted: bool,

    /// Whether the viewer may move the chat between folders.
    pub can_change_folder: bool,

    /// The viewer's own peer id; saved-dialog open handlers need it.
    pub current_user_id: Option<PeerId>,
}

/// Opaque caller-supplied handlers wired into produced actions.
///
/// Absent delete/mute/folder callbacks degrade to no-op handlers; an absent
/// report callback suppresses the report action entirely.
#[derive(Debug, Clone, Default)]
pub struct MenuCallbacks {
    /// Runs the delete/leave confirmation flow.
    pub on_delete: Option<Handler>,

    /// Opens the mute duration chooser.
    pub on_mute: Option<Handler>,

    /// Opens the folder picker.
    pub on_folder_change: Option<Handler>,

    /// Opens the report flow.
    pub on_report: Option<Handler>,
}

/// One menu invocation: snapshots, context, and flags.
#[derive(Debug, Clone, Default)]
pub struct MenuRequest<'a> {
    /// Chat snapshot; `None` means there is nothing to show.
    pub chat: Option<&'a Chat>,

    /// Paired user snapshot for direct chats.
    pub user: Option<&'a User>,

    /// Where the menu is shown.
    pub context: ViewContext,

    /// Situational flags.
    pub flags: MenuFlags,

    /// Caller-supplied handlers.
    pub callbacks: MenuCallbacks,
}
