//! Localization surface.
//!
//! The action catalog resolves display strings through [`Lang`] before an
//! action leaves the engine, so callers never see raw keys. The surface is
//! total: every key has built-in English text to fall back to.

use serde::{Deserialize, Serialize};

/// Display-string keys used by the action catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LangKey {
    NotifyMe,
    MarkDone,
    MarkNotDone,
    MarkAsRead,
    MarkAsUnread,
    Archive,
    Unarchive,
    Mute,
    Unmute,
    PinToTop,
    UnpinFromTop,
    AddToFolder,
    Report,
    Delete,
    DeleteChatUser,
    DeleteChat,
    LeaveChannel,
    LeaveGroup,
    OpenInNewWindow,
    OpenInNewTab,
}

impl LangKey {
    /// Every key, for completeness checks.
    pub const ALL: [LangKey; 20] = [
        LangKey::NotifyMe,
        LangKey::MarkDone,
        LangKey::MarkNotDone,
        LangKey::MarkAsRead,
        LangKey::MarkAsUnread,
        LangKey::Archive,
        LangKey::Unarchive,
        LangKey::Mute,
        LangKey::Unmute,
        LangKey::PinToTop,
        LangKey::UnpinFromTop,
        LangKey::AddToFolder,
        LangKey::Report,
        LangKey::Delete,
        LangKey::DeleteChatUser,
        LangKey::DeleteChat,
        LangKey::LeaveChannel,
        LangKey::LeaveGroup,
        LangKey::OpenInNewWindow,
        LangKey::OpenInNewTab,
    ];

    /// Built-in English text.
    pub fn english(self) -> &'static str {
        match self {
            LangKey::NotifyMe => "Notify me",
            LangKey::MarkDone => "Mark done",
            LangKey::MarkNotDone => "Mark not done",
            LangKey::MarkAsRead => "Mark as read",
            LangKey::MarkAsUnread => "Mark as unread",
            LangKey::Archive => "Archive",
            LangKey::Unarchive => "Unarchive",
            LangKey::Mute => "Mute",
            LangKey::Unmute => "Unmute",
            LangKey::PinToTop => "Pin to top",
            LangKey::UnpinFromTop => "Unpin from top",
            LangKey::AddToFolder => "Add to folder",
            LangKey::Report => "Report",
            LangKey::Delete => "Delete",
            LangKey::DeleteChatUser => "Delete chat with user",
            LangKey::DeleteChat => "Delete chat",
            LangKey::LeaveChannel => "Leave channel",
            LangKey::LeaveGroup => "Leave group",
            LangKey::OpenInNewWindow => "Open in new window",
            LangKey::OpenInNewTab => "Open in new tab",
        }
    }
}

/// Key to display string lookup.
///
/// Implementations must be total over [`LangKey`]; missing translations fall
/// back to [`LangKey::english`] rather than fail.
pub trait Lang: Send + Sync {
    fn get(&self, key: LangKey) -> String;
}

/// The built-in English catalog.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishLang;

impl Lang for EnglishLang {
    fn get(&self, key: LangKey) -> String {
        key.english().to_string()
    }
}
