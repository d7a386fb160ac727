//! Chat snapshot types.

use serde::{Deserialize, Serialize};

use crate::peer::PeerId;

/// The kind of a chat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatKind {
    /// One-on-one conversation with a user.
    Direct,
    /// Basic or super group.
    Group,
    /// Broadcast channel.
    Channel,
    /// Group organized into topic threads.
    Forum,
}

impl ChatKind {
    /// Whether this is a broadcast channel.
    pub fn is_channel(self) -> bool {
        matches!(self, ChatKind::Channel)
    }

    /// Whether this counts as a group. Forums are groups with topics.
    pub fn is_group_like(self) -> bool {
        matches!(self, ChatKind::Group | ChatKind::Forum)
    }

    /// Whether this is a forum.
    pub fn is_forum(self) -> bool {
        matches!(self, ChatKind::Forum)
    }
}

/// Immutable chat state snapshot.
///
/// Snapshots are read from the state store once per menu invocation. The
/// action engine only reads them; mutations go through store commands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chat {
    /// Peer id of the chat.
    pub id: PeerId,

    /// Chat kind.
    pub kind: ChatKind,

    /// Display title.
    pub title: String,

    /// Number of unread messages.
    #[serde(default)]
    pub unread_count: u32,

    /// Manual unread mark, set without any unread messages.
    #[serde(default)]
    pub has_unread_mark: bool,

    /// Whether the chat lives in the archive.
    #[serde(default)]
    pub is_archived: bool,

    /// Whether the chat is marked done.
    #[serde(default)]
    pub is_done: bool,

    /// Whether the viewer may delete the chat outright rather than leave it.
    #[serde(default)]
    pub can_delete_outright: bool,
}

impl Chat {
    /// Create a chat snapshot with all state flags cleared.
    pub fn new(id: impl Into<PeerId>, kind: ChatKind, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind,
            title: title.into(),
            unread_count: 0,
            has_unread_mark: false,
            is_archived: false,
            is_done: false,
            can_delete_outright: false,
        }
    }

    /// Whether the chat counts as unread for the read/unread action pair.
    pub fn has_unread(&self) -> bool {
        self.unread_count > 0 || self.has_unread_mark
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_predicates() {
        assert!(ChatKind::Channel.is_channel());
        assert!(!ChatKind::Group.is_channel());
        assert!(ChatKind::Group.is_group_like());
        assert!(ChatKind::Forum.is_group_like());
        assert!(!ChatKind::Direct.is_group_like());
        assert!(ChatKind::Forum.is_forum());
        assert!(!ChatKind::Group.is_forum());
    }

    #[test]
    fn test_has_unread() {
        let mut chat = Chat::new("-100", ChatKind::Group, "Team");
        assert!(!chat.has_unread());

        chat.unread_count = 3;
        assert!(chat.has_unread());

        chat.unread_count = 0;
        chat.has_unread_mark = true;
        assert!(chat.has_unread());
    }

    #[test]
    fn test_snapshot_round_trip() {
        let chat = Chat {
            unread_count: 2,
            can_delete_outright: true,
            ..Chat::new("-1007", ChatKind::Channel, "News")
        };
        let json = serde_json::to_string(&chat).unwrap();
        let back: Chat = serde_json::from_str(&json).unwrap();
        assert_eq!(back, chat);
    }
}
