//! Store state and command application.

use std::collections::{HashMap, HashSet};

use parking_lot::{Mutex, RwLock};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use drift_actions::ChatCommands;
use drift_core::{Chat, FolderId, PeerId, User};

/// A store mutation command.
///
/// Queued by the command surface, applied by [`MemoryStore::apply_pending`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreCommand {
    TogglePinned { id: PeerId, folder_id: FolderId },
    ToggleSavedDialogPinned { id: PeerId },
    SetMuted { id: PeerId, muted: bool },
    ToggleUnread { id: PeerId },
    SetArchived { id: PeerId, archived: bool },
    SetDone { id: PeerId, done: bool },
    Snooze { id: PeerId },
    OpenInNewTab { id: PeerId, thread_id: Option<PeerId> },
}

/// A recorded request to open a chat in a new surface.
///
/// Window management lives outside the store; requests are recorded here for
/// the shell to consume.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenRequest {
    pub chat_id: PeerId,
    pub thread_id: Option<PeerId>,
}

/// In-memory chat state behind an eventually-consistent command queue.
pub struct MemoryStore {
    chats: RwLock<HashMap<PeerId, Chat>>,
    users: RwLock<HashMap<PeerId, User>>,
    pinned: RwLock<HashMap<FolderId, HashSet<PeerId>>>,
    saved_pinned: RwLock<HashSet<PeerId>>,
    muted: RwLock<HashSet<PeerId>>,
    snoozed: RwLock<HashSet<PeerId>>,
    open_requests: RwLock<Vec<OpenRequest>>,
    tx: UnboundedSender<StoreCommand>,
    rx: Mutex<UnboundedReceiver<StoreCommand>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            chats: RwLock::new(HashMap::new()),
            users: RwLock::new(HashMap::new()),
            pinned: RwLock::new(HashMap::new()),
            saved_pinned: RwLock::new(HashSet::new()),
            muted: RwLock::new(HashSet::new()),
            snoozed: RwLock::new(HashSet::new()),
            open_requests: RwLock::new(Vec::new()),
            tx,
            rx: Mutex::new(rx),
        }
    }

    /// Insert or replace a chat snapshot.
    pub fn insert_chat(&self, chat: Chat) {
        self.chats.write().insert(chat.id.clone(), chat);
    }

    /// Insert or replace a user snapshot.
    pub fn insert_user(&self, user: User) {
        self.users.write().insert(user.id.clone(), user);
    }

    /// Current chat snapshot, or `None` when absent.
    pub fn chat(&self, id: &PeerId) -> Option<Chat> {
        self.chats.read().get(id).cloned()
    }

    /// Current user snapshot, or `None` when absent.
    pub fn user(&self, id: &PeerId) -> Option<User> {
        self.users.read().get(id).cloned()
    }

    /// Whether the chat is pinned within the folder.
    pub fn is_pinned(&self, id: &PeerId, folder_id: FolderId) -> bool {
        self.pinned
            .read()
            .get(&folder_id)
            .is_some_and(|set| set.contains(id))
    }

    /// Whether the saved dialog is pinned.
    pub fn is_saved_dialog_pinned(&self, id: &PeerId) -> bool {
        self.saved_pinned.read().contains(id)
    }

    /// Whether the chat is muted.
    pub fn is_muted(&self, id: &PeerId) -> bool {
        self.muted.read().contains(id)
    }

    /// Whether the chat is snoozed.
    pub fn is_snoozed(&self, id: &PeerId) -> bool {
        self.snoozed.read().contains(id)
    }

    /// Open requests recorded so far, oldest first.
    pub fn open_requests(&self) -> Vec<OpenRequest> {
        self.open_requests.read().clone()
    }

    /// Drain and apply queued commands. Returns how many were applied.
    pub fn apply_pending(&self) -> usize {
        let mut rx = self.rx.lock();
        let mut applied = 0;
        while let Ok(cmd) = rx.try_recv() {
            self.apply(cmd);
            applied += 1;
        }
        applied
    }

    fn apply(&self, cmd: StoreCommand) {
        tracing::debug!(?cmd, "applying store command");
        match cmd {
            StoreCommand::TogglePinned { id, folder_id } => {
                let mut pinned = self.pinned.write();
                let set = pinned.entry(folder_id).or_default();
                if !set.remove(&id) {
                    set.insert(id);
                }
            }
            StoreCommand::ToggleSavedDialogPinned { id } => {
                let mut pinned = self.saved_pinned.write();
                if !pinned.remove(&id) {
                    pinned.insert(id);
                }
            }
            StoreCommand::SetMuted { id, muted } => {
                let mut set = self.muted.write();
                if muted {
                    set.insert(id);
                } else {
                    set.remove(&id);
                }
            }
            StoreCommand::ToggleUnread { id } => {
                let mut chats = self.chats.write();
                if let Some(chat) = chats.get_mut(&id) {
                    if chat.has_unread() {
                        chat.unread_count = 0;
                        chat.has_unread_mark = false;
                    } else {
                        chat.has_unread_mark = true;
                    }
                }
            }
            StoreCommand::SetArchived { id, archived } => {
                if let Some(chat) = self.chats.write().get_mut(&id) {
                    chat.is_archived = archived;
                }
            }
            StoreCommand::SetDone { id, done } => {
                if let Some(chat) = self.chats.write().get_mut(&id) {
                    chat.is_done = done;
                }
            }
            StoreCommand::Snooze { id } => {
                self.snoozed.write().insert(id);
            }
            StoreCommand::OpenInNewTab { id, thread_id } => {
                self.open_requests.write().push(OpenRequest {
                    chat_id: id,
                    thread_id,
                });
            }
        }
    }

    fn enqueue(&self, cmd: StoreCommand) {
        if self.tx.send(cmd).is_err() {
            tracing::warn!("store command queue closed; dropping command");
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatCommands for MemoryStore {
    fn toggle_chat_pinned(&self, id: &PeerId, folder_id: FolderId) {
        self.enqueue(StoreCommand::TogglePinned {
            id: id.clone(),
            folder_id,
        });
    }

    fn toggle_saved_dialog_pinned(&self, id: &PeerId) {
        self.enqueue(StoreCommand::ToggleSavedDialogPinned { id: id.clone() });
    }

    fn set_chat_muted(&self, id: &PeerId, muted: bool) {
        self.enqueue(StoreCommand::SetMuted {
            id: id.clone(),
            muted,
        });
    }

    fn toggle_chat_unread(&self, id: &PeerId) {
        self.enqueue(StoreCommand::ToggleUnread { id: id.clone() });
    }

    fn set_chat_archived(&self, id: &PeerId, archived: bool) {
        self.enqueue(StoreCommand::SetArchived {
            id: id.clone(),
            archived,
        });
    }

    fn set_chat_done(&self, id: &PeerId, done: bool) {
        self.enqueue(StoreCommand::SetDone {
            id: id.clone(),
            done,
        });
    }

    fn snooze_chat(&self, id: &PeerId) {
        self.enqueue(StoreCommand::Snooze { id: id.clone() });
    }

    fn open_chat_in_new_tab(&self, id: &PeerId, thread_id: Option<PeerId>) {
        self.enqueue(StoreCommand::OpenInNewTab {
            id: id.clone(),
            thread_id,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use drift_actions::{ActionResolver, ActionRole, MenuFlags, MenuRequest, ViewContext};
    use drift_core::{ChatKind, EnglishLang, Environment};

    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    }

    fn store_with_chat(chat: Chat) -> Arc<MemoryStore> {
        let store = Arc::new(MemoryStore::new());
        store.insert_chat(chat);
        store
    }

    fn resolver(store: &Arc<MemoryStore>) -> ActionResolver {
        ActionResolver::new(
            store.clone(),
            Arc::new(EnglishLang),
            Environment::default(),
        )
    }

    #[test]
    fn test_commands_apply_only_on_drain() {
        init_tracing();
        let store = MemoryStore::new();
        let id = PeerId::from("-5");

        store.toggle_chat_pinned(&id, FolderId::MAIN);
        assert!(!store.is_pinned(&id, FolderId::MAIN));

        assert_eq!(store.apply_pending(), 1);
        assert!(store.is_pinned(&id, FolderId::MAIN));

        store.toggle_chat_pinned(&id, FolderId::MAIN);
        store.apply_pending();
        assert!(!store.is_pinned(&id, FolderId::MAIN));
    }

    #[test]
    fn test_toggle_unread_round_trip() {
        init_tracing();
        let mut chat = Chat::new("-5", ChatKind::Group, "Team");
        chat.unread_count = 3;
        let store = store_with_chat(chat);
        let id = PeerId::from("-5");

        store.toggle_chat_unread(&id);
        store.apply_pending();
        let chat = store.chat(&id).unwrap();
        assert!(!chat.has_unread());
        assert_eq!(chat.unread_count, 0);

        store.toggle_chat_unread(&id);
        store.apply_pending();
        assert!(store.chat(&id).unwrap().has_unread_mark);
    }

    #[test]
    fn test_mute_and_snooze_state() {
        init_tracing();
        let store = MemoryStore::new();
        let id = PeerId::from("-5");

        store.set_chat_muted(&id, true);
        store.snooze_chat(&id);
        assert_eq!(store.apply_pending(), 2);
        assert!(store.is_muted(&id));
        assert!(store.is_snoozed(&id));

        store.set_chat_muted(&id, false);
        store.apply_pending();
        assert!(!store.is_muted(&id));
    }

    #[test]
    fn test_mark_read_through_the_menu() {
        init_tracing();
        let mut chat = Chat::new("-5", ChatKind::Group, "Team");
        chat.unread_count = 2;
        let store = store_with_chat(chat);
        let resolver = resolver(&store);

        let snapshot = store.chat(&PeerId::from("-5")).unwrap();
        let req = MenuRequest {
            chat: Some(&snapshot),
            flags: MenuFlags {
                folder_id: Some(FolderId::MAIN),
                ..MenuFlags::default()
            },
            ..MenuRequest::default()
        };
        let list = resolver.resolve(&req).unwrap();
        let mark_read = list
            .iter()
            .find(|action| action.role == ActionRole::MarkAsRead)
            .unwrap();
        mark_read.handler.invoke();
        store.apply_pending();

        // The next snapshot resolves to the opposite toggle.
        let snapshot = store.chat(&PeerId::from("-5")).unwrap();
        assert!(!snapshot.has_unread());
        let req = MenuRequest {
            chat: Some(&snapshot),
            flags: MenuFlags {
                folder_id: Some(FolderId::MAIN),
                ..MenuFlags::default()
            },
            ..MenuRequest::default()
        };
        let list = resolver.resolve(&req).unwrap();
        assert!(list.iter().any(|action| action.role == ActionRole::MarkAsUnread));
        assert!(list.iter().all(|action| action.role != ActionRole::MarkAsRead));
    }

    #[test]
    fn test_saved_dialog_open_records_owner() {
        init_tracing();
        let chat = Chat::new("123", ChatKind::Direct, "Ada");
        let store = store_with_chat(chat);
        let resolver = resolver(&store);

        let snapshot = store.chat(&PeerId::from("123")).unwrap();
        let req = MenuRequest {
            chat: Some(&snapshot),
            context: ViewContext::SavedDialog,
            flags: MenuFlags {
                current_user_id: Some(PeerId::from("42")),
                ..MenuFlags::default()
            },
            ..MenuRequest::default()
        };
        let list = resolver.resolve(&req).unwrap();
        list.iter()
            .find(|action| action.role == ActionRole::OpenInNewSurface)
            .unwrap()
            .handler
            .invoke();
        store.apply_pending();

        assert_eq!(
            store.open_requests(),
            vec![OpenRequest {
                chat_id: PeerId::from("42"),
                thread_id: Some(PeerId::from("123")),
            }]
        );
    }

    #[test]
    fn test_archive_through_the_menu() {
        init_tracing();
        let chat = Chat::new("-5", ChatKind::Group, "Team");
        let store = store_with_chat(chat);
        let resolver = resolver(&store);

        let snapshot = store.chat(&PeerId::from("-5")).unwrap();
        let req = MenuRequest {
            chat: Some(&snapshot),
            ..MenuRequest::default()
        };
        let list = resolver.resolve(&req).unwrap();
        list.iter()
            .find(|action| action.role == ActionRole::Archive)
            .unwrap()
            .handler
            .invoke();
        store.apply_pending();

        assert!(store.chat(&PeerId::from("-5")).unwrap().is_archived);
    }
}
