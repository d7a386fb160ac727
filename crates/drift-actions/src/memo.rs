//! Input-keyed memoization for resolved action lists.
//!
//! Menu components re-render on every store notification and diff rows by
//! reference. Handing back the same list for the same inputs keeps handler
//! identity stable across unrelated state changes.

use std::sync::Arc;

use parking_lot::Mutex;

use drift_core::{ChatKind, FolderId, PeerId};

use crate::action::ActionList;
use crate::context::{MenuRequest, ViewContext};
use crate::resolver::ActionResolver;

/// Fingerprint of every input that influences a resolved list.
///
/// Callbacks are not part of the key; a caller that swaps callbacks must
/// [`MemoizedResolver::invalidate`] the memo.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MenuKey {
    chat_id: PeerId,
    kind: ChatKind,
    unread_count: u32,
    has_unread_mark: bool,
    is_archived: bool,
    is_done: bool,
    can_delete_outright: bool,
    user: Option<(PeerId, bool)>,
    context: ViewContext,
    folder_id: Option<FolderId>,
    is_inbox: bool,
    is_pinned: bool,
    is_muted: bool,
    can_change_folder: bool,
    current_user_id: Option<PeerId>,
}

impl MenuKey {
    /// Key for a request; `None` when the request has no chat snapshot.
    pub fn for_request(req: &MenuRequest) -> Option<Self> {
        let chat = req.chat?;
        Some(Self {
            chat_id: chat.id.clone(),
            kind: chat.kind,
            unread_count: chat.unread_count,
            has_unread_mark: chat.has_unread_mark,
            is_archived: chat.is_archived,
            is_done: chat.is_done,
            can_delete_outright: chat.can_delete_outright,
            user: req.user.map(|user| (user.id.clone(), user.is_self)),
            context: req.context,
            folder_id: req.flags.folder_id,
            is_inbox: req.flags.is_inbox,
            is_pinned: req.flags.is_pinned,
            is_muted: req.flags.is_muted,
            can_change_folder: req.flags.can_change_folder,
            current_user_id: req.flags.current_user_id.clone(),
        })
    }
}

/// Single-slot memo over an [`ActionResolver`].
///
/// One menu instance shows one list at a time, so a single slot suffices: a
/// repeat request returns the same `Arc`.
pub struct MemoizedResolver {
    resolver: ActionResolver,
    slot: Mutex<Option<(MenuKey, Arc<ActionList>)>>,
}

impl MemoizedResolver {
    /// Wrap a resolver.
    pub fn new(resolver: ActionResolver) -> Self {
        Self {
            resolver,
            slot: Mutex::new(None),
        }
    }

    /// Resolve through the memo.
    pub fn resolve(&self, req: &MenuRequest) -> Option<Arc<ActionList>> {
        let key = MenuKey::for_request(req)?;
        {
            let slot = self.slot.lock();
            if let Some((cached_key, list)) = slot.as_ref() {
                if *cached_key == key {
                    return Some(Arc::clone(list));
                }
            }
        }

        let list = Arc::new(self.resolver.resolve(req)?);
        *self.slot.lock() = Some((key, Arc::clone(&list)));
        Some(list)
    }

    /// Drop the cached list, forcing the next resolve to rebuild.
    pub fn invalidate(&self) {
        *self.slot.lock() = None;
    }

    /// The wrapped resolver.
    pub fn inner(&self) -> &ActionResolver {
        &self.resolver
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MockChatCommands;
    use crate::context::MenuFlags;
    use drift_core::{Chat, EnglishLang, Environment};

    fn memoized() -> MemoizedResolver {
        MemoizedResolver::new(ActionResolver::new(
            Arc::new(MockChatCommands::new()),
            Arc::new(EnglishLang),
            Environment::default(),
        ))
    }

    fn chat() -> Chat {
        Chat::new("-7", drift_core::ChatKind::Group, "Team")
    }

    #[test]
    fn test_identical_inputs_share_the_list() {
        let resolver = memoized();
        let chat = chat();
        let req = MenuRequest {
            chat: Some(&chat),
            ..MenuRequest::default()
        };

        let first = resolver.resolve(&req).unwrap();
        let second = resolver.resolve(&req).unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_changed_flag_recomputes() {
        let resolver = memoized();
        let chat = chat();
        let req = MenuRequest {
            chat: Some(&chat),
            ..MenuRequest::default()
        };
        let first = resolver.resolve(&req).unwrap();

        let req = MenuRequest {
            chat: Some(&chat),
            flags: MenuFlags {
                is_muted: true,
                ..MenuFlags::default()
            },
            ..MenuRequest::default()
        };
        let second = resolver.resolve(&req).unwrap();
        assert!(!Arc::ptr_eq(&first, &second));
        assert_ne!(*first, *second);
    }

    #[test]
    fn test_invalidate_rebuilds_with_equal_content() {
        let resolver = memoized();
        let chat = chat();
        let req = MenuRequest {
            chat: Some(&chat),
            ..MenuRequest::default()
        };

        let first = resolver.resolve(&req).unwrap();
        resolver.invalidate();
        let second = resolver.resolve(&req).unwrap();
        assert!(!Arc::ptr_eq(&first, &second));
        assert_eq!(*first, *second);
    }

    #[test]
    fn test_absent_chat_is_not_cached() {
        let resolver = memoized();
        let req = MenuRequest::default();
        assert!(resolver.resolve(&req).is_none());
    }
}
