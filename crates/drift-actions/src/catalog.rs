//! The action catalog.
//!
//! One builder per catalog entry. Builders derive titles, pick icons, and
//! bind handlers, but never run them; gates that depend on the surrounding
//! list (self-chat, service account, folder scope, inbox) live in the
//! resolver's assembly tables.

use std::sync::Arc;

use drift_core::{Chat, Environment, Lang, LangKey, PeerId, Platform, User};

use crate::action::{Action, ActionRole, Handler, IconId};
use crate::commands::{ChatCommands, MenuEvent, Tracker};
use crate::context::{MenuCallbacks, MenuFlags, ViewContext};

/// Per-invocation view over the resolver's collaborators and the caller's
/// inputs.
pub(crate) struct ResolveCx<'a> {
    pub chat: &'a Chat,
    pub user: Option<&'a User>,
    pub context: ViewContext,
    pub flags: &'a MenuFlags,
    pub callbacks: &'a MenuCallbacks,
    pub commands: Arc<dyn ChatCommands>,
    pub lang: &'a dyn Lang,
    pub tracker: Option<Arc<dyn Tracker>>,
    pub environment: Environment,
}

impl ResolveCx<'_> {
    pub fn is_self(&self) -> bool {
        self.user.is_some_and(|user| user.is_self)
    }

    pub fn is_service_notifications(&self) -> bool {
        self.user.is_some_and(User::is_service_notifications)
    }

    pub fn in_folder(&self) -> bool {
        self.flags.folder_id.is_some()
    }

    fn is_saved_dialog(&self) -> bool {
        self.context == ViewContext::SavedDialog
    }

    fn tr(&self, key: LangKey) -> String {
        self.lang.get(key)
    }

    fn commands(&self) -> Arc<dyn ChatCommands> {
        Arc::clone(&self.commands)
    }

    fn tracker(&self) -> Option<Arc<dyn Tracker>> {
        self.tracker.clone()
    }

    fn chat_id(&self) -> PeerId {
        self.chat.id.clone()
    }
}

fn emit(tracker: &Option<Arc<dyn Tracker>>, event: MenuEvent) {
    if let Some(tracker) = tracker {
        tracker.track(event);
    }
}

/// Snooze (notify me) entry.
pub(crate) fn snooze(cx: &ResolveCx) -> Option<Action> {
    let commands = cx.commands();
    let tracker = cx.tracker();
    let id = cx.chat_id();
    Some(Action {
        role: ActionRole::Snooze,
        title: cx.tr(LangKey::NotifyMe),
        icon: IconId::Schedule,
        destructive: false,
        handler: Handler::new(move || {
            commands.snooze_chat(&id);
            emit(&tracker, MenuEvent::SnoozeChat);
        }),
    })
}

/// Done / not-done toggle.
pub(crate) fn done(cx: &ResolveCx) -> Option<Action> {
    let commands = cx.commands();
    let tracker = cx.tracker();
    let id = cx.chat_id();
    let is_done = cx.chat.is_done;
    let (title, event) = if is_done {
        (cx.tr(LangKey::MarkNotDone), MenuEvent::MarkChatNotDone)
    } else {
        (cx.tr(LangKey::MarkDone), MenuEvent::MarkChatDone)
    };
    Some(Action {
        role: ActionRole::Done,
        title,
        icon: IconId::Select,
        destructive: false,
        handler: Handler::new(move || {
            commands.set_chat_done(&id, !is_done);
            emit(&tracker, event);
        }),
    })
}

/// Mark as read; only for chats with unread state.
pub(crate) fn mark_as_read(cx: &ResolveCx) -> Option<Action> {
    if !cx.chat.has_unread() {
        return None;
    }
    let commands = cx.commands();
    let tracker = cx.tracker();
    let id = cx.chat_id();
    Some(Action {
        role: ActionRole::MarkAsRead,
        title: cx.tr(LangKey::MarkAsRead),
        icon: IconId::ReadChats,
        destructive: false,
        handler: Handler::new(move || {
            commands.toggle_chat_unread(&id);
            emit(&tracker, MenuEvent::MarkChatRead);
        }),
    })
}

/// Mark as unread; never for forums or chats that already have unread state.
pub(crate) fn mark_as_unread(cx: &ResolveCx) -> Option<Action> {
    if cx.chat.has_unread() || cx.chat.kind.is_forum() {
        return None;
    }
    let commands = cx.commands();
    let tracker = cx.tracker();
    let id = cx.chat_id();
    Some(Action {
        role: ActionRole::MarkAsUnread,
        title: cx.tr(LangKey::MarkAsUnread),
        icon: IconId::Unread,
        destructive: false,
        handler: Handler::new(move || {
            commands.toggle_chat_unread(&id);
            emit(&tracker, MenuEvent::MarkChatUnread);
        }),
    })
}

/// Archive / unarchive toggle.
pub(crate) fn archive(cx: &ResolveCx) -> Option<Action> {
    let commands = cx.commands();
    let id = cx.chat_id();
    let archived = cx.chat.is_archived;
    let (title, icon) = if archived {
        (cx.tr(LangKey::Unarchive), IconId::Unarchive)
    } else {
        (cx.tr(LangKey::Archive), IconId::Archive)
    };
    Some(Action {
        role: ActionRole::Archive,
        title,
        icon,
        destructive: false,
        handler: Handler::new(move || commands.set_chat_archived(&id, !archived)),
    })
}

/// Mute / unmute toggle.
///
/// Unmuting is an immediate command. Muting defers to the caller's duration
/// chooser, so its title carries a trailing ellipsis.
pub(crate) fn mute(cx: &ResolveCx) -> Option<Action> {
    if cx.flags.is_muted {
        let commands = cx.commands();
        let id = cx.chat_id();
        Some(Action {
            role: ActionRole::Mute,
            title: cx.tr(LangKey::Unmute),
            icon: IconId::Unmute,
            destructive: false,
            handler: Handler::new(move || commands.set_chat_muted(&id, false)),
        })
    } else {
        Some(Action {
            role: ActionRole::Mute,
            title: format!("{}...", cx.tr(LangKey::Mute)),
            icon: IconId::Mute,
            destructive: false,
            handler: cx.callbacks.on_mute.clone().unwrap_or_else(Handler::noop),
        })
    }
}

/// Pin / unpin toggle.
///
/// Outside the saved dialog the pin command needs a folder scope; a missing
/// folder id is a caller-contract violation, and the handler drops the
/// toggle rather than send an invalid command.
pub(crate) fn pin(cx: &ResolveCx) -> Option<Action> {
    let commands = cx.commands();
    let id = cx.chat_id();
    let handler = if cx.is_saved_dialog() {
        Handler::new(move || commands.toggle_saved_dialog_pinned(&id))
    } else {
        let folder_id = cx.flags.folder_id;
        Handler::new(move || match folder_id {
            Some(folder_id) => commands.toggle_chat_pinned(&id, folder_id),
            None => {
                debug_assert!(false, "pin toggle without a folder id outside the saved dialog");
                tracing::warn!(chat = %id, "dropping pin toggle: no folder id");
            }
        })
    };
    let (title, icon) = if cx.flags.is_pinned {
        (cx.tr(LangKey::UnpinFromTop), IconId::Unpin)
    } else {
        (cx.tr(LangKey::PinToTop), IconId::Pin)
    };
    Some(Action {
        role: ActionRole::Pin,
        title,
        icon,
        destructive: false,
        handler,
    })
}

/// Open the chat in a separate window or tab, when the host supports it.
pub(crate) fn open_in_new_surface(cx: &ResolveCx) -> Option<Action> {
    if !cx.environment.open_in_new_tab {
        return None;
    }
    let title = match cx.environment.platform {
        Platform::Desktop => cx.tr(LangKey::OpenInNewWindow),
        Platform::Browser => cx.tr(LangKey::OpenInNewTab),
    };
    let commands = cx.commands();
    let id = cx.chat_id();
    let handler = if cx.is_saved_dialog() {
        // Saved dialogs open the owning user's chat with this dialog as the
        // thread.
        let owner = cx.flags.current_user_id.clone();
        Handler::new(move || match &owner {
            Some(owner) => commands.open_chat_in_new_tab(owner, Some(id.clone())),
            None => {
                debug_assert!(false, "saved dialog opened without the owning user id");
                tracing::warn!(chat = %id, "dropping open request: no current user id");
            }
        })
    } else {
        Handler::new(move || commands.open_chat_in_new_tab(&id, None))
    };
    Some(Action {
        role: ActionRole::OpenInNewSurface,
        title,
        icon: IconId::OpenInNewTab,
        destructive: false,
        handler,
    })
}

/// Folder assignment, for viewers that may change folders.
pub(crate) fn add_to_folder(cx: &ResolveCx) -> Option<Action> {
    if !cx.flags.can_change_folder {
        return None;
    }
    Some(Action {
        role: ActionRole::AddToFolder,
        title: cx.tr(LangKey::AddToFolder),
        icon: IconId::Folder,
        destructive: false,
        handler: cx
            .callbacks
            .on_folder_change
            .clone()
            .unwrap_or_else(Handler::noop),
    })
}

/// Report, for channels, groups, and other users, when the caller wired a
/// report flow.
pub(crate) fn report(cx: &ResolveCx) -> Option<Action> {
    let handler = cx.callbacks.on_report.clone()?;
    let applies = cx.chat.kind.is_channel()
        || cx.chat.kind.is_group_like()
        || cx.user.is_some_and(|user| !user.is_self);
    if !applies {
        return None;
    }
    Some(Action {
        role: ActionRole::Report,
        title: cx.tr(LangKey::Report),
        icon: IconId::Flag,
        destructive: false,
        handler,
    })
}

/// Delete or leave, with the title derived by [`delete_title`].
pub(crate) fn delete(cx: &ResolveCx) -> Option<Action> {
    Some(Action {
        role: ActionRole::Delete,
        title: delete_title(cx.chat, cx.context, cx.lang),
        icon: IconId::Delete,
        destructive: true,
        handler: cx.callbacks.on_delete.clone().unwrap_or_else(Handler::noop),
    })
}

/// Title for the delete/leave entry.
///
/// First matching rule wins; the order is load-bearing. A user-kind id reads
/// "Delete chat with user" even when other capability flags would suggest
/// leave semantics.
pub(crate) fn delete_title(chat: &Chat, context: ViewContext, lang: &dyn Lang) -> String {
    let rules: [(fn(&Chat, ViewContext) -> bool, LangKey); 4] = [
        (|_, context| context == ViewContext::SavedDialog, LangKey::Delete),
        (|chat, _| chat.id.is_user(), LangKey::DeleteChatUser),
        (|chat, _| chat.can_delete_outright, LangKey::DeleteChat),
        (|chat, _| chat.kind.is_channel(), LangKey::LeaveChannel),
    ];
    for (applies, key) in rules {
        if applies(chat, context) {
            return lang.get(key);
        }
    }
    lang.get(LangKey::LeaveGroup)
}

#[cfg(test)]
mod tests {
    use super::*;
    use drift_core::{ChatKind, EnglishLang};

    fn chat(id: &str, kind: ChatKind) -> Chat {
        Chat::new(id, kind, "Chat")
    }

    #[test]
    fn test_delete_title_saved_dialog_is_generic() {
        let mut target = chat("42", ChatKind::Direct);
        target.can_delete_outright = true;
        assert_eq!(
            delete_title(&target, ViewContext::SavedDialog, &EnglishLang),
            "Delete"
        );
    }

    #[test]
    fn test_delete_title_user_kind_dominates() {
        // A user-kind id wins over every later rule.
        let mut target = chat("42", ChatKind::Channel);
        target.can_delete_outright = true;
        assert_eq!(
            delete_title(&target, ViewContext::ChatList, &EnglishLang),
            "Delete chat with user"
        );
    }

    #[test]
    fn test_delete_title_outright_capability() {
        let mut target = chat("-100", ChatKind::Group);
        target.can_delete_outright = true;
        assert_eq!(
            delete_title(&target, ViewContext::ChatList, &EnglishLang),
            "Delete chat"
        );
    }

    #[test]
    fn test_delete_title_leave_channel() {
        assert_eq!(
            delete_title(&chat("-200", ChatKind::Channel), ViewContext::Folder, &EnglishLang),
            "Leave channel"
        );
    }

    #[test]
    fn test_delete_title_leave_group_fallback() {
        assert_eq!(
            delete_title(&chat("-300", ChatKind::Group), ViewContext::ChatList, &EnglishLang),
            "Leave group"
        );
        assert_eq!(
            delete_title(&chat("-400", ChatKind::Forum), ViewContext::ChatList, &EnglishLang),
            "Leave group"
        );
    }
}
