//! The action catalog resolver.
//!
//! [`ActionResolver::resolve`] computes the ordered action list for one menu
//! invocation. Collaborators (store commands, localization, analytics) are
//! injected at construction; resolution performs no I/O and never invokes
//! the handlers it binds.

use std::collections::HashSet;
use std::sync::Arc;

use drift_core::{Environment, FeatureFlags, Lang};

use crate::action::{Action, ActionList};
use crate::catalog::{self, ResolveCx};
use crate::commands::{ChatCommands, Tracker};
use crate::context::{MenuRequest, ViewContext};

/// Computes ordered, deduplicated action lists from entity snapshots.
pub struct ActionResolver {
    commands: Arc<dyn ChatCommands>,
    lang: Arc<dyn Lang>,
    tracker: Option<Arc<dyn Tracker>>,
    environment: Environment,
    features: FeatureFlags,
}

impl ActionResolver {
    /// Create a resolver over the given command and localization surfaces.
    pub fn new(
        commands: Arc<dyn ChatCommands>,
        lang: Arc<dyn Lang>,
        environment: Environment,
    ) -> Self {
        Self {
            commands,
            lang,
            tracker: None,
            environment,
            features: FeatureFlags::default(),
        }
    }

    /// Attach an analytics sink for the handlers that report usage.
    pub fn with_tracker(mut self, tracker: Arc<dyn Tracker>) -> Self {
        self.tracker = Some(tracker);
        self
    }

    /// Override the default feature switches.
    pub fn with_features(mut self, features: FeatureFlags) -> Self {
        self.features = features;
        self
    }

    /// Resolve the action list for one menu invocation.
    ///
    /// Returns `None` when the request carries no chat snapshot: the caller
    /// renders no menu. Handlers are bound but never run here.
    pub fn resolve(&self, req: &MenuRequest) -> Option<ActionList> {
        let chat = req.chat?;
        let cx = ResolveCx {
            chat,
            user: req.user,
            context: req.context,
            flags: &req.flags,
            callbacks: &req.callbacks,
            commands: Arc::clone(&self.commands),
            lang: &*self.lang,
            tracker: self.tracker.clone(),
            environment: self.environment,
        };

        let slots = match req.context {
            ViewContext::SearchResults => vec![
                catalog::open_in_new_surface(&cx),
                catalog::pin(&cx),
                catalog::add_to_folder(&cx),
                catalog::mute(&cx),
            ],
            ViewContext::SavedDialog => vec![
                catalog::open_in_new_surface(&cx),
                catalog::pin(&cx),
                catalog::delete(&cx),
            ],
            ViewContext::ChatList | ViewContext::Folder => self.chat_list_slots(&cx),
        };

        let actions: ActionList = slots.into_iter().flatten().collect();
        debug_assert!(
            roles_are_distinct(&actions),
            "duplicate semantic role in action list"
        );
        Some(actions)
    }

    /// Assembly table for chat lists and folders.
    ///
    /// Suppressed slots collapse; the relative order never changes.
    fn chat_list_slots(&self, cx: &ResolveCx) -> Vec<Option<Action>> {
        let is_self = cx.is_self();
        let is_service = cx.is_service_notifications();
        let in_folder = cx.in_folder();
        let is_inbox = cx.flags.is_inbox;

        let done_applies = self.features.done && !is_self && !is_service && !in_folder;
        let archive_applies = !is_inbox && !is_self && !is_service && !in_folder;

        vec![
            self.features.snooze.then(|| catalog::snooze(cx)).flatten(),
            done_applies.then(|| catalog::done(cx)).flatten(),
            catalog::mark_as_read(cx),
            catalog::mark_as_unread(cx),
            archive_applies.then(|| catalog::archive(cx)).flatten(),
            (!is_self).then(|| catalog::mute(cx)).flatten(),
            (!is_inbox).then(|| catalog::pin(cx)).flatten(),
            catalog::open_in_new_surface(cx),
            catalog::add_to_folder(cx),
            catalog::report(cx),
            (!is_inbox).then(|| catalog::delete(cx)).flatten(),
        ]
    }
}

fn roles_are_distinct(actions: &[Action]) -> bool {
    let mut seen = HashSet::new();
    actions.iter().all(|action| seen.insert(action.role))
}
