//! User snapshot types.

use serde::{Deserialize, Serialize};

use crate::config::SERVICE_NOTIFICATIONS_USER_ID;
use crate::peer::PeerId;

/// Immutable user state snapshot for the user paired with a direct chat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Peer id of the user.
    pub id: PeerId,

    /// Display name.
    pub first_name: String,

    /// Whether this user is the viewer (the saved-messages chat).
    #[serde(default)]
    pub is_self: bool,
}

impl User {
    /// Create a user snapshot.
    pub fn new(id: impl Into<PeerId>, first_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            first_name: first_name.into(),
            is_self: false,
        }
    }

    /// Whether this is the service notifications account.
    pub fn is_service_notifications(&self) -> bool {
        self.id.as_str() == SERVICE_NOTIFICATIONS_USER_ID
    }
}
