//! Core types for the Drift chat client.
//!
//! This crate contains shared data structures used across all Drift crates:
//! - Peer identities and chat/user snapshots
//! - The localization surface
//! - Environment and feature configuration
//! - Error types

mod chat;
mod config;
mod error;
mod lang;
mod peer;
mod user;

pub use chat::{Chat, ChatKind};
pub use config::{
    config_dir, config_path, ensure_config_dir, AppConfig, Environment, FeatureFlags, Platform,
    SERVICE_NOTIFICATIONS_USER_ID,
};
pub use error::ConfigError;
pub use lang::{EnglishLang, Lang, LangKey};
pub use peer::{FolderId, PeerId};
pub use user::User;
