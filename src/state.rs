//! Application state shared across all event handlers.
//!
//! This module defines the `AppState` struct which holds the stores, the messaging
//! collaborator and the handful of settings services need. The state is built once
//! during startup and cloned into the event handler, every field is cheap to clone.

use serenity::all::{GuildId, UserId};
use std::path::PathBuf;
use std::sync::Arc;

use crate::{
    data::{cooldown::CooldownGuard, settings::SettingsRepository, ticket::TicketRepository},
    scheduler::deletion::DeletionScheduler,
    service::discord::GuildMessenger,
};

/// Application state containing shared resources and dependencies.
///
/// All fields use cheap-to-clone types:
/// - The stores wrap their state in `Arc<RwLock<..>>`, clones share it
/// - `Arc<dyn GuildMessenger>` is a reference-counted pointer
/// - `DeletionScheduler` shares its pending task map
#[derive(Clone)]
pub struct AppState {
    /// Guild the bot manages. Its id doubles as the `@everyone` role id.
    pub guild_id: GuildId,

    /// Guild name as fetched at startup, substituted for `{server}` in ticket texts.
    pub guild_name: String,

    /// The bot's own user, granted access to every ticket channel.
    pub bot_user_id: UserId,

    /// Runtime-editable settings document.
    pub settings: SettingsRepository,

    /// Open and closed tickets of the current process.
    pub tickets: TicketRepository,

    /// Per-user ticket intake cooldowns.
    pub cooldowns: CooldownGuard,

    /// Pending ticket channel deletions.
    pub deletions: DeletionScheduler,

    /// Discord operations used by services.
    pub messenger: Arc<dyn GuildMessenger>,

    /// Directory transcripts are written to.
    pub transcript_dir: Arc<PathBuf>,

    /// Append underlying error text to generic failure replies.
    pub expose_error_details: bool,
}
