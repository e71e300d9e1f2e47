//! Discord messaging seam.
//!
//! Services never call the Discord API directly. They go through the `GuildMessenger`
//! trait, which covers the handful of channel, message and member operations the bot
//! needs. `SerenityMessenger` implements it over Serenity's HTTP client, tests use a
//! recording fake.

pub mod permission;
pub mod client;

#[cfg(test)]
pub mod fake;

use serenity::all::{
    ChannelId, CreateMessage, EditMessage, MessageId, PermissionOverwrite, RoleId, UserId,
};
use serenity::async_trait;

use crate::{error::AppError, model::transcript::TranscriptEntry};

pub use client::SerenityMessenger;

/// What a member may do inside a ticket channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberAccess {
    /// View, send and read history.
    Full,
    /// View and read history, sending denied.
    ReadOnly,
}

/// Everything needed to create a ticket channel.
#[derive(Debug, Clone)]
pub struct TicketChannelRequest {
    pub name: String,
    /// Channel category the ticket is created under, if configured.
    pub parent_id: Option<ChannelId>,
    pub topic: String,
    pub overwrites: Vec<PermissionOverwrite>,
}

/// Guild operations used by the bot's services.
///
/// Every method maps to one Discord API call. Implementations must not retry, callers
/// decide whether a failure is fatal for their operation or only logged.
#[async_trait]
pub trait GuildMessenger: Send + Sync {
    /// Creates a text channel in the bot's guild.
    ///
    /// # Returns
    /// - `Ok(ChannelId)` - Id of the new channel
    /// - `Err(AppError)` - Discord rejected the request
    async fn create_ticket_channel(
        &self,
        request: TicketChannelRequest,
    ) -> Result<ChannelId, AppError>;

    /// Current name of a channel.
    async fn channel_name(&self, channel_id: ChannelId) -> Result<String, AppError>;

    async fn rename_channel(&self, channel_id: ChannelId, name: &str) -> Result<(), AppError>;

    /// Replaces the member's permission overwrite on the channel.
    async fn set_member_access(
        &self,
        channel_id: ChannelId,
        user_id: UserId,
        access: MemberAccess,
    ) -> Result<(), AppError>;

    async fn delete_channel(&self, channel_id: ChannelId) -> Result<(), AppError>;

    async fn send_message(
        &self,
        channel_id: ChannelId,
        message: CreateMessage,
    ) -> Result<MessageId, AppError>;

    async fn edit_message(
        &self,
        channel_id: ChannelId,
        message_id: MessageId,
        message: EditMessage,
    ) -> Result<(), AppError>;

    /// Fetches up to `limit` of the most recent messages, oldest first.
    async fn recent_messages(
        &self,
        channel_id: ChannelId,
        limit: u8,
    ) -> Result<Vec<TranscriptEntry>, AppError>;

    /// Sends a direct message.
    ///
    /// Fails when the recipient does not accept DMs from guild members.
    async fn direct_message(&self, user_id: UserId, message: CreateMessage)
        -> Result<(), AppError>;

    async fn add_member_role(&self, user_id: UserId, role_id: RoleId) -> Result<(), AppError>;

    async fn remove_member_role(&self, user_id: UserId, role_id: RoleId) -> Result<(), AppError>;
}
