use serenity::all::{
    ChannelId, ChannelType, CreateChannel, CreateMessage, EditChannel, EditMessage, GetMessages,
    GuildId, MessageId, RoleId, UserId,
};
use serenity::async_trait;
use serenity::http::Http;
use std::sync::Arc;

use super::{permission::member_overwrite, GuildMessenger, MemberAccess, TicketChannelRequest};
use crate::{error::AppError, model::transcript::TranscriptEntry};

/// `GuildMessenger` backed by Serenity's HTTP client.
///
/// Holds its own reference to the HTTP client so it can be built before the gateway
/// client connects.
pub struct SerenityMessenger {
    http: Arc<Http>,
    guild_id: GuildId,
}

impl SerenityMessenger {
    /// Creates a messenger operating on `guild_id`.
    ///
    /// # Arguments
    /// - `http` - Discord HTTP client authenticated with the bot token
    /// - `guild_id` - The guild the bot manages
    pub fn new(http: Arc<Http>, guild_id: GuildId) -> Self {
        Self { http, guild_id }
    }
}

#[async_trait]
impl GuildMessenger for SerenityMessenger {
    async fn create_ticket_channel(
        &self,
        request: TicketChannelRequest,
    ) -> Result<ChannelId, AppError> {
        let mut builder = CreateChannel::new(request.name)
            .kind(ChannelType::Text)
            .topic(request.topic)
            .permissions(request.overwrites);
        if let Some(parent_id) = request.parent_id {
            builder = builder.category(parent_id);
        }

        let channel = self.guild_id.create_channel(&self.http, builder).await?;

        Ok(channel.id)
    }

    async fn channel_name(&self, channel_id: ChannelId) -> Result<String, AppError> {
        Ok(channel_id.name(&self.http).await?)
    }

    async fn rename_channel(&self, channel_id: ChannelId, name: &str) -> Result<(), AppError> {
        channel_id
            .edit(&self.http, EditChannel::new().name(name))
            .await?;

        Ok(())
    }

    async fn set_member_access(
        &self,
        channel_id: ChannelId,
        user_id: UserId,
        access: MemberAccess,
    ) -> Result<(), AppError> {
        channel_id
            .create_permission(&self.http, member_overwrite(user_id, access))
            .await?;

        Ok(())
    }

    async fn delete_channel(&self, channel_id: ChannelId) -> Result<(), AppError> {
        channel_id.delete(&self.http).await?;

        Ok(())
    }

    async fn send_message(
        &self,
        channel_id: ChannelId,
        message: CreateMessage,
    ) -> Result<MessageId, AppError> {
        let message = channel_id.send_message(&self.http, message).await?;

        Ok(message.id)
    }

    async fn edit_message(
        &self,
        channel_id: ChannelId,
        message_id: MessageId,
        message: EditMessage,
    ) -> Result<(), AppError> {
        channel_id
            .edit_message(&self.http, message_id, message)
            .await?;

        Ok(())
    }

    async fn recent_messages(
        &self,
        channel_id: ChannelId,
        limit: u8,
    ) -> Result<Vec<TranscriptEntry>, AppError> {
        let messages = channel_id
            .messages(&self.http, GetMessages::new().limit(limit))
            .await?;

        // Discord returns newest first
        Ok(messages.iter().rev().map(TranscriptEntry::from).collect())
    }

    async fn direct_message(
        &self,
        user_id: UserId,
        message: CreateMessage,
    ) -> Result<(), AppError> {
        user_id.direct_message(&self.http, message).await?;

        Ok(())
    }

    async fn add_member_role(&self, user_id: UserId, role_id: RoleId) -> Result<(), AppError> {
        self.http
            .add_member_role(self.guild_id, user_id, role_id, Some("Autorole panel"))
            .await?;

        Ok(())
    }

    async fn remove_member_role(&self, user_id: UserId, role_id: RoleId) -> Result<(), AppError> {
        self.http
            .remove_member_role(self.guild_id, user_id, role_id, Some("Autorole panel"))
            .await?;

        Ok(())
    }
}
