use serenity::all::{Context, EventHandler, GuildChannel, Interaction, Member, Message, Ready};
use serenity::async_trait;

use crate::state::AppState;

pub mod channel;
pub mod interaction;
pub mod member;
pub mod message;
pub mod ready;

/// Discord bot event handler
pub struct Handler {
    pub state: AppState,
}

impl Handler {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(&self.state, ctx, ready).await;
    }

    /// Called for slash commands, component clicks and modal submissions
    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        interaction::handle_interaction_create(&self.state, ctx, interaction).await;
    }

    /// Called when a member joins a guild
    async fn guild_member_addition(&self, ctx: Context, new_member: Member) {
        member::handle_guild_member_addition(&self.state, ctx, new_member).await;
    }

    /// Called when a channel is deleted from a guild
    async fn channel_delete(
        &self,
        ctx: Context,
        channel: GuildChannel,
        messages: Option<Vec<Message>>,
    ) {
        channel::handle_channel_delete(&self.state, ctx, channel, messages).await;
    }

    /// Called when a message is sent in a channel
    async fn message(&self, ctx: Context, message: Message) {
        message::handle_message(&self.state, ctx, message).await;
    }
}
