//! Channel event handlers.

use serenity::all::{Context, GuildChannel, Message};

use crate::{service::ticket::TicketService, state::AppState};

/// Handles the channel_delete event when a channel is deleted from the guild.
///
/// A deleted ticket channel takes its ticket with it: the record is dropped and any
/// pending deletion cancelled. Fires for deletions made by the bot as well, in which
/// case there is nothing left to drop.
///
/// # Arguments
/// - `state` - Application state holding the ticket store
/// - `_ctx` - Discord context (unused, required by event handler signature)
/// - `channel` - The deleted guild channel from Discord
/// - `_messages` - Messages that were in the channel if available (unused)
pub async fn handle_channel_delete(
    state: &AppState,
    _ctx: Context,
    channel: GuildChannel,
    _messages: Option<Vec<Message>>,
) {
    if channel.guild_id != state.guild_id {
        return;
    }

    TicketService::new(state).forget_channel(channel.id).await;
}
