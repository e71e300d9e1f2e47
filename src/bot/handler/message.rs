use serenity::all::{Context, Message};

use crate::{controller::prefix, state::AppState};

/// Handles the message event, answering prefix commands.
///
/// # Arguments
/// - `state` - Application state
/// - `ctx` - Discord context used to reply
/// - `message` - The received message
pub async fn handle_message(state: &AppState, ctx: Context, message: Message) {
    if let Err(e) = prefix::handle(&ctx, state, &message).await {
        tracing::error!(
            "Failed to answer message {} in {}: {}",
            message.id,
            message.channel_id,
            e
        );
    }
}
