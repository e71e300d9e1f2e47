//! Prefix commands typed as plain messages.

use chrono::Utc;
use serenity::all::{Context, CreateMessage, Message};

use crate::{
    error::AppError,
    model::prefix::{help_text, parse_prefix_command, PrefixCommand},
    service::social::social_embed,
    state::AppState,
};

/// Answers a message if it is a prefix command.
///
/// Messages from bots, from outside the managed guild and messages that are not a known
/// command are ignored. Rejections such as targeting oneself are answered in the
/// channel, there is no ephemeral reply for plain messages.
///
/// # Arguments
/// - `ctx` - Discord context used to reply
/// - `state` - Application state, for the configured prefix
/// - `message` - The received message
///
/// # Returns
/// - `Ok(())` - Message ignored or answered
/// - `Err(AppError::DiscordErr)` - The reply could not be sent
pub async fn handle(ctx: &Context, state: &AppState, message: &Message) -> Result<(), AppError> {
    if message.author.bot || message.guild_id != Some(state.guild_id) {
        return Ok(());
    }

    let prefix = state.settings.read(|settings| settings.prefix.clone()).await;
    let Some(command) = parse_prefix_command(&prefix, &message.content) else {
        return Ok(());
    };

    tracing::debug!(
        "Prefix command {:?} from {} in {}",
        command,
        message.author.id,
        message.channel_id
    );

    let reply = match command {
        PrefixCommand::Ping => {
            let latency = Utc::now()
                .signed_duration_since(message.timestamp.to_utc())
                .num_milliseconds();
            CreateMessage::new().content(format!("🏓 Pong! {}ms", latency.max(0)))
        }
        PrefixCommand::Help => CreateMessage::new().content(help_text(&prefix)),
        PrefixCommand::Social {
            action,
            target: None,
        } => CreateMessage::new().content(format!(
            "Mention who you want to {}: `{}{} @user`",
            action.name(),
            prefix,
            action.name()
        )),
        PrefixCommand::Social {
            action,
            target: Some(target),
        } => match social_embed(action, message.author.id, target, &mut rand::rng()) {
            Ok(embed) => CreateMessage::new()
                .content(format!("<@{}>", target))
                .embed(embed),
            Err(e) => CreateMessage::new().content(e.user_message(state.expose_error_details)),
        },
    };

    message
        .channel_id
        .send_message(&ctx.http, reply.reference_message(message))
        .await?;

    Ok(())
}
