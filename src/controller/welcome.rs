use serenity::all::{CommandInteraction, Context};

use super::{channel_option, reply_ephemeral, require_admin, string_option, subcommand, Responder};
use crate::{error::AppError, service::welcome::WelcomeService, state::AppState};

/// Handles `/welcome channel|message|test`.
pub async fn handle(
    ctx: &Context,
    state: &AppState,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let responder = Responder::Command(command);
    require_admin(&responder.actor())?;

    let options = command.data.options();
    let (name, options) = subcommand(&options)?;
    let service = WelcomeService::new(state);

    let reply = match name {
        "channel" => {
            let channel_id = channel_option(options, "channel");
            service.set_channel(channel_id).await?;
            match channel_id {
                Some(channel_id) => format!("New members will be welcomed in <#{}>.", channel_id),
                None => "Welcome messages are disabled.".to_string(),
            }
        }
        "message" => {
            service
                .set_message(
                    string_option(options, "title").map(str::to_string),
                    string_option(options, "message").map(str::to_string),
                    string_option(options, "image").map(str::to_string),
                )
                .await?;
            "Welcome message updated, try it with `/welcome test`.".to_string()
        }
        "test" => {
            let member_count = ctx
                .cache
                .guild(state.guild_id)
                .map(|guild| guild.member_count);
            match service.greet(command.user.id, member_count).await? {
                Some(_) => "Welcome message sent.".to_string(),
                None => "Set a welcome channel first with `/welcome channel`.".to_string(),
            }
        }
        other => {
            return Err(AppError::InternalError(format!(
                "Unknown /welcome subcommand '{}'",
                other
            )))
        }
    };

    reply_ephemeral(ctx, responder, reply).await
}
