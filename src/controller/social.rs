use serenity::all::{
    CommandInteraction, Context, CreateInteractionResponse, CreateInteractionResponseMessage,
};

use super::{user_option, Responder};
use crate::{error::AppError, model::social::SocialAction, service::social::social_embed};

/// Handles `/hug`, `/hit`, `/pat` and `/slap`.
pub async fn handle(
    ctx: &Context,
    command: &CommandInteraction,
    action: SocialAction,
) -> Result<(), AppError> {
    let options = command.data.options();
    let target = user_option(&options, "user")
        .ok_or_else(|| AppError::InternalError("Missing required option 'user'".to_string()))?;

    let embed = social_embed(action, command.user.id, target, &mut rand::rng())?;
    let message = CreateInteractionResponseMessage::new()
        .content(format!("<@{}>", target))
        .embed(embed);

    Responder::Command(command)
        .respond(ctx, CreateInteractionResponse::Message(message))
        .await
}
