use serenity::all::{CommandInteraction, Context, CreateInteractionResponse, ModalInteraction};

use super::{modal_value, reply_ephemeral, Responder};
use crate::{
    error::AppError,
    model::embed::EmbedDraft,
    service::embed::{
        embed_modal, EmbedService, COLOR_FIELD, DESCRIPTION_FIELD, FOOTER_FIELD, IMAGE_FIELD,
        TITLE_FIELD,
    },
    state::AppState,
};

/// Handles `/embed` by opening the embed builder modal.
pub async fn open_builder(ctx: &Context, command: &CommandInteraction) -> Result<(), AppError> {
    Responder::Command(command)
        .respond(ctx, CreateInteractionResponse::Modal(embed_modal()))
        .await
}

/// Handles the embed builder modal, posting the embed in the channel it was opened in.
pub async fn submit(
    ctx: &Context,
    state: &AppState,
    modal: &ModalInteraction,
) -> Result<(), AppError> {
    let draft = EmbedDraft {
        title: modal_value(modal, TITLE_FIELD),
        description: modal_value(modal, DESCRIPTION_FIELD),
        color: modal_value(modal, COLOR_FIELD),
        image_url: modal_value(modal, IMAGE_FIELD),
        footer: modal_value(modal, FOOTER_FIELD),
    };

    EmbedService::new(state)
        .post(modal.channel_id, &draft)
        .await?;

    reply_ephemeral(ctx, Responder::Modal(modal), "Embed posted.").await
}
