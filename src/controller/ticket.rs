//! Ticket controllers: the panel, the intake flow and the buttons on ticket summaries.

use serenity::all::{
    CommandInteraction, ComponentInteraction, ComponentInteractionDataKind, Context,
    CreateAttachment, CreateInteractionResponse, CreateInteractionResponseMessage,
    EditInteractionResponse, ModalInteraction,
};

use super::{reply_ephemeral, required_modal_value, Responder};
use crate::{
    data::ticket::ClaimOutcome,
    error::AppError,
    model::ticket::{CreateTicketParams, Priority},
    service::ticket::{
        builder::{DESCRIPTION_FIELD, SUBJECT_FIELD},
        TicketService,
    },
    state::AppState,
};

/// Handles `/ticket panel`, posting the panel into the current channel.
pub async fn post_panel(
    ctx: &Context,
    state: &AppState,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let responder = Responder::Command(command);

    TicketService::new(state)
        .post_panel(command.channel_id, &responder.actor())
        .await?;

    reply_ephemeral(ctx, responder, "Ticket panel posted.").await
}

/// Handles the panel's open button by showing the category chooser.
pub async fn open_intake(
    ctx: &Context,
    state: &AppState,
    component: &ComponentInteraction,
) -> Result<(), AppError> {
    let row = TicketService::new(state)
        .open_intake(component.user.id)
        .await?;

    let message = CreateInteractionResponseMessage::new()
        .content("What do you need help with?")
        .components(vec![row])
        .ephemeral(true);

    Responder::Component(component)
        .respond(ctx, CreateInteractionResponse::Message(message))
        .await
}

/// Handles the category select menu by opening the creation modal.
pub async fn choose_category(
    ctx: &Context,
    state: &AppState,
    component: &ComponentInteraction,
) -> Result<(), AppError> {
    let category_id = match &component.data.kind {
        ComponentInteractionDataKind::StringSelect { values } => values.first(),
        _ => None,
    }
    .ok_or_else(|| AppError::InternalError("Category menu submitted without a value".to_string()))?;

    let modal = TicketService::new(state).creation_modal(category_id).await?;

    Responder::Component(component)
        .respond(ctx, CreateInteractionResponse::Modal(modal))
        .await
}

/// Handles the creation modal.
///
/// Creating the channel, posting the summary and the welcome text can take longer than
/// the response window, so the interaction is deferred first.
pub async fn submit_ticket(
    ctx: &Context,
    state: &AppState,
    modal: &ModalInteraction,
    category: String,
) -> Result<(), AppError> {
    let responder = Responder::Modal(modal);
    let params = CreateTicketParams {
        creator_id: modal.user.id,
        category,
        subject: required_modal_value(modal, SUBJECT_FIELD)?,
        description: required_modal_value(modal, DESCRIPTION_FIELD)?,
    };

    responder.defer_ephemeral(ctx).await?;

    let ticket = TicketService::new(state).submit_creation(params).await?;

    responder
        .edit(
            ctx,
            EditInteractionResponse::new().content(format!(
                "Your ticket has been created: <#{}>",
                ticket.channel_id
            )),
        )
        .await
}

pub async fn close(
    ctx: &Context,
    state: &AppState,
    component: &ComponentInteraction,
) -> Result<(), AppError> {
    let responder = Responder::Component(component);

    TicketService::new(state)
        .close(component.channel_id, &responder.actor())
        .await?;

    reply_ephemeral(ctx, responder, "Ticket closed.").await
}

pub async fn reopen(
    ctx: &Context,
    state: &AppState,
    component: &ComponentInteraction,
) -> Result<(), AppError> {
    let responder = Responder::Component(component);

    TicketService::new(state)
        .reopen(component.channel_id, &responder.actor())
        .await?;

    reply_ephemeral(ctx, responder, "Ticket reopened.").await
}

/// Handles the claim button. A fresh claim is announced in the channel.
pub async fn claim(
    ctx: &Context,
    state: &AppState,
    component: &ComponentInteraction,
) -> Result<(), AppError> {
    let responder = Responder::Component(component);
    let actor = responder.actor();

    match TicketService::new(state)
        .claim(component.channel_id, &actor)
        .await?
    {
        ClaimOutcome::Claimed(_) => {
            let message = CreateInteractionResponseMessage::new()
                .content(format!("🙋 <@{}> is now handling this ticket.", actor.user_id));
            responder
                .respond(ctx, CreateInteractionResponse::Message(message))
                .await
        }
        ClaimOutcome::AlreadyYours(_) => {
            reply_ephemeral(ctx, responder, "You are already handling this ticket.").await
        }
    }
}

pub async fn change_priority(
    ctx: &Context,
    state: &AppState,
    component: &ComponentInteraction,
    shown: Priority,
) -> Result<(), AppError> {
    let responder = Responder::Component(component);

    let ticket = TicketService::new(state)
        .change_priority(component.channel_id, &responder.actor(), shown)
        .await?;

    reply_ephemeral(
        ctx,
        responder,
        format!(
            "Priority set to {} {}.",
            ticket.priority.emoji(),
            ticket.priority.label()
        ),
    )
    .await
}

/// Handles the delete button. The notice is public so everyone in the channel sees it.
pub async fn delete(
    ctx: &Context,
    state: &AppState,
    component: &ComponentInteraction,
) -> Result<(), AppError> {
    let responder = Responder::Component(component);

    TicketService::new(state)
        .delete(component.channel_id, &responder.actor())
        .await?;

    let message = CreateInteractionResponseMessage::new().content(format!(
        "🗑️ This channel will be deleted in {} seconds.",
        state.deletions.delay().as_secs()
    ));

    responder
        .respond(ctx, CreateInteractionResponse::Message(message))
        .await
}

/// Handles the transcript button, sending the file to the requester as well.
pub async fn transcript(
    ctx: &Context,
    state: &AppState,
    component: &ComponentInteraction,
) -> Result<(), AppError> {
    let responder = Responder::Component(component);

    responder.defer_ephemeral(ctx).await?;

    let transcript = TicketService::new(state)
        .generate_transcript(component.channel_id, &responder.actor())
        .await?;

    let edit = EditInteractionResponse::new()
        .content(format!(
            "📄 Transcript with {} message(s).",
            transcript.message_count
        ))
        .new_attachment(CreateAttachment::bytes(
            transcript.html.into_bytes(),
            transcript.file_name,
        ));

    responder.edit(ctx, edit).await
}
