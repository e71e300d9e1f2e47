//! Interaction routing.
//!
//! Slash commands are routed by command name, buttons, select menus and modals by their
//! parsed custom id. Any error a controller returns is reported back to the user here.

use serenity::all::{
    CommandInteraction, ComponentInteraction, Context, Interaction, ModalInteraction,
};

use crate::{
    bot::command::{AUTOROLE, CATEGORY, EMBED, TICKET, WELCOME},
    controller::{
        self, autorole, category, embed, reply_error, require_guild, social, subcommand, ticket,
        ticket_config, welcome, Responder,
    },
    error::AppError,
    model::{action::ComponentAction, social::SocialAction},
    state::AppState,
};

/// Dispatches an interaction to its controller.
///
/// # Arguments
/// - `ctx` - Discord context used to respond
/// - `state` - Application state
/// - `interaction` - The received interaction
pub async fn route_interaction(ctx: &Context, state: &AppState, interaction: Interaction) {
    match &interaction {
        Interaction::Command(command) => {
            let responder = Responder::Command(command);
            if let Err(e) = route_command(ctx, state, command).await {
                reply_error(ctx, state, responder, e).await;
            }
        }
        Interaction::Component(component) => {
            let responder = Responder::Component(component);
            if let Err(e) = route_component(ctx, state, component).await {
                reply_error(ctx, state, responder, e).await;
            }
        }
        Interaction::Modal(modal) => {
            let responder = Responder::Modal(modal);
            if let Err(e) = route_modal(ctx, state, modal).await {
                reply_error(ctx, state, responder, e).await;
            }
        }
        other => {
            tracing::debug!("Ignoring interaction of kind {:?}", other.kind());
        }
    }
}

async fn route_command(
    ctx: &Context,
    state: &AppState,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    require_guild(state, Responder::Command(command))?;

    match command.data.name.as_str() {
        TICKET => {
            let options = command.data.options();
            match subcommand(&options)? {
                ("panel", _) => ticket::post_panel(ctx, state, command).await,
                ("config", options) => ticket_config::configure(ctx, state, command, options).await,
                ("text", options) => ticket_config::set_text(ctx, state, command, options).await,
                (other, _) => Err(AppError::InternalError(format!(
                    "Unknown /ticket subcommand '{}'",
                    other
                ))),
            }
        }
        CATEGORY => category::handle(ctx, state, command).await,
        AUTOROLE => autorole::handle(ctx, state, command).await,
        WELCOME => welcome::handle(ctx, state, command).await,
        EMBED => embed::open_builder(ctx, command).await,
        name => match name.parse::<SocialAction>() {
            Ok(action) => social::handle(ctx, command, action).await,
            Err(()) => {
                tracing::warn!("Received unknown command /{}", name);
                controller::reply_ephemeral(
                    ctx,
                    Responder::Command(command),
                    "This command is no longer available.",
                )
                .await
            }
        },
    }
}

async fn route_component(
    ctx: &Context,
    state: &AppState,
    component: &ComponentInteraction,
) -> Result<(), AppError> {
    require_guild(state, Responder::Component(component))?;

    let Some(action) = ComponentAction::parse(&component.data.custom_id) else {
        tracing::warn!("Received unknown component {}", component.data.custom_id);
        return Ok(());
    };

    match action {
        ComponentAction::OpenTicket => ticket::open_intake(ctx, state, component).await,
        ComponentAction::ChooseCategory => ticket::choose_category(ctx, state, component).await,
        ComponentAction::Close => ticket::close(ctx, state, component).await,
        ComponentAction::Claim => ticket::claim(ctx, state, component).await,
        ComponentAction::Priority(shown) => {
            ticket::change_priority(ctx, state, component, shown).await
        }
        ComponentAction::Reopen => ticket::reopen(ctx, state, component).await,
        ComponentAction::Delete => ticket::delete(ctx, state, component).await,
        ComponentAction::Transcript => ticket::transcript(ctx, state, component).await,
        ComponentAction::ToggleAutoRole(role_id) => {
            autorole::toggle(ctx, state, component, role_id).await
        }
        ComponentAction::SubmitTicket { .. } | ComponentAction::SubmitEmbed => Err(
            AppError::InternalError(format!(
                "Modal id {} used on a component",
                component.data.custom_id
            )),
        ),
    }
}

async fn route_modal(
    ctx: &Context,
    state: &AppState,
    modal: &ModalInteraction,
) -> Result<(), AppError> {
    require_guild(state, Responder::Modal(modal))?;

    match ComponentAction::parse(&modal.data.custom_id) {
        Some(ComponentAction::SubmitTicket { category }) => {
            ticket::submit_ticket(ctx, state, modal, category).await
        }
        Some(ComponentAction::SubmitEmbed) => embed::submit(ctx, state, modal).await,
        _ => {
            tracing::warn!("Received unknown modal {}", modal.data.custom_id);
            Ok(())
        }
    }
}
