//! Interaction controllers.
//!
//! Controllers sit between the router and the services: they pull options and modal
//! values out of the interaction, call one service operation and answer the
//! interaction. Errors are returned to the router, which turns them into an ephemeral
//! reply through `reply_error`.
//!
//! Controllers are organized by feature:
//! - `ticket` - Ticket buttons, intake and `/ticket panel`
//! - `ticket_config` - `/ticket config` and `/ticket text`
//! - `category` - `/category`
//! - `autorole` - `/autorole` and the role buttons
//! - `welcome` - `/welcome`
//! - `embed` - `/embed` and its modal
//! - `social` - `/hug`, `/hit`, `/pat`, `/slap`
//! - `prefix` - Plain message commands

pub mod autorole;
pub mod category;
pub mod embed;
pub mod prefix;
pub mod social;
pub mod ticket;
pub mod ticket_config;
pub mod welcome;

use serenity::all::{
    ActionRowComponent, ChannelId, CommandInteraction, ComponentInteraction, Context,
    CreateInteractionResponse, CreateInteractionResponseMessage, EditInteractionResponse,
    GuildId, ModalInteraction, ResolvedOption, ResolvedValue, RoleId, UserId,
};

use crate::{
    error::{internal::InternalError, AppError},
    model::actor::Actor,
    state::AppState,
};

/// The interaction being answered.
///
/// Wraps the three interaction kinds the bot receives so controllers and error replies
/// can respond without caring which one they hold.
#[derive(Clone, Copy)]
pub enum Responder<'a> {
    Command(&'a CommandInteraction),
    Component(&'a ComponentInteraction),
    Modal(&'a ModalInteraction),
}

impl<'a> Responder<'a> {
    /// Member who triggered the interaction.
    pub fn actor(&self) -> Actor {
        match self {
            Self::Command(i) => Actor::from_interaction(&i.user, i.member.as_deref()),
            Self::Component(i) => Actor::from_interaction(&i.user, i.member.as_ref()),
            Self::Modal(i) => Actor::from_interaction(&i.user, i.member.as_ref()),
        }
    }

    pub fn user_id(&self) -> UserId {
        match self {
            Self::Command(i) => i.user.id,
            Self::Component(i) => i.user.id,
            Self::Modal(i) => i.user.id,
        }
    }

    pub fn guild_id(&self) -> Option<GuildId> {
        match self {
            Self::Command(i) => i.guild_id,
            Self::Component(i) => i.guild_id,
            Self::Modal(i) => i.guild_id,
        }
    }

    /// Short description for logs, e.g. `command /ticket` or `component ticket:close`.
    pub fn describe(&self) -> String {
        match self {
            Self::Command(i) => format!("command /{}", i.data.name),
            Self::Component(i) => format!("component {}", i.data.custom_id),
            Self::Modal(i) => format!("modal {}", i.data.custom_id),
        }
    }

    /// Sends the initial response.
    pub async fn respond(
        &self,
        ctx: &Context,
        response: CreateInteractionResponse,
    ) -> Result<(), AppError> {
        match self {
            Self::Command(i) => i.create_response(ctx, response).await?,
            Self::Component(i) => i.create_response(ctx, response).await?,
            Self::Modal(i) => i.create_response(ctx, response).await?,
        }

        Ok(())
    }

    /// Edits the initial response, used after `defer_ephemeral`.
    pub async fn edit(&self, ctx: &Context, edit: EditInteractionResponse) -> Result<(), AppError> {
        match self {
            Self::Command(i) => i.edit_response(ctx, edit).await?,
            Self::Component(i) => i.edit_response(ctx, edit).await?,
            Self::Modal(i) => i.edit_response(ctx, edit).await?,
        };

        Ok(())
    }

    /// Acknowledges the interaction with an ephemeral "thinking" state.
    ///
    /// Used before operations that make several Discord calls and could exceed the
    /// three second response window.
    pub async fn defer_ephemeral(&self, ctx: &Context) -> Result<(), AppError> {
        match self {
            Self::Command(i) => i.defer_ephemeral(ctx).await?,
            Self::Component(i) => i.defer_ephemeral(ctx).await?,
            Self::Modal(i) => i.defer_ephemeral(ctx).await?,
        }

        Ok(())
    }
}

/// Answers with a message only the invoking user sees.
pub async fn reply_ephemeral(
    ctx: &Context,
    responder: Responder<'_>,
    content: impl Into<String>,
) -> Result<(), AppError> {
    let message = CreateInteractionResponseMessage::new()
        .content(content)
        .ephemeral(true);

    responder
        .respond(ctx, CreateInteractionResponse::Message(message))
        .await
}

/// Reports a failed interaction back to the user.
///
/// Expected workflow errors are logged at debug level, everything else at error level.
/// The interaction may already be deferred, in which case the initial response can no
/// longer be created and the deferred response is edited instead.
///
/// # Arguments
/// - `ctx` - Discord context used to respond
/// - `state` - Application state, for the detail exposure flag
/// - `responder` - Interaction that failed
/// - `error` - The failure
pub async fn reply_error(ctx: &Context, state: &AppState, responder: Responder<'_>, error: AppError) {
    if error.is_expected() {
        tracing::debug!(
            "{} by {} rejected: {}",
            responder.describe(),
            responder.user_id(),
            error
        );
    } else {
        tracing::error!(
            "{} by {} failed: {}",
            responder.describe(),
            responder.user_id(),
            error
        );
    }

    let text = error.user_message(state.expose_error_details);

    if reply_ephemeral(ctx, responder, text.clone()).await.is_ok() {
        return;
    }

    if let Err(e) = responder
        .edit(ctx, EditInteractionResponse::new().content(text))
        .await
    {
        tracing::warn!(
            "Failed to report error for {}: {}",
            responder.describe(),
            e
        );
    }
}

/// Fails unless the interaction came from the managed guild.
pub fn require_guild(state: &AppState, responder: Responder<'_>) -> Result<(), AppError> {
    match responder.guild_id() {
        Some(guild_id) if guild_id == state.guild_id => Ok(()),
        _ => Err(InternalError::MissingGuild(responder.describe()).into()),
    }
}

/// Fails unless the actor is a guild administrator.
///
/// Admin commands are registered with administrator default permissions, this check
/// covers servers that overrode them.
pub fn require_admin(actor: &Actor) -> Result<(), AppError> {
    if actor.is_admin {
        Ok(())
    } else {
        Err(AppError::BadRequest(
            "You need the Administrator permission to do that.".to_string(),
        ))
    }
}

/// Splits a command's options into its subcommand name and that subcommand's options.
///
/// # Returns
/// - `Ok((name, options))` - The invoked subcommand
/// - `Err(AppError::InternalError)` - The command was invoked without a subcommand
pub fn subcommand<'o, 'a>(
    options: &'o [ResolvedOption<'a>],
) -> Result<(&'a str, &'o [ResolvedOption<'a>]), AppError> {
    options
        .iter()
        .find_map(|option| match &option.value {
            ResolvedValue::SubCommand(inner) => Some((option.name, inner.as_slice())),
            _ => None,
        })
        .ok_or_else(|| AppError::InternalError("Command invoked without a subcommand".to_string()))
}

pub fn string_option<'a>(options: &[ResolvedOption<'a>], name: &str) -> Option<&'a str> {
    options.iter().find_map(|option| match option.value {
        ResolvedValue::String(value) if option.name == name => Some(value),
        _ => None,
    })
}

pub fn role_option(options: &[ResolvedOption<'_>], name: &str) -> Option<RoleId> {
    options.iter().find_map(|option| match option.value {
        ResolvedValue::Role(role) if option.name == name => Some(role.id),
        _ => None,
    })
}

pub fn channel_option(options: &[ResolvedOption<'_>], name: &str) -> Option<ChannelId> {
    options.iter().find_map(|option| match option.value {
        ResolvedValue::Channel(channel) if option.name == name => Some(channel.id),
        _ => None,
    })
}

pub fn user_option(options: &[ResolvedOption<'_>], name: &str) -> Option<UserId> {
    options.iter().find_map(|option| match option.value {
        ResolvedValue::User(user, _) if option.name == name => Some(user.id),
        _ => None,
    })
}

/// Reads a required string option.
///
/// # Returns
/// - `Ok(&str)` - The option value
/// - `Err(AppError::InternalError)` - Discord sent the command without the option
pub fn required_string<'a>(options: &[ResolvedOption<'a>], name: &str) -> Result<&'a str, AppError> {
    string_option(options, name)
        .ok_or_else(|| AppError::InternalError(format!("Missing required option '{}'", name)))
}

fn input_value<'m>(modal: &'m ModalInteraction, custom_id: &str) -> Option<&'m String> {
    modal
        .data
        .components
        .iter()
        .flat_map(|row| row.components.iter())
        .find_map(|component| match component {
            ActionRowComponent::InputText(input) if input.custom_id == custom_id => {
                input.value.as_ref()
            }
            _ => None,
        })
}

/// Value typed into an optional modal input, `None` when left blank.
pub fn modal_value(modal: &ModalInteraction, custom_id: &str) -> Option<String> {
    input_value(modal, custom_id)
        .filter(|value| !value.trim().is_empty())
        .cloned()
}

/// Raw value of a modal input the modal marks as required.
///
/// # Returns
/// - `Ok(String)` - The submitted value, validated by the service
/// - `Err(InternalError::MissingModalField)` - The submission lacks the input
pub fn required_modal_value(modal: &ModalInteraction, custom_id: &str) -> Result<String, AppError> {
    input_value(modal, custom_id)
        .cloned()
        .ok_or_else(|| InternalError::MissingModalField(custom_id.to_string()).into())
}
