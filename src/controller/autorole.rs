use serenity::all::{CommandInteraction, ComponentInteraction, Context, ResolvedOption, RoleId};

use super::{
    reply_ephemeral, require_admin, required_string, role_option, string_option, subcommand,
    Responder,
};
use crate::{
    error::AppError,
    model::autorole::{CreateAutoRoleParams, RoleToggle},
    service::autorole::AutoRoleService,
    state::AppState,
};

fn required_role(options: &[ResolvedOption<'_>]) -> Result<RoleId, AppError> {
    role_option(options, "role")
        .ok_or_else(|| AppError::InternalError("Missing required option 'role'".to_string()))
}

/// Handles `/autorole add|remove|panel`.
pub async fn handle(
    ctx: &Context,
    state: &AppState,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let responder = Responder::Command(command);
    require_admin(&responder.actor())?;

    let options = command.data.options();
    let (name, options) = subcommand(&options)?;
    let service = AutoRoleService::new(state);

    let reply = match name {
        "add" => {
            let autorole = service
                .add(CreateAutoRoleParams {
                    role_id: required_role(options)?.get(),
                    label: required_string(options, "label")?.to_string(),
                    emoji: string_option(options, "emoji").map(str::to_string),
                    description: string_option(options, "description").map(str::to_string),
                })
                .await?;
            format!(
                "<@&{}> is now self-assignable. Post `/autorole panel` again to show it.",
                autorole.role_id
            )
        }
        "remove" => {
            let autorole = service.remove(required_role(options)?).await?;
            format!(
                "<@&{}> is no longer self-assignable. Members keep the role.",
                autorole.role_id
            )
        }
        "panel" => {
            service.post_panel(command.channel_id).await?;
            "Autorole panel posted.".to_string()
        }
        other => {
            return Err(AppError::InternalError(format!(
                "Unknown /autorole subcommand '{}'",
                other
            )))
        }
    };

    reply_ephemeral(ctx, responder, reply).await
}

/// Handles a click on an autorole button.
pub async fn toggle(
    ctx: &Context,
    state: &AppState,
    component: &ComponentInteraction,
    role_id: RoleId,
) -> Result<(), AppError> {
    let responder = Responder::Component(component);

    let reply = match AutoRoleService::new(state)
        .toggle(&responder.actor(), role_id)
        .await?
    {
        RoleToggle::Added => format!("✅ You now have <@&{}>.", role_id),
        RoleToggle::Removed => format!("➖ Removed <@&{}>.", role_id),
    };

    reply_ephemeral(ctx, responder, reply).await
}
