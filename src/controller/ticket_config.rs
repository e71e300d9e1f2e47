use serenity::all::{CommandInteraction, Context, ResolvedOption};

use super::{
    channel_option, reply_ephemeral, require_admin, required_string, role_option, Responder,
};
use crate::{
    error::AppError,
    model::ticket_config::{TicketConfigParams, TicketTextField},
    service::ticket_config::TicketConfigService,
    state::AppState,
};

/// Handles `/ticket config`.
pub async fn configure(
    ctx: &Context,
    state: &AppState,
    command: &CommandInteraction,
    options: &[ResolvedOption<'_>],
) -> Result<(), AppError> {
    let responder = Responder::Command(command);
    require_admin(&responder.actor())?;

    let params = TicketConfigParams {
        parent_category_id: channel_option(options, "category").map(|id| id.get()),
        support_role_id: role_option(options, "support_role").map(|id| id.get()),
        log_channel_id: channel_option(options, "log_channel").map(|id| id.get()),
    };

    let settings = TicketConfigService::new(&state.settings)
        .configure(params)
        .await?;

    let show = |id: Option<u64>, mention: fn(u64) -> String| {
        id.map(mention).unwrap_or_else(|| "not set".to_string())
    };
    let summary = format!(
        "Ticket settings updated.\n\
         • Category: {}\n\
         • Support role: {}\n\
         • Log channel: {}",
        show(settings.parent_category_id, |id| format!("<#{}>", id)),
        show(settings.support_role_id, |id| format!("<@&{}>", id)),
        show(settings.log_channel_id, |id| format!("<#{}>", id)),
    );

    reply_ephemeral(ctx, responder, summary).await
}

/// Handles `/ticket text`.
pub async fn set_text(
    ctx: &Context,
    state: &AppState,
    command: &CommandInteraction,
    options: &[ResolvedOption<'_>],
) -> Result<(), AppError> {
    let responder = Responder::Command(command);
    require_admin(&responder.actor())?;

    let field: TicketTextField = required_string(options, "field")?
        .parse()
        .map_err(AppError::BadRequest)?;
    let value = required_string(options, "value")?;

    TicketConfigService::new(&state.settings)
        .set_text(field, value)
        .await?;

    reply_ephemeral(
        ctx,
        responder,
        format!("The {} text was updated.", field.name()),
    )
    .await
}
