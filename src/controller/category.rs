use entity::prelude::TicketCategory;
use serenity::all::{CommandInteraction, Context};

use super::{
    reply_ephemeral, require_admin, required_string, string_option, subcommand, Responder,
};
use crate::{
    error::AppError,
    model::category::{CreateTicketCategoryParams, UpdateTicketCategoryParams},
    service::category::TicketCategoryService,
    state::AppState,
};

fn describe(category: &TicketCategory) -> String {
    let mut line = format!("`{}`", category.id);
    if !category.emoji.is_empty() {
        line = format!("{} {}", line, category.emoji);
    }
    line = format!("{} **{}**", line, category.label);
    if !category.description.is_empty() {
        line = format!("{} - {}", line, category.description);
    }
    line
}

/// Handles `/category add|edit|remove|list`.
pub async fn handle(
    ctx: &Context,
    state: &AppState,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let responder = Responder::Command(command);
    require_admin(&responder.actor())?;

    let options = command.data.options();
    let (name, options) = subcommand(&options)?;
    let service = TicketCategoryService::new(&state.settings);

    let reply = match name {
        "add" => {
            let category = service
                .add(CreateTicketCategoryParams {
                    id: required_string(options, "id")?.to_string(),
                    label: required_string(options, "label")?.to_string(),
                    description: string_option(options, "description")
                        .unwrap_or_default()
                        .to_string(),
                    emoji: string_option(options, "emoji")
                        .unwrap_or_default()
                        .to_string(),
                })
                .await?;
            format!("Category added: {}", describe(&category))
        }
        "edit" => {
            let category = service
                .edit(
                    required_string(options, "id")?,
                    UpdateTicketCategoryParams {
                        label: string_option(options, "label").map(str::to_string),
                        description: string_option(options, "description").map(str::to_string),
                        emoji: string_option(options, "emoji").map(str::to_string),
                    },
                )
                .await?;
            format!("Category updated: {}", describe(&category))
        }
        "remove" => {
            let category = service.remove(required_string(options, "id")?).await?;
            format!(
                "Category `{}` removed. Existing tickets keep it.",
                category.id
            )
        }
        "list" => {
            let categories = service.list().await;
            if categories.is_empty() {
                "No categories configured, add one with `/category add`.".to_string()
            } else {
                categories
                    .iter()
                    .map(describe)
                    .collect::<Vec<_>>()
                    .join("\n")
            }
        }
        other => {
            return Err(AppError::InternalError(format!(
                "Unknown /category subcommand '{}'",
                other
            )))
        }
    };

    reply_ephemeral(ctx, responder, reply).await
}
