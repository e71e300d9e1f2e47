//! Ticket message builders.
//!
//! Every function here is pure: the rendered output depends only on its arguments, so
//! re-rendering after a state change always reflects the stored record.

use entity::prelude::{TicketCategory, TicketTexts};
use serenity::all::{
    ButtonStyle, CreateActionRow, CreateButton, CreateEmbed, CreateEmbedFooter, CreateInputText,
    CreateMessage, CreateModal, CreateSelectMenu, CreateSelectMenuKind, CreateSelectMenuOption,
    InputTextStyle, ReactionType,
};

use crate::{
    model::{
        action::ComponentAction,
        category::MAX_CATEGORIES,
        ticket::{Priority, Ticket, TicketStatus, DESCRIPTION_MAX_LEN, SUBJECT_MAX_LEN},
    },
    util::template::{render, TemplateContext},
};

/// Custom id of the subject input in the creation modal.
pub const SUBJECT_FIELD: &str = "subject";

/// Custom id of the description input in the creation modal.
pub const DESCRIPTION_FIELD: &str = "description";

/// Discord's limit on modal titles.
const MODAL_TITLE_MAX_LEN: usize = 45;

const CLOSED_COLOR: u32 = 0x95a5a6;
const REOPENED_COLOR: u32 = 0x3498db;

fn emoji(value: &str) -> Option<ReactionType> {
    (!value.trim().is_empty()).then(|| ReactionType::Unicode(value.to_string()))
}

/// Builds the ticket summary embed.
///
/// # Arguments
/// - `ticket` - Ticket record to render
/// - `category` - The ticket's category if it still exists, otherwise the raw id is shown
/// - `texts` - Configured ticket texts for the footer and response time
/// - `context` - Placeholder values for the texts
///
/// # Returns
/// - `CreateEmbed` - Summary showing status, priority and assignee
pub fn summary_embed(
    ticket: &Ticket,
    category: Option<&TicketCategory>,
    texts: &TicketTexts,
    context: &TemplateContext,
) -> CreateEmbed {
    let category = match category {
        Some(category) => format!("{} {}", category.emoji, category.label)
            .trim()
            .to_string(),
        None => ticket.category.clone(),
    };
    let status = match ticket.status {
        TicketStatus::Open => "🟢 Open",
        TicketStatus::Closed => "🔒 Closed",
    };
    let assignee = ticket
        .assigned_to
        .map(|user_id| format!("<@{}>", user_id))
        .unwrap_or_else(|| "Unassigned".to_string());

    CreateEmbed::new()
        .title(format!("🎫 Ticket #{}", ticket.number))
        .description(format!("**{}**\n\n{}", ticket.subject, ticket.description))
        .color(ticket.priority.color())
        .field("Created by", format!("<@{}>", ticket.creator_id), true)
        .field("Category", category, true)
        .field(
            "Priority",
            format!("{} {}", ticket.priority.emoji(), ticket.priority.label()),
            true,
        )
        .field("Status", status, true)
        .field("Assigned to", assignee, true)
        .field("Response time", render(&texts.response_time, context), false)
        .footer(CreateEmbedFooter::new(render(&texts.footer, context)))
        .timestamp(ticket.created_at)
}

/// Buttons shown on an open ticket: close, claim and the priority cycle.
///
/// The priority button encodes the priority it displays.
pub fn open_row(priority: Priority) -> CreateActionRow {
    CreateActionRow::Buttons(vec![
        CreateButton::new(ComponentAction::Close.custom_id())
            .label("Close")
            .emoji('🔒')
            .style(ButtonStyle::Danger),
        CreateButton::new(ComponentAction::Claim.custom_id())
            .label("Claim")
            .emoji('🙋')
            .style(ButtonStyle::Success),
        CreateButton::new(ComponentAction::Priority(priority).custom_id())
            .label(format!("Priority: {}", priority.label()))
            .emoji(ReactionType::Unicode(priority.emoji().to_string()))
            .style(ButtonStyle::Secondary),
    ])
}

/// Buttons shown on a closed ticket: delete, transcript and reopen.
pub fn closed_row() -> CreateActionRow {
    CreateActionRow::Buttons(vec![
        CreateButton::new(ComponentAction::Delete.custom_id())
            .label("Delete")
            .emoji('🗑')
            .style(ButtonStyle::Danger),
        CreateButton::new(ComponentAction::Transcript.custom_id())
            .label("Transcript")
            .emoji('📄')
            .style(ButtonStyle::Secondary),
        CreateButton::new(ComponentAction::Reopen.custom_id())
            .label("Reopen")
            .emoji('🔓')
            .style(ButtonStyle::Success),
    ])
}

pub fn closed_embed(ticket: &Ticket) -> CreateEmbed {
    let closed_by = ticket
        .closed_by
        .map(|user_id| format!("<@{}>", user_id))
        .unwrap_or_else(|| "unknown".to_string());

    CreateEmbed::new()
        .title(format!("🔒 Ticket #{} closed", ticket.number))
        .description(format!(
            "Closed by {}. Delete the channel, save a transcript or reopen the ticket \
             with the buttons below.",
            closed_by
        ))
        .color(CLOSED_COLOR)
}

pub fn reopened_embed(ticket: &Ticket, reopened_by: serenity::all::UserId) -> CreateEmbed {
    CreateEmbed::new()
        .title(format!("🔓 Ticket #{} reopened", ticket.number))
        .description(format!("Reopened by <@{}>.", reopened_by))
        .color(REOPENED_COLOR)
}

/// Select menu listing the categories in display order.
///
/// Only the first 25 categories fit into a select menu.
pub fn category_menu(categories: &[TicketCategory]) -> CreateActionRow {
    let options = categories
        .iter()
        .take(MAX_CATEGORIES)
        .map(|category| {
            let mut option = CreateSelectMenuOption::new(&category.label, &category.id);
            if !category.description.is_empty() {
                option = option.description(&category.description);
            }
            if let Some(emoji) = emoji(&category.emoji) {
                option = option.emoji(emoji);
            }
            option
        })
        .collect();

    CreateActionRow::SelectMenu(
        CreateSelectMenu::new(
            ComponentAction::ChooseCategory.custom_id(),
            CreateSelectMenuKind::String { options },
        )
        .placeholder("Choose a category")
        .min_values(1)
        .max_values(1),
    )
}

/// Modal collecting the subject and description of a new ticket.
pub fn creation_modal(category: &TicketCategory) -> CreateModal {
    let title: String = format!("New ticket: {}", category.label)
        .chars()
        .take(MODAL_TITLE_MAX_LEN)
        .collect();

    CreateModal::new(
        ComponentAction::SubmitTicket {
            category: category.id.clone(),
        }
        .custom_id(),
        title,
    )
    .components(vec![
        CreateActionRow::InputText(
            CreateInputText::new(InputTextStyle::Short, "Subject", SUBJECT_FIELD)
                .placeholder("Short summary of your issue")
                .min_length(1)
                .max_length(SUBJECT_MAX_LEN as u16)
                .required(true),
        ),
        CreateActionRow::InputText(
            CreateInputText::new(InputTextStyle::Paragraph, "Description", DESCRIPTION_FIELD)
                .placeholder("Tell us what happened")
                .min_length(1)
                .max_length(DESCRIPTION_MAX_LEN as u16)
                .required(true),
        ),
    ])
}

/// Panel message with the button that starts the ticket intake.
pub fn panel_message(texts: &TicketTexts, context: &TemplateContext) -> CreateMessage {
    let mut embed = CreateEmbed::new()
        .title(render(&texts.panel_title, context))
        .description(render(&texts.panel_description, context))
        .color(REOPENED_COLOR)
        .footer(CreateEmbedFooter::new(render(&texts.footer, context)));
    if let Some(image) = &texts.panel_image {
        embed = embed.image(image);
    }

    let mut button = CreateButton::new(ComponentAction::OpenTicket.custom_id())
        .label(&texts.button_label)
        .style(ButtonStyle::Primary);
    if let Some(emoji) = emoji(&texts.button_emoji) {
        button = button.emoji(emoji);
    }

    CreateMessage::new()
        .embed(embed)
        .components(vec![CreateActionRow::Buttons(vec![button])])
}
