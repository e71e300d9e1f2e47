use chrono::Utc;
use serenity::all::{ChannelId, CreateMessage, RoleId};

use super::{
    audit::{AuditAction, AuditEntry},
    builder, TicketService,
};
use crate::{
    error::{ticket::TicketError, AppError},
    model::ticket::{
        channel_name, CreateTicketParams, Priority, Ticket, TicketStatus, DESCRIPTION_MAX_LEN,
        SUBJECT_MAX_LEN,
    },
    service::discord::{permission::ticket_channel_overwrites, TicketChannelRequest},
    util::template::render,
};

/// Trims a submitted field and checks its length in characters.
fn validate_field(field: &'static str, value: &str, max: usize) -> Result<String, TicketError> {
    let value = value.trim();
    let len = value.chars().count();

    if len == 0 || len > max {
        return Err(TicketError::InvalidField { field, max });
    }

    Ok(value.to_string())
}

impl<'a> TicketService<'a> {
    /// Creates a ticket from a submitted creation modal.
    ///
    /// Allocates the next display number, creates the private channel, posts the summary
    /// with the open ticket buttons and the optional welcome text, then stores the
    /// record. A failure after the channel was created leaves the channel behind without
    /// a record; it is logged, not cleaned up.
    ///
    /// # Arguments
    /// - `params` - Creator, category and the submitted fields
    ///
    /// # Returns
    /// - `Ok(Ticket)` - The stored ticket
    /// - `Err(TicketError::InvalidField)` - Subject or description empty or too long
    /// - `Err(TicketError::UnknownCategory)` - Category does not exist
    /// - `Err(TicketError::AlreadyOpen)` - Creator already has an open ticket
    /// - `Err(AppError::DiscordErr)` - Channel creation or summary post failed
    pub async fn submit_creation(&self, params: CreateTicketParams) -> Result<Ticket, AppError> {
        let subject = validate_field("subject", &params.subject, SUBJECT_MAX_LEN)?;
        let description = validate_field("description", &params.description, DESCRIPTION_MAX_LEN)?;

        let category = self
            .find_category(&params.category)
            .await
            .ok_or_else(|| TicketError::UnknownCategory(params.category.clone()))?;

        if let Some(open) = self
            .state
            .tickets
            .find_open_by_creator(params.creator_id)
            .await
        {
            return Err(TicketError::AlreadyOpen {
                channel_id: open.channel_id,
            }
            .into());
        }

        let settings = self.state.settings.read(|s| s.tickets.clone()).await;
        let support_role_id = settings.support_role_id.map(RoleId::new);

        let number = self.state.tickets.next_number().await;
        let request = TicketChannelRequest {
            name: channel_name(TicketStatus::Open, number, params.creator_id),
            parent_id: settings.parent_category_id.map(ChannelId::new),
            topic: format!("Ticket #{} · {} · {}", number, category.label, subject),
            overwrites: ticket_channel_overwrites(
                self.state.guild_id,
                params.creator_id,
                self.state.bot_user_id,
                support_role_id,
            ),
        };
        let channel_id = self.state.messenger.create_ticket_channel(request).await?;

        let mut ticket = Ticket {
            number,
            channel_id,
            creator_id: params.creator_id,
            category: category.id.clone(),
            subject,
            description,
            status: TicketStatus::Open,
            priority: Priority::default(),
            assigned_to: None,
            created_at: Utc::now(),
            closed_at: None,
            closed_by: None,
            reopened_at: None,
            summary_message_id: None,
        };

        let context = self.template_context(ticket.creator_id);
        let mut content = format!("<@{}>", ticket.creator_id);
        if let Some(role_id) = support_role_id {
            content.push_str(&format!(" <@&{}>", role_id));
        }
        let summary = CreateMessage::new()
            .content(content)
            .embed(builder::summary_embed(
                &ticket,
                Some(&category),
                &settings.texts,
                &context,
            ))
            .components(vec![builder::open_row(ticket.priority)]);

        let summary_id = self
            .state
            .messenger
            .send_message(channel_id, summary)
            .await
            .inspect_err(|e| {
                tracing::error!(
                    "Ticket {} channel {} was created but the summary could not be posted: {}",
                    number,
                    channel_id,
                    e
                )
            })?;
        ticket.summary_message_id = Some(summary_id);

        if let Some(welcome) = &settings.texts.welcome_message {
            let message = CreateMessage::new().content(render(welcome, &context));
            if let Err(e) = self.state.messenger.send_message(channel_id, message).await {
                tracing::warn!("Failed to post welcome text in ticket {}: {}", number, e);
            }
        }

        self.state.tickets.insert(ticket.clone()).await;

        self.audit(
            AuditEntry::for_ticket(AuditAction::Created, &ticket, ticket.creator_id),
            None,
        )
        .await;

        tracing::info!(
            "Ticket {} opened by {} in channel {} ({})",
            ticket.number,
            ticket.creator_id,
            ticket.channel_id,
            ticket.category
        );

        Ok(ticket)
    }
}
