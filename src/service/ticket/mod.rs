//! Ticket workflow service.
//!
//! This module provides the `TicketService`, the state machine behind the support
//! ticket buttons. Each operation validates its preconditions, applies exactly one
//! transition to the ticket store and renders the outcome into the ticket channel.
//!
//! Side effects are not transactional: once the store changed, a failing Discord call
//! is reported to the user but not rolled back. Audit log and direct message delivery
//! failures are only logged.
//!
//! The service is organized into separate modules by operation:
//! - `builder` - Embeds, buttons, menus and modals
//! - `audit` - Audit log entries
//! - `panel` - Panel with the open button
//! - `intake` - Category chooser and creation modal
//! - `creation` - Ticket creation from a submitted modal
//! - `close` / `reopen` - Status transitions
//! - `claim` / `priority` - Support actions on open tickets
//! - `delete` - Record removal and delayed channel deletion
//! - `transcript` - HTML transcripts

pub mod audit;
pub mod builder;
pub mod claim;
pub mod close;
pub mod creation;
pub mod delete;
pub mod intake;
pub mod panel;
pub mod priority;
pub mod reopen;
pub mod transcript;

#[cfg(test)]
mod test;

use entity::prelude::TicketCategory;
use serenity::all::{ChannelId, EditMessage, UserId};

use crate::{
    error::{ticket::TicketError, AppError},
    model::{
        actor::Actor,
        ticket::{Ticket, TicketStatus},
    },
    state::AppState,
    util::template::TemplateContext,
};

/// Service providing the ticket workflow operations.
///
/// Holds a reference to the application state; the stores inside it are the only
/// place ticket state lives, the service itself is stateless and cheap to construct
/// per interaction.
pub struct TicketService<'a> {
    state: &'a AppState,
}

impl<'a> TicketService<'a> {
    /// Creates a new TicketService instance.
    ///
    /// # Arguments
    /// - `state` - Shared application state
    ///
    /// # Returns
    /// - `TicketService` - New service instance
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    /// Reads the status a channel claims to be in from its name.
    async fn channel_status(&self, channel_id: ChannelId) -> Result<Option<TicketStatus>, AppError> {
        let name = self.state.messenger.channel_name(channel_id).await?;

        Ok(TicketStatus::from_channel_name(&name))
    }

    /// Fails with `NotTicketChannel` unless the channel is named like a ticket in `expected`.
    async fn require_status(
        &self,
        channel_id: ChannelId,
        expected: TicketStatus,
    ) -> Result<(), AppError> {
        match self.channel_status(channel_id).await? {
            Some(status) if status == expected => Ok(()),
            _ => Err(TicketError::NotTicketChannel.into()),
        }
    }

    /// Fails with `NotTicketChannel` unless the channel is named like any ticket.
    ///
    /// # Returns
    /// - `Ok(String)` - The channel's current name
    /// - `Err(TicketError::NotTicketChannel)` - The name has neither ticket prefix
    async fn require_ticket_channel(&self, channel_id: ChannelId) -> Result<String, AppError> {
        let name = self.state.messenger.channel_name(channel_id).await?;

        match TicketStatus::from_channel_name(&name) {
            Some(_) => Ok(name),
            None => Err(TicketError::NotTicketChannel.into()),
        }
    }

    async fn require_support(&self, actor: &Actor) -> Result<(), AppError> {
        let support_role_id = self
            .state
            .settings
            .read(|settings| settings.tickets.support_role_id)
            .await;

        if actor.is_support(support_role_id) {
            Ok(())
        } else {
            Err(TicketError::PermissionDenied.into())
        }
    }

    async fn find_category(&self, category_id: &str) -> Option<TicketCategory> {
        self.state
            .settings
            .read(|settings| {
                settings
                    .tickets
                    .categories
                    .iter()
                    .find(|category| category.id == category_id)
                    .cloned()
            })
            .await
    }

    fn template_context(&self, user_id: UserId) -> TemplateContext {
        TemplateContext {
            user: format!("<@{}>", user_id),
            server: self.state.guild_name.clone(),
            member_count: None,
        }
    }

    /// Re-renders the summary message from the current record.
    ///
    /// Failures are logged and swallowed, the record stays authoritative.
    async fn render_summary(&self, ticket: &Ticket) {
        let Some(message_id) = ticket.summary_message_id else {
            tracing::warn!("Ticket {} has no summary message to update", ticket.number);
            return;
        };

        let category = self.find_category(&ticket.category).await;
        let texts = self
            .state
            .settings
            .read(|settings| settings.tickets.texts.clone())
            .await;
        let context = self.template_context(ticket.creator_id);

        let edit = EditMessage::new()
            .embed(builder::summary_embed(
                ticket,
                category.as_ref(),
                &texts,
                &context,
            ))
            .components(vec![builder::open_row(ticket.priority)]);

        if let Err(e) = self
            .state
            .messenger
            .edit_message(ticket.channel_id, message_id, edit)
            .await
        {
            tracing::warn!(
                "Failed to update summary of ticket {} in channel {}: {}",
                ticket.number,
                ticket.channel_id,
                e
            );
        }
    }
}
