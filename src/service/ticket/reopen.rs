use chrono::Utc;
use serenity::all::{ChannelId, CreateMessage};

use super::{
    audit::{AuditAction, AuditEntry},
    builder, TicketService,
};
use crate::{
    error::AppError,
    model::{
        actor::Actor,
        ticket::{Ticket, TicketStatus},
    },
    service::discord::MemberAccess,
};

impl<'a> TicketService<'a> {
    /// Reopens the closed ticket of `channel_id`.
    ///
    /// Restores the creator's send permission, renames the channel back to the open
    /// prefix and posts the open buttons for the stored priority. The creator is told by
    /// direct message; if that fails it is only logged.
    ///
    /// # Returns
    /// - `Ok(Ticket)` - The reopened ticket
    /// - `Err(TicketError::NotTicketChannel)` - Channel is not named like a closed ticket
    /// - `Err(TicketError::MissingRecord)` - No record for the channel
    pub async fn reopen(&self, channel_id: ChannelId, actor: &Actor) -> Result<Ticket, AppError> {
        self.require_status(channel_id, TicketStatus::Closed).await?;

        let ticket = self.state.tickets.reopen(channel_id, Utc::now()).await?;

        let messenger = &self.state.messenger;
        messenger
            .set_member_access(channel_id, ticket.creator_id, MemberAccess::Full)
            .await?;
        messenger
            .rename_channel(channel_id, &ticket.channel_name())
            .await?;
        messenger
            .send_message(
                channel_id,
                CreateMessage::new()
                    .embed(builder::reopened_embed(&ticket, actor.user_id))
                    .components(vec![builder::open_row(ticket.priority)]),
            )
            .await?;

        self.audit(
            AuditEntry::for_ticket(AuditAction::Reopened, &ticket, actor.user_id),
            None,
        )
        .await;

        let notice = CreateMessage::new().content(format!(
            "Your ticket #{} was reopened: <#{}>",
            ticket.number, ticket.channel_id
        ));
        if let Err(e) = messenger.direct_message(ticket.creator_id, notice).await {
            tracing::warn!(
                "Could not notify {} about reopened ticket {}: {}",
                ticket.creator_id,
                ticket.number,
                e
            );
        }

        tracing::info!("Ticket {} reopened by {}", ticket.number, actor.user_id);

        Ok(ticket)
    }
}
