use serenity::all::ChannelId;

use super::{
    audit::{AuditAction, AuditEntry},
    TicketService,
};
use crate::{
    data::ticket::ClaimOutcome,
    error::AppError,
    model::{actor::Actor, ticket::TicketStatus},
};

impl<'a> TicketService<'a> {
    /// Assigns the open ticket of `channel_id` to the acting support member.
    ///
    /// Claiming a ticket one already holds changes nothing. On a fresh claim the summary
    /// is re-rendered from the record.
    ///
    /// # Returns
    /// - `Ok(ClaimOutcome)` - Claimed, or already held by the actor
    /// - `Err(TicketError::PermissionDenied)` - Actor is not support staff
    /// - `Err(TicketError::NotTicketChannel)` - Channel is not named like an open ticket
    /// - `Err(TicketError::MissingRecord)` - No record for the channel
    /// - `Err(TicketError::Conflict)` - Another member holds the ticket
    pub async fn claim(
        &self,
        channel_id: ChannelId,
        actor: &Actor,
    ) -> Result<ClaimOutcome, AppError> {
        self.require_support(actor).await?;
        self.require_status(channel_id, TicketStatus::Open).await?;

        let outcome = self.state.tickets.claim(channel_id, actor.user_id).await?;

        if let ClaimOutcome::Claimed(ticket) = &outcome {
            self.render_summary(ticket).await;
            self.audit(
                AuditEntry::for_ticket(AuditAction::Claimed, ticket, actor.user_id),
                None,
            )
            .await;

            tracing::info!("Ticket {} claimed by {}", ticket.number, actor.user_id);
        }

        Ok(outcome)
    }
}
