use serenity::all::ChannelId;

use super::{
    audit::{AuditAction, AuditEntry},
    TicketService,
};
use crate::{
    error::AppError,
    model::{
        actor::Actor,
        ticket::{Priority, Ticket, TicketStatus},
    },
};

impl<'a> TicketService<'a> {
    /// Advances the stored priority one step along normal → high → low → normal.
    ///
    /// The priority shown on the clicked button is not trusted: several messages may
    /// carry priority buttons and older ones go stale. It is only compared against the
    /// record to log the mismatch.
    ///
    /// # Arguments
    /// - `channel_id` - Ticket channel
    /// - `actor` - Member who clicked the button
    /// - `shown` - Priority encoded in the clicked button
    ///
    /// # Returns
    /// - `Ok(Ticket)` - Ticket with its new priority
    /// - `Err(TicketError::PermissionDenied)` - Actor is not support staff
    /// - `Err(TicketError::NotTicketChannel)` - Channel is not named like an open ticket
    /// - `Err(TicketError::MissingRecord)` - No record for the channel
    pub async fn change_priority(
        &self,
        channel_id: ChannelId,
        actor: &Actor,
        shown: Priority,
    ) -> Result<Ticket, AppError> {
        self.require_support(actor).await?;
        self.require_status(channel_id, TicketStatus::Open).await?;

        let ticket = self.state.tickets.cycle_priority(channel_id).await?;

        if shown.next() != ticket.priority {
            tracing::warn!(
                "Stale priority button on ticket {}: button showed {}, ticket moved to {}",
                ticket.number,
                shown.as_str(),
                ticket.priority.as_str()
            );
        }

        self.render_summary(&ticket).await;
        self.audit(
            AuditEntry::for_ticket(
                AuditAction::PriorityChanged(ticket.priority),
                &ticket,
                actor.user_id,
            ),
            None,
        )
        .await;

        tracing::info!(
            "Ticket {} priority set to {} by {}",
            ticket.number,
            ticket.priority.as_str(),
            actor.user_id
        );

        Ok(ticket)
    }
}
