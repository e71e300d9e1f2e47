use serenity::all::ChannelId;

use super::{
    audit::{AuditAction, AuditEntry},
    TicketService,
};
use crate::{
    error::AppError,
    model::{actor::Actor, ticket::Ticket},
};

impl<'a> TicketService<'a> {
    /// Removes the ticket record and schedules the channel for deletion.
    ///
    /// Works on open and closed tickets and also when the record is already gone, e.g.
    /// after a restart. The channel itself disappears after the scheduler's delay.
    ///
    /// # Returns
    /// - `Ok(Some(Ticket))` - The removed record
    /// - `Ok(None)` - No record existed, the channel is deleted anyway
    /// - `Err(TicketError::NotTicketChannel)` - Channel is not named like a ticket
    pub async fn delete(
        &self,
        channel_id: ChannelId,
        actor: &Actor,
    ) -> Result<Option<Ticket>, AppError> {
        let channel_name = self.require_ticket_channel(channel_id).await?;

        let removed = self.state.tickets.remove(channel_id).await;
        self.state.deletions.schedule(channel_id).await;

        let entry = match &removed {
            Some(ticket) => AuditEntry::for_ticket(AuditAction::Deleted, ticket, actor.user_id),
            None => AuditEntry {
                action: AuditAction::Deleted,
                ticket: channel_name,
                channel_id,
                actor_id: actor.user_id,
            },
        };
        self.audit(entry, None).await;

        tracing::info!(
            "Ticket channel {} scheduled for deletion by {}",
            channel_id,
            actor.user_id
        );

        Ok(removed)
    }
}

impl<'a> TicketService<'a> {
    /// Drops whatever the bot still tracks for a channel that was deleted.
    ///
    /// Called from the `channel_delete` gateway event, which also fires for channels the
    /// bot deleted itself. Cancelling the pending deletion keeps the scheduler from
    /// calling Discord for a channel that no longer exists.
    ///
    /// # Returns
    /// - `Some(Ticket)` - The channel backed a ticket whose record was removed
    /// - `None` - The channel had no ticket record
    pub async fn forget_channel(&self, channel_id: ChannelId) -> Option<Ticket> {
        let cancelled = self.state.deletions.cancel(channel_id).await;
        let removed = self.state.tickets.remove(channel_id).await;

        if let Some(ticket) = &removed {
            tracing::info!(
                "Channel {} of ticket {} was deleted, record dropped",
                channel_id,
                ticket.number
            );
        } else if cancelled {
            tracing::debug!("Channel {} deleted, pending deletion cancelled", channel_id);
        }

        removed
    }
}
