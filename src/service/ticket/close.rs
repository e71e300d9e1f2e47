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
    /// Closes the open ticket of `channel_id`.
    ///
    /// Renames the channel to the closed prefix, takes away the creator's send permission
    /// and posts the delete / transcript / reopen buttons. The channel is never deleted
    /// automatically.
    ///
    /// # Returns
    /// - `Ok(Ticket)` - The closed ticket
    /// - `Err(TicketError::NotTicketChannel)` - Channel is not named like an open ticket
    /// - `Err(TicketError::MissingRecord)` - No record for the channel
    pub async fn close(&self, channel_id: ChannelId, actor: &Actor) -> Result<Ticket, AppError> {
        self.require_status(channel_id, TicketStatus::Open).await?;

        let ticket = self
            .state
            .tickets
            .close(channel_id, actor.user_id, Utc::now())
            .await?;

        let messenger = &self.state.messenger;
        messenger
            .rename_channel(channel_id, &ticket.channel_name())
            .await?;
        messenger
            .set_member_access(channel_id, ticket.creator_id, MemberAccess::ReadOnly)
            .await?;
        messenger
            .send_message(
                channel_id,
                CreateMessage::new()
                    .embed(builder::closed_embed(&ticket))
                    .components(vec![builder::closed_row()]),
            )
            .await?;

        self.audit(
            AuditEntry::for_ticket(AuditAction::Closed, &ticket, actor.user_id),
            None,
        )
        .await;

        tracing::info!("Ticket {} closed by {}", ticket.number, actor.user_id);

        Ok(ticket)
    }
}
