use serenity::all::{ChannelId, MessageId};

use super::{builder, TicketService};
use crate::{error::AppError, model::actor::Actor};

impl<'a> TicketService<'a> {
    /// Posts the ticket panel with the open button into `channel_id`.
    ///
    /// # Returns
    /// - `Ok(MessageId)` - The posted panel
    /// - `Err(TicketError::PermissionDenied)` - Actor is not support staff
    pub async fn post_panel(
        &self,
        channel_id: ChannelId,
        actor: &Actor,
    ) -> Result<MessageId, AppError> {
        self.require_support(actor).await?;

        let texts = self
            .state
            .settings
            .read(|settings| settings.tickets.texts.clone())
            .await;
        let message = builder::panel_message(&texts, &self.template_context(actor.user_id));

        let message_id = self.state.messenger.send_message(channel_id, message).await?;

        tracing::info!("Ticket panel posted in {} by {}", channel_id, actor.user_id);

        Ok(message_id)
    }
}
