//! Audit log entries for ticket lifecycle transitions.

use serenity::all::{
    ChannelId, CreateAttachment, CreateEmbed, CreateMessage, Timestamp, UserId,
};

use super::TicketService;
use crate::model::ticket::{Priority, Ticket};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuditAction {
    Created,
    Closed,
    Reopened,
    Deleted,
    Claimed,
    PriorityChanged(Priority),
    Transcript,
}

impl AuditAction {
    fn title(self) -> &'static str {
        match self {
            Self::Created => "🎫 Ticket created",
            Self::Closed => "🔒 Ticket closed",
            Self::Reopened => "🔓 Ticket reopened",
            Self::Deleted => "🗑️ Ticket deleted",
            Self::Claimed => "🙋 Ticket claimed",
            Self::PriorityChanged(_) => "📶 Priority changed",
            Self::Transcript => "📄 Transcript generated",
        }
    }

    fn color(self) -> u32 {
        match self {
            Self::Created => 0x2ecc71,
            Self::Closed | Self::Deleted => 0xe74c3c,
            Self::Reopened => 0x3498db,
            Self::Claimed => 0x9b59b6,
            Self::PriorityChanged(priority) => priority.color(),
            Self::Transcript => 0x95a5a6,
        }
    }
}

/// One audit log line.
#[derive(Debug, Clone)]
pub struct AuditEntry {
    pub action: AuditAction,
    /// Ticket reference shown in the log, `#0001` or the channel name when the record is gone.
    pub ticket: String,
    pub channel_id: ChannelId,
    pub actor_id: UserId,
}

impl AuditEntry {
    pub fn for_ticket(action: AuditAction, ticket: &Ticket, actor_id: UserId) -> Self {
        Self {
            action,
            ticket: format!("#{}", ticket.number),
            channel_id: ticket.channel_id,
            actor_id,
        }
    }

    pub fn embed(&self) -> CreateEmbed {
        let mut embed = CreateEmbed::new()
            .title(self.action.title())
            .color(self.action.color())
            .field("Ticket", &self.ticket, true)
            .field("Channel", format!("<#{}>", self.channel_id), true)
            .field("By", format!("<@{}>", self.actor_id), true)
            .timestamp(Timestamp::now());

        if let AuditAction::PriorityChanged(priority) = self.action {
            embed = embed.field(
                "New priority",
                format!("{} {}", priority.emoji(), priority.label()),
                false,
            );
        }

        embed
    }
}

impl<'a> TicketService<'a> {
    /// Posts an entry to the audit log channel if one is configured.
    ///
    /// Delivery failures are logged and never affect the calling operation.
    pub(super) async fn audit(&self, entry: AuditEntry, attachment: Option<CreateAttachment>) {
        let Some(log_channel_id) = self
            .state
            .settings
            .read(|settings| settings.tickets.log_channel_id)
            .await
        else {
            return;
        };

        let mut message = CreateMessage::new().embed(entry.embed());
        if let Some(attachment) = attachment {
            message = message.add_file(attachment);
        }

        if let Err(e) = self
            .state
            .messenger
            .send_message(ChannelId::new(log_channel_id), message)
            .await
        {
            tracing::warn!(
                "Failed to write audit entry {:?} for ticket {}: {}",
                entry.action,
                entry.ticket,
                e
            );
        }
    }
}
