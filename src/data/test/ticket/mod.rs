use crate::data::ticket::{ClaimOutcome, TicketRepository};
use crate::error::ticket::TicketError;
use crate::model::ticket::{Priority, Ticket, TicketNumber, TicketStatus};
use chrono::Utc;
use serenity::all::{ChannelId, UserId};

mod claim;
mod close_reopen;
mod find_open_by_creator;
mod next_number;
mod priority;
mod remove;

/// Builds an open, unassigned ticket for the given channel and creator.
fn open_ticket(number: u64, channel_id: u64, creator_id: u64) -> Ticket {
    Ticket {
        number: TicketNumber(number),
        channel_id: ChannelId::new(channel_id),
        creator_id: UserId::new(creator_id),
        category: "support".to_string(),
        subject: "Cannot log in".to_string(),
        description: "The login page keeps reloading".to_string(),
        status: TicketStatus::Open,
        priority: Priority::Normal,
        assigned_to: None,
        created_at: Utc::now(),
        closed_at: None,
        closed_by: None,
        reopened_at: None,
        summary_message_id: None,
    }
}
