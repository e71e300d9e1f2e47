//! Ticket domain model.
//!
//! A ticket is one support conversation bound to a dedicated channel. The record lives
//! only in memory, so the display number and every ticket are lost on restart.

use chrono::{DateTime, Utc};
use serenity::all::{ChannelId, MessageId, UserId};
use std::fmt;
use std::str::FromStr;

/// Channel name prefix of an open ticket.
pub const OPEN_CHANNEL_PREFIX: &str = "ticket";

/// Channel name prefix of a closed ticket.
pub const CLOSED_CHANNEL_PREFIX: &str = "cerrado";

/// Maximum subject length in characters.
pub const SUBJECT_MAX_LEN: usize = 100;

/// Maximum description length in characters.
pub const DESCRIPTION_MAX_LEN: usize = 1000;

/// Sequential display number of a ticket, rendered zero padded to four digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TicketNumber(pub u64);

impl fmt::Display for TicketNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TicketStatus {
    Open,
    Closed,
}

impl TicketStatus {
    /// Channel name prefix used while a ticket is in this status.
    pub fn channel_prefix(self) -> &'static str {
        match self {
            Self::Open => OPEN_CHANNEL_PREFIX,
            Self::Closed => CLOSED_CHANNEL_PREFIX,
        }
    }

    /// Derives the ticket status a channel name claims to be in.
    ///
    /// # Returns
    /// - `Some(TicketStatus)` - The name starts with one of the ticket prefixes
    /// - `None` - The channel is not named like a ticket channel
    pub fn from_channel_name(name: &str) -> Option<Self> {
        let (prefix, _) = name.split_once('-')?;
        match prefix {
            OPEN_CHANNEL_PREFIX => Some(Self::Open),
            CLOSED_CHANNEL_PREFIX => Some(Self::Closed),
            _ => None,
        }
    }
}

/// Ticket urgency. Cycles normal → high → low → normal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Priority {
    Low,
    #[default]
    Normal,
    High,
}

impl Priority {
    /// Returns the next priority in the fixed cycle.
    pub fn next(self) -> Self {
        match self {
            Self::Normal => Self::High,
            Self::High => Self::Low,
            Self::Low => Self::Normal,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Normal => "normal",
            Self::High => "high",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Normal => "Normal",
            Self::High => "High",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Self::Low => "🟢",
            Self::Normal => "🟡",
            Self::High => "🔴",
        }
    }

    /// Embed color used for the ticket summary.
    pub fn color(self) -> u32 {
        match self {
            Self::Low => 0x2ecc71,
            Self::Normal => 0xf1c40f,
            Self::High => 0xe74c3c,
        }
    }
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Self::Low),
            "normal" => Ok(Self::Normal),
            "high" => Ok(Self::High),
            other => Err(format!("Unknown priority '{}'", other)),
        }
    }
}

/// A tracked support conversation.
#[derive(Debug, Clone, PartialEq)]
pub struct Ticket {
    pub number: TicketNumber,
    pub channel_id: ChannelId,
    pub creator_id: UserId,
    /// Category id at creation time; not revalidated if the category is removed later.
    pub category: String,
    pub subject: String,
    pub description: String,
    pub status: TicketStatus,
    pub priority: Priority,
    pub assigned_to: Option<UserId>,
    pub created_at: DateTime<Utc>,
    pub closed_at: Option<DateTime<Utc>>,
    pub closed_by: Option<UserId>,
    pub reopened_at: Option<DateTime<Utc>>,
    /// Summary message re-rendered on claim and priority changes.
    pub summary_message_id: Option<MessageId>,
}

impl Ticket {
    /// Builds the channel name for this ticket in its current status.
    pub fn channel_name(&self) -> String {
        channel_name(self.status, self.number, self.creator_id)
    }
}

/// Builds a ticket channel name such as `ticket-0001-4821`.
///
/// The trailing segment is the last four digits of the creator's id.
pub fn channel_name(status: TicketStatus, number: TicketNumber, creator_id: UserId) -> String {
    format!(
        "{}-{}-{}",
        status.channel_prefix(),
        number,
        creator_suffix(creator_id)
    )
}

fn creator_suffix(creator_id: UserId) -> String {
    let id = creator_id.get().to_string();
    id[id.len().saturating_sub(4)..].to_string()
}

/// Parameters for creating a ticket from a submitted intake modal.
#[derive(Debug, Clone)]
pub struct CreateTicketParams {
    pub creator_id: UserId,
    pub category: String,
    pub subject: String,
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticket_number_is_zero_padded() {
        assert_eq!(TicketNumber(1).to_string(), "0001");
        assert_eq!(TicketNumber(42).to_string(), "0042");
        assert_eq!(TicketNumber(12345).to_string(), "12345");
    }

    /// Tests that the priority cycle is a 3-cycle over every value.
    ///
    /// Expected: normal → high → low → normal, three steps return to the start
    #[test]
    fn priority_cycles_through_three_states() {
        assert_eq!(Priority::Normal.next(), Priority::High);
        assert_eq!(Priority::High.next(), Priority::Low);
        assert_eq!(Priority::Low.next(), Priority::Normal);

        for start in [Priority::Low, Priority::Normal, Priority::High] {
            assert_eq!(start.next().next().next(), start);
            assert_ne!(start.next(), start);
        }
    }

    #[test]
    fn priority_round_trips_through_str() {
        for priority in [Priority::Low, Priority::Normal, Priority::High] {
            assert_eq!(priority.as_str().parse::<Priority>(), Ok(priority));
        }
        assert!("urgent".parse::<Priority>().is_err());
    }

    #[test]
    fn channel_name_uses_status_prefix_and_creator_suffix() {
        let creator = UserId::new(123456789012345678);

        assert_eq!(
            channel_name(TicketStatus::Open, TicketNumber(1), creator),
            "ticket-0001-5678"
        );
        assert_eq!(
            channel_name(TicketStatus::Closed, TicketNumber(1), creator),
            "cerrado-0001-5678"
        );
    }

    #[test]
    fn status_is_derived_from_channel_name() {
        assert_eq!(
            TicketStatus::from_channel_name("ticket-0003-1111"),
            Some(TicketStatus::Open)
        );
        assert_eq!(
            TicketStatus::from_channel_name("cerrado-0003-1111"),
            Some(TicketStatus::Closed)
        );
        assert_eq!(TicketStatus::from_channel_name("general"), None);
        assert_eq!(TicketStatus::from_channel_name("tickets-talk"), None);
    }
}
