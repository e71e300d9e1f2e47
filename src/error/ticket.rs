use serenity::all::{ChannelId, UserId};
use thiserror::Error;

/// Expected failures of the ticket workflow.
///
/// Every variant is reported back to the invoking user as an ephemeral reply
/// using its `Display` text, none of them are fatal and none are retried.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TicketError {
    /// The action was used in a channel that does not follow the ticket naming
    /// convention for the required state.
    #[error("This action can only be used inside a ticket channel.")]
    NotTicketChannel,

    /// The channel looks like a ticket but no record exists for it, for example
    /// after a restart or while a deletion is pending.
    #[error("No ticket data was found for this channel.")]
    MissingRecord,

    /// The user opened the ticket chooser too recently.
    #[error("Please wait {remaining_secs} more second(s) before opening another ticket.")]
    CooldownActive {
        /// Whole seconds left until the cooldown expires, rounded up
        remaining_secs: u64,
    },

    /// The user already has an open ticket.
    #[error("You already have an open ticket: <#{channel_id}>")]
    AlreadyOpen {
        /// Channel of the ticket that is still open
        channel_id: ChannelId,
    },

    /// The actor lacks the support role.
    #[error("You need the support role to do that.")]
    PermissionDenied,

    /// The ticket is claimed by another support member.
    #[error("This ticket is already claimed by <@{assignee}>.")]
    Conflict {
        /// Support member currently assigned
        assignee: UserId,
    },

    #[error("The category '{0}' does not exist.")]
    UnknownCategory(String),

    #[error("A category with id '{0}' already exists.")]
    DuplicateCategory(String),

    #[error("Categories are limited to {0}.")]
    CategoryLimit(usize),

    #[error("No ticket categories are configured yet, ask an administrator to add one.")]
    NoCategories,

    /// A submitted field is empty or too long.
    #[error("The {field} must be between 1 and {max} characters.")]
    InvalidField {
        /// Field display name
        field: &'static str,
        /// Maximum allowed length in characters
        max: usize,
    },
}
