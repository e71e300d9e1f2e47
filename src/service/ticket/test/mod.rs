use serenity::all::{ChannelId, UserId};

use crate::{
    model::ticket::{CreateTicketParams, Ticket},
    service::{harness::TestBot, ticket::TicketService},
};

mod audit;
mod close_reopen;

/// Creates a ticket for `creator_id` in the default category.
async fn open_ticket(bot: &TestBot, creator_id: u64) -> Ticket {
    TicketService::new(&bot.state)
        .submit_creation(params(creator_id))
        .await
        .expect("Failed to create test ticket")
}

fn params(creator_id: u64) -> CreateTicketParams {
    CreateTicketParams {
        creator_id: UserId::new(creator_id),
        category: test_utils::fixture::ticket_category::DEFAULT_ID.to_string(),
        subject: "Cannot log in".to_string(),
        description: "The login page keeps reloading".to_string(),
    }
}

/// Current name of a channel in the fake guild.
fn channel_name(bot: &TestBot, channel_id: ChannelId) -> Option<String> {
    bot.messenger.channel(channel_id)
}
