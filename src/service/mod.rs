//! Service layer containing the bot's business logic.
//!
//! Services validate preconditions, mutate the stores in `data` and render the result
//! to Discord through the `GuildMessenger` seam. They never touch interactions or
//! replies, which belong to the controllers.

pub mod autorole;
pub mod category;
pub mod discord;
pub mod embed;
pub mod social;
pub mod ticket;
pub mod ticket_config;
pub mod welcome;

#[cfg(test)]
pub mod harness;
