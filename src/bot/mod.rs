//! Discord gateway integration.
//!
//! This module owns the serenity client: the slash command definitions, the event
//! handler and the code that builds and runs the client. Event handlers stay thin and
//! hand work to the router, the controllers or the services.
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Guild availability and channel deletions
//! - `GUILD_MESSAGES` - Messages in guild channels, for prefix commands
//! - `MESSAGE_CONTENT` - Message text of prefix commands (privileged intent)
//! - `GUILD_MEMBERS` - Member joins, for welcome messages (privileged intent)
//!
//! Note: privileged intents must be explicitly enabled in the Discord Developer Portal
//! for the bot application.

pub mod command;
pub mod handler;
pub mod start;
