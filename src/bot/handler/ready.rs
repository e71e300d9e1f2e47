//! Ready event handler for bot initialization.
//!
//! Fired once the bot connected to the gateway and completed the handshake. The slash
//! commands are registered in the managed guild here, so command changes ship with a
//! restart.

use serenity::all::{ActivityData, Context, Ready};

use crate::{bot::command, state::AppState};

/// Handles the ready event when the bot connects to Discord.
///
/// Registering commands replaces the guild's whole command set, commands removed from
/// the definitions disappear as well. A failed registration is logged, the bot keeps
/// running with whatever commands Discord still has.
///
/// # Arguments
/// - `state` - Application state, for the managed guild
/// - `ctx` - Discord context for setting activity status and registering commands
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(state: &AppState, ctx: Context, ready: Ready) {
    tracing::info!(
        "{} is connected to Discord, tracking {} ticket(s)",
        ready.user.name,
        state.tickets.len().await
    );

    ctx.set_activity(Some(ActivityData::watching("for tickets")));

    match state
        .guild_id
        .set_commands(&ctx.http, command::commands())
        .await
    {
        Ok(registered) => tracing::info!(
            "Registered {} slash commands in guild {}",
            registered.len(),
            state.guild_id
        ),
        Err(e) => tracing::error!(
            "Failed to register slash commands in guild {}: {}",
            state.guild_id,
            e
        ),
    }
}
