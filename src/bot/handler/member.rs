//! Member event handlers.

use serenity::all::{Context, Member};

use crate::{service::welcome::WelcomeService, state::AppState};

/// Handles the guild_member_addition event by posting the welcome message.
///
/// The member count comes from the cache, which the gateway keeps current as members
/// join. Nothing is posted while no welcome channel is configured.
///
/// # Arguments
/// - `state` - Application state
/// - `ctx` - Discord context, for the cached member count
/// - `new_member` - The member who joined
pub async fn handle_guild_member_addition(state: &AppState, ctx: Context, new_member: Member) {
    if new_member.guild_id != state.guild_id || new_member.user.bot {
        return;
    }

    let member_count = ctx
        .cache
        .guild(new_member.guild_id)
        .map(|guild| guild.member_count);

    match WelcomeService::new(state)
        .greet(new_member.user.id, member_count)
        .await
    {
        Ok(Some(_)) => {}
        Ok(None) => tracing::debug!(
            "No welcome channel configured, not greeting {}",
            new_member.user.id
        ),
        Err(e) => tracing::error!("Failed to welcome {}: {}", new_member.user.id, e),
    }
}
