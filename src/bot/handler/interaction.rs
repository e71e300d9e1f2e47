use serenity::all::{Context, Interaction};

use crate::{router, state::AppState};

/// Handles slash commands, button clicks, menu selections and modal submissions.
///
/// # Arguments
/// - `state` - Application state passed on to the controllers
/// - `ctx` - Discord context used to respond
/// - `interaction` - The received interaction
pub async fn handle_interaction_create(state: &AppState, ctx: Context, interaction: Interaction) {
    router::route_interaction(&ctx, state, interaction).await;
}
