use serenity::all::{Client, GatewayIntents};

use crate::{bot::handler::Handler, config::Config, error::AppError, state::AppState};

/// Builds the Discord client without connecting it.
///
/// The client is returned so the caller can keep a handle on its shard manager for a
/// clean shutdown before handing the client to [`start_bot`].
///
/// # Arguments
/// - `config` - Application configuration containing the bot token
/// - `state` - Application state moved into the event handler
///
/// # Returns
/// - `Ok(Client)` - Configured client, not yet connected
/// - `Err(AppError::DiscordErr)` - Client could not be built
pub async fn init_bot(config: &Config, state: AppState) -> Result<Client, AppError> {
    // MESSAGE_CONTENT and GUILD_MEMBERS are privileged intents, they must be enabled in
    // the Discord Developer Portal
    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT
        | GatewayIntents::GUILD_MEMBERS;

    let handler = Handler::new(state);

    let client = Client::builder(&config.discord_bot_token, intents)
        .event_handler(handler)
        .await?;

    Ok(client)
}

/// Connects the client and runs it until the gateway shuts down.
///
/// Should be called from within a `tokio::spawn` task since it only returns once every
/// shard stopped.
///
/// # Arguments
/// - `client` - Client built by [`init_bot`]
///
/// # Returns
/// - `Ok(())` - The shards were shut down
/// - `Err(AppError::DiscordErr)` - Connecting to the gateway failed
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}
