use serenity::all::{GuildId, Http};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use crate::{
    config::Config,
    data::{
        cooldown::{CooldownGuard, TICKET_INTAKE_COOLDOWN},
        settings::SettingsRepository,
        ticket::TicketRepository,
    },
    error::AppError,
    scheduler::deletion::{DeletionScheduler, DELETION_DELAY},
    service::discord::SerenityMessenger,
    state::AppState,
};

/// Installs the global tracing subscriber.
///
/// The filter is read from `RUST_LOG` and falls back to `info` when unset or invalid.
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();
}

/// Builds the application state for the configured guild.
///
/// Loads the settings document, then looks up the bot's own user and the guild's name
/// over HTTP. Both lookups happen once, a renamed guild is picked up on restart.
///
/// # Arguments
/// - `config` - Application configuration
/// - `http` - Discord HTTP client shared with the messenger
///
/// # Returns
/// - `Ok(AppState)` - State ready to be handed to the event handler
/// - `Err(AppError::IoErr | AppError::JsonErr)` - Settings document could not be loaded
/// - `Err(AppError::DiscordErr)` - The bot user or guild could not be fetched, usually a
///   bad token or a guild the bot was never invited to
pub async fn build_state(config: &Config, http: Arc<Http>) -> Result<AppState, AppError> {
    let guild_id = GuildId::new(config.discord_guild_id);

    let settings = SettingsRepository::load(&config.settings_path).await?;
    tracing::info!("Loaded settings from {}", settings.path().display());

    let bot_user = http.get_current_user().await?;
    let guild = http.get_guild(guild_id).await?;
    tracing::info!(
        "Managing guild {} ({}) as {}",
        guild.name,
        guild_id,
        bot_user.name
    );

    let messenger = Arc::new(SerenityMessenger::new(http, guild_id));

    Ok(AppState {
        guild_id,
        guild_name: guild.name,
        bot_user_id: bot_user.id,
        settings,
        tickets: TicketRepository::new(),
        cooldowns: CooldownGuard::new(TICKET_INTAKE_COOLDOWN),
        deletions: DeletionScheduler::new(messenger.clone(), DELETION_DELAY),
        messenger,
        transcript_dir: Arc::new(config.transcript_dir.clone()),
        expose_error_details: config.expose_error_details,
    })
}
