mod bot;
mod config;
mod controller;
mod data;
mod error;
mod model;
mod router;
mod scheduler;
mod service;
mod startup;
mod state;
mod util;

use serenity::all::Http;
use std::sync::Arc;

use crate::{config::Config, error::AppError, scheduler::cooldown_sweep};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_logging();

    let config = Config::from_env()?;

    // Services talk to Discord through their own HTTP client, the gateway client builds
    // another one internally
    let http = Arc::new(Http::new(&config.discord_bot_token));
    let state = startup::build_state(&config, http).await?;

    let mut scheduler = cooldown_sweep::start_scheduler(state.cooldowns.clone()).await?;
    let deletions = state.deletions.clone();

    let client = bot::start::init_bot(&config, state).await?;
    let shard_manager = client.shard_manager.clone();

    let mut bot_task = tokio::spawn(async move {
        if let Err(e) = bot::start::start_bot(client).await {
            tracing::error!("Discord bot error: {}", e);
        }
    });

    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown requested");
            shard_manager.shutdown_all().await;
            if let Err(e) = (&mut bot_task).await {
                tracing::error!("Discord bot task failed: {}", e);
            }
        }
        result = &mut bot_task => {
            if let Err(e) = result {
                tracing::error!("Discord bot task failed: {}", e);
            }
        }
    }

    deletions.shutdown().await;
    scheduler.shutdown().await?;

    tracing::info!("Shut down cleanly");

    Ok(())
}
