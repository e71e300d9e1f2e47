use std::path::PathBuf;

use crate::error::{config::ConfigError, AppError};

const DEFAULT_SETTINGS_PATH: &str = "settings.json";
const DEFAULT_TRANSCRIPT_DIR: &str = "transcripts";

pub struct Config {
    pub discord_bot_token: String,
    pub discord_guild_id: u64,

    pub settings_path: PathBuf,
    pub transcript_dir: PathBuf,

    /// Append underlying error text to generic failure replies.
    pub expose_error_details: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let discord_guild_id = required("DISCORD_GUILD_ID")?;

        Ok(Self {
            discord_bot_token: required("DISCORD_BOT_TOKEN")?,
            discord_guild_id: discord_guild_id.parse().map_err(|_| {
                ConfigError::InvalidEnvVar {
                    name: "DISCORD_GUILD_ID".to_string(),
                    value: discord_guild_id.clone(),
                }
            })?,
            settings_path: std::env::var("BOT_SETTINGS_PATH")
                .unwrap_or_else(|_| DEFAULT_SETTINGS_PATH.to_string())
                .into(),
            transcript_dir: std::env::var("TRANSCRIPT_DIR")
                .unwrap_or_else(|_| DEFAULT_TRANSCRIPT_DIR.to_string())
                .into(),
            expose_error_details: parse_flag(
                "EXPOSE_ERROR_DETAILS",
                std::env::var("EXPOSE_ERROR_DETAILS").ok(),
            )?,
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

/// Parses an optional boolean flag, treating an unset variable as `false`.
fn parse_flag(name: &str, value: Option<String>) -> Result<bool, ConfigError> {
    match value.as_deref().map(str::trim) {
        None | Some("") => Ok(false),
        Some("1") | Some("true") | Some("yes") => Ok(true),
        Some("0") | Some("false") | Some("no") => Ok(false),
        Some(other) => Err(ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value: other.to_string(),
        }),
    }
}
