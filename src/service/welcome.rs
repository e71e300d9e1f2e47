//! Welcome messages for new members.

use entity::prelude::WelcomeSettings;
use serenity::all::{ChannelId, CreateEmbed, CreateMessage, MessageId, UserId};

use crate::{
    error::AppError,
    state::AppState,
    util::template::{render, TemplateContext},
};

const WELCOME_COLOR: u32 = 0x57f287;

pub struct WelcomeService<'a> {
    state: &'a AppState,
}

impl<'a> WelcomeService<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    /// Posts the welcome embed for `user_id` into the configured welcome channel.
    ///
    /// # Arguments
    /// - `user_id` - Member to greet
    /// - `member_count` - Current guild member count, if known
    ///
    /// # Returns
    /// - `Ok(Some(MessageId))` - The posted welcome message
    /// - `Ok(None)` - No welcome channel is configured
    /// - `Err(AppError)` - Posting the message failed
    pub async fn greet(
        &self,
        user_id: UserId,
        member_count: Option<u64>,
    ) -> Result<Option<MessageId>, AppError> {
        let welcome = self.state.settings.read(|s| s.welcome.clone()).await;
        let Some(channel_id) = welcome.channel_id else {
            return Ok(None);
        };

        let context = TemplateContext {
            user: format!("<@{}>", user_id),
            server: self.state.guild_name.clone(),
            member_count,
        };
        let message = CreateMessage::new()
            .content(format!("<@{}>", user_id))
            .embed(welcome_embed(&welcome, &context));

        let message_id = self
            .state
            .messenger
            .send_message(ChannelId::new(channel_id), message)
            .await?;

        tracing::info!("Welcomed {} in {}", user_id, channel_id);

        Ok(Some(message_id))
    }

    /// Sets or clears the welcome channel.
    pub async fn set_channel(&self, channel_id: Option<ChannelId>) -> Result<(), AppError> {
        self.state
            .settings
            .update(|settings| {
                settings.welcome.channel_id = channel_id.map(ChannelId::get);
                Ok::<_, AppError>(())
            })
            .await?;

        tracing::info!("Welcome channel set to {:?}", channel_id);

        Ok(())
    }

    /// Replaces the provided parts of the welcome message.
    ///
    /// # Arguments
    /// - `title` - New title template
    /// - `message` - New message template
    /// - `image` - New image URL, `none` removes the image
    ///
    /// # Returns
    /// - `Ok(WelcomeSettings)` - Settings after the update
    /// - `Err(AppError::BadRequest)` - Nothing provided, an empty text or an invalid image URL
    pub async fn set_message(
        &self,
        title: Option<String>,
        message: Option<String>,
        image: Option<String>,
    ) -> Result<WelcomeSettings, AppError> {
        if title.is_none() && message.is_none() && image.is_none() {
            return Err(AppError::BadRequest(
                "Provide a title, a message or an image.".to_string(),
            ));
        }
        let title = title.map(|t| t.trim().to_string());
        let message = message.map(|m| m.trim().to_string());
        if title.as_deref() == Some("") || message.as_deref() == Some("") {
            return Err(AppError::BadRequest(
                "Welcome texts cannot be empty.".to_string(),
            ));
        }
        let image = match image.as_deref().map(str::trim) {
            None => None,
            Some(value) if value.eq_ignore_ascii_case("none") => Some(None),
            Some(value) if value.starts_with("https://") || value.starts_with("http://") => {
                Some(Some(value.to_string()))
            }
            Some(_) => {
                return Err(AppError::BadRequest(
                    "The image must be an http(s) URL.".to_string(),
                ))
            }
        };

        let updated = self
            .state
            .settings
            .update(|settings| {
                let welcome = &mut settings.welcome;
                if let Some(title) = title {
                    welcome.title = title;
                }
                if let Some(message) = message {
                    welcome.message = message;
                }
                if let Some(image) = image {
                    welcome.image = image;
                }
                Ok::<_, AppError>(welcome.clone())
            })
            .await?;

        tracing::info!("Welcome message updated");

        Ok(updated)
    }
}

/// Renders the welcome embed.
pub fn welcome_embed(welcome: &WelcomeSettings, context: &TemplateContext) -> CreateEmbed {
    let mut embed = CreateEmbed::new()
        .title(render(&welcome.title, context))
        .description(render(&welcome.message, context))
        .color(WELCOME_COLOR);
    if let Some(image) = &welcome.image {
        embed = embed.image(image);
    }

    embed
}
