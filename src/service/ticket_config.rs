//! Ticket channel settings and text templates.

use entity::prelude::{TicketSettings, TicketTexts};

use crate::{
    data::settings::SettingsRepository,
    error::AppError,
    model::ticket_config::{TicketConfigParams, TicketTextField},
};

/// Value that clears an optional text field.
const CLEAR_VALUE: &str = "none";

/// Maximum length of a text template, Discord's embed description limit.
const TEXT_MAX_LEN: usize = 4096;

pub struct TicketConfigService<'a> {
    settings: &'a SettingsRepository,
}

impl<'a> TicketConfigService<'a> {
    pub fn new(settings: &'a SettingsRepository) -> Self {
        Self { settings }
    }

    /// Updates the provided ticket channel settings.
    ///
    /// # Arguments
    /// - `params` - Settings to overwrite, absent fields stay as they are
    ///
    /// # Returns
    /// - `Ok(TicketSettings)` - Ticket settings after the update
    /// - `Err(AppError::BadRequest)` - No setting was provided
    /// - `Err(AppError::IoErr)` - Settings file could not be written
    pub async fn configure(&self, params: TicketConfigParams) -> Result<TicketSettings, AppError> {
        if params.is_empty() {
            return Err(AppError::BadRequest(
                "Provide at least one setting to change.".to_string(),
            ));
        }

        let updated = self
            .settings
            .update(|settings| {
                let tickets = &mut settings.tickets;
                if let Some(id) = params.parent_category_id {
                    tickets.parent_category_id = Some(id);
                }
                if let Some(id) = params.support_role_id {
                    tickets.support_role_id = Some(id);
                }
                if let Some(id) = params.log_channel_id {
                    tickets.log_channel_id = Some(id);
                }
                Ok::<_, AppError>(tickets.clone())
            })
            .await?;

        tracing::info!(
            "Ticket settings updated: parent {:?}, support role {:?}, log channel {:?}",
            updated.parent_category_id,
            updated.support_role_id,
            updated.log_channel_id
        );

        Ok(updated)
    }

    /// Replaces one ticket text template.
    ///
    /// Optional fields are cleared with the value `none`.
    ///
    /// # Arguments
    /// - `field` - Template to replace
    /// - `value` - New template text, may contain `{user}`, `{server}` and `{memberCount}`
    ///
    /// # Returns
    /// - `Ok(TicketTexts)` - Texts after the update
    /// - `Err(AppError::BadRequest)` - Empty or too long value, or clearing a required field
    pub async fn set_text(
        &self,
        field: TicketTextField,
        value: &str,
    ) -> Result<TicketTexts, AppError> {
        let value = value.trim();
        let cleared = value.eq_ignore_ascii_case(CLEAR_VALUE);

        if value.is_empty() || (cleared && !field.is_optional()) {
            return Err(AppError::BadRequest(format!(
                "The {} text cannot be empty.",
                field.name()
            )));
        }
        if value.chars().count() > TEXT_MAX_LEN {
            return Err(AppError::BadRequest(format!(
                "Texts are limited to {} characters.",
                TEXT_MAX_LEN
            )));
        }

        let new_value = (!cleared).then(|| value.to_string());
        let texts = self
            .settings
            .update(|settings| {
                let texts = &mut settings.tickets.texts;
                let required = new_value.clone().unwrap_or_default();
                match field {
                    TicketTextField::PanelTitle => texts.panel_title = required,
                    TicketTextField::PanelDescription => texts.panel_description = required,
                    TicketTextField::PanelImage => texts.panel_image = new_value,
                    TicketTextField::ButtonLabel => texts.button_label = required,
                    TicketTextField::ButtonEmoji => texts.button_emoji = required,
                    TicketTextField::WelcomeMessage => texts.welcome_message = new_value,
                    TicketTextField::Footer => texts.footer = required,
                    TicketTextField::ResponseTime => texts.response_time = required,
                }
                Ok::<_, AppError>(texts.clone())
            })
            .await?;

        tracing::info!("Ticket text '{}' updated", field.name());

        Ok(texts)
    }
}
