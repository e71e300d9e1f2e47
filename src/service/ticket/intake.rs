use serenity::all::{CreateActionRow, CreateModal, UserId};

use super::{builder, TicketService};
use crate::{
    data::cooldown::remaining_secs,
    error::{ticket::TicketError, AppError},
};

impl<'a> TicketService<'a> {
    /// Starts a ticket intake and returns the category chooser.
    ///
    /// The cooldown is only recorded once every other check passed, so a user who is
    /// turned away because of an open ticket can retry right after closing it.
    ///
    /// # Arguments
    /// - `user_id` - Member who pressed the open button
    ///
    /// # Returns
    /// - `Ok(CreateActionRow)` - Select menu listing the categories
    /// - `Err(TicketError::CooldownActive)` - The user opened an intake less than a minute ago
    /// - `Err(TicketError::AlreadyOpen)` - The user still has an open ticket
    /// - `Err(TicketError::NoCategories)` - No category is configured
    pub async fn open_intake(&self, user_id: UserId) -> Result<CreateActionRow, AppError> {
        if let Some(remaining) = self.state.cooldowns.remaining(user_id).await {
            return Err(TicketError::CooldownActive {
                remaining_secs: remaining_secs(remaining),
            }
            .into());
        }

        if let Some(open) = self.state.tickets.find_open_by_creator(user_id).await {
            return Err(TicketError::AlreadyOpen {
                channel_id: open.channel_id,
            }
            .into());
        }

        let categories = self
            .state
            .settings
            .read(|settings| settings.tickets.categories.clone())
            .await;
        if categories.is_empty() {
            return Err(TicketError::NoCategories.into());
        }

        self.state
            .cooldowns
            .try_acquire(user_id)
            .await
            .map_err(|remaining| TicketError::CooldownActive {
                remaining_secs: remaining_secs(remaining),
            })?;

        tracing::debug!("User {} started a ticket intake", user_id);

        Ok(builder::category_menu(&categories))
    }

    /// Builds the creation modal for the chosen category.
    ///
    /// # Returns
    /// - `Ok(CreateModal)` - Modal asking for subject and description
    /// - `Err(TicketError::UnknownCategory)` - The category was removed meanwhile
    pub async fn creation_modal(&self, category_id: &str) -> Result<CreateModal, AppError> {
        let category = self
            .find_category(category_id)
            .await
            .ok_or_else(|| TicketError::UnknownCategory(category_id.to_string()))?;

        Ok(builder::creation_modal(&category))
    }
}
