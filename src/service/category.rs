//! Ticket category registry.
//!
//! Categories live in the settings document in display order. Every successful
//! mutation rewrites the settings file; rejected mutations leave both the file and the
//! in-memory settings untouched.

use entity::prelude::TicketCategory;

use crate::{
    data::settings::SettingsRepository,
    error::{ticket::TicketError, AppError},
    model::category::{CreateTicketCategoryParams, UpdateTicketCategoryParams, MAX_CATEGORIES},
};

/// Service managing the ordered list of ticket categories.
pub struct TicketCategoryService<'a> {
    settings: &'a SettingsRepository,
}

impl<'a> TicketCategoryService<'a> {
    /// Creates a new TicketCategoryService instance.
    ///
    /// # Arguments
    /// - `settings` - Settings repository holding the categories
    ///
    /// # Returns
    /// - `TicketCategoryService` - New service instance
    pub fn new(settings: &'a SettingsRepository) -> Self {
        Self { settings }
    }

    /// Appends a category at the end of the display order.
    ///
    /// # Arguments
    /// - `params` - New category; the id is trimmed and lowercased
    ///
    /// # Returns
    /// - `Ok(TicketCategory)` - The stored category
    /// - `Err(AppError::BadRequest)` - Id or label is empty
    /// - `Err(TicketError::DuplicateCategory)` - A category with that id exists
    /// - `Err(TicketError::CategoryLimit)` - The registry is full
    pub async fn add(&self, params: CreateTicketCategoryParams) -> Result<TicketCategory, AppError> {
        let mut category = TicketCategory::from(params);
        category.id = category.id.trim().to_lowercase();
        category.label = category.label.trim().to_string();

        if category.id.is_empty() || category.id.contains(char::is_whitespace) {
            return Err(AppError::BadRequest(
                "Category id must be a single word.".to_string(),
            ));
        }
        if category.label.is_empty() {
            return Err(AppError::BadRequest(
                "Category label must not be empty.".to_string(),
            ));
        }

        let stored = self
            .settings
            .update(|settings| {
                let categories = &mut settings.tickets.categories;

                if categories.iter().any(|existing| existing.id == category.id) {
                    return Err(TicketError::DuplicateCategory(category.id.clone()));
                }
                if categories.len() >= MAX_CATEGORIES {
                    return Err(TicketError::CategoryLimit(MAX_CATEGORIES));
                }

                categories.push(category.clone());
                Ok(category)
            })
            .await?;

        tracing::info!("Added ticket category '{}'", stored.id);

        Ok(stored)
    }

    /// Overwrites the provided fields of a category.
    ///
    /// An update without any field returns the category unchanged without rewriting
    /// the settings file.
    ///
    /// # Returns
    /// - `Ok(TicketCategory)` - The category after the update
    /// - `Err(TicketError::UnknownCategory)` - No category with that id
    pub async fn edit(
        &self,
        id: &str,
        params: UpdateTicketCategoryParams,
    ) -> Result<TicketCategory, AppError> {
        if params.is_empty() {
            return self
                .get(id)
                .await
                .ok_or_else(|| TicketError::UnknownCategory(id.to_string()).into());
        }

        let updated = self
            .settings
            .update(|settings| {
                let category = settings
                    .tickets
                    .categories
                    .iter_mut()
                    .find(|category| category.id == id)
                    .ok_or_else(|| TicketError::UnknownCategory(id.to_string()))?;

                params.apply(category);
                Ok::<_, TicketError>(category.clone())
            })
            .await?;

        tracing::info!("Updated ticket category '{}'", updated.id);

        Ok(updated)
    }

    /// Removes a category.
    ///
    /// Tickets already created in the category keep its id as a plain label.
    ///
    /// # Returns
    /// - `Ok(TicketCategory)` - The removed category
    /// - `Err(TicketError::UnknownCategory)` - No category with that id
    pub async fn remove(&self, id: &str) -> Result<TicketCategory, AppError> {
        let removed = self
            .settings
            .update(|settings| {
                let categories = &mut settings.tickets.categories;
                let index = categories
                    .iter()
                    .position(|category| category.id == id)
                    .ok_or_else(|| TicketError::UnknownCategory(id.to_string()))?;

                Ok::<_, TicketError>(categories.remove(index))
            })
            .await?;

        tracing::info!("Removed ticket category '{}'", removed.id);

        Ok(removed)
    }

    pub async fn list(&self) -> Vec<TicketCategory> {
        self.settings
            .read(|settings| settings.tickets.categories.clone())
            .await
    }

    async fn get(&self, id: &str) -> Option<TicketCategory> {
        self.settings
            .read(|settings| {
                settings
                    .tickets
                    .categories
                    .iter()
                    .find(|category| category.id == id)
                    .cloned()
            })
            .await
    }
}
