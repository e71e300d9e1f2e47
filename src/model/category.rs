//! Ticket category parameters.
//!
//! The category record itself is part of the persisted settings schema
//! (`entity::ticket_category::TicketCategory`); this module holds the params used by
//! the registry operations.

use entity::ticket_category::TicketCategory;

/// Maximum number of categories, bounded by Discord's select menu option limit.
pub const MAX_CATEGORIES: usize = 25;

#[derive(Debug, Clone)]
pub struct CreateTicketCategoryParams {
    pub id: String,
    pub label: String,
    pub description: String,
    pub emoji: String,
}

impl From<CreateTicketCategoryParams> for TicketCategory {
    fn from(params: CreateTicketCategoryParams) -> Self {
        Self {
            id: params.id,
            label: params.label,
            description: params.description,
            emoji: params.emoji,
        }
    }
}

/// Partial update of a category. Only provided fields overwrite.
#[derive(Debug, Clone, Default)]
pub struct UpdateTicketCategoryParams {
    pub label: Option<String>,
    pub description: Option<String>,
    pub emoji: Option<String>,
}

impl UpdateTicketCategoryParams {
    pub fn is_empty(&self) -> bool {
        self.label.is_none() && self.description.is_none() && self.emoji.is_none()
    }

    /// Applies the provided fields to `category`.
    pub fn apply(self, category: &mut TicketCategory) {
        if let Some(label) = self.label {
            category.label = label;
        }
        if let Some(description) = self.description {
            category.description = description;
        }
        if let Some(emoji) = self.emoji {
            category.emoji = emoji;
        }
    }
}
