//! Ticket category fixtures for creating in-memory test data.
//!
//! Provides fixture functions for creating ticket category records with consistent
//! default values.

use entity::prelude::TicketCategory;

/// Default test category id.
pub const DEFAULT_ID: &str = "support";

/// Default test category label.
pub const DEFAULT_LABEL: &str = "Support";

/// Default test category description.
pub const DEFAULT_DESCRIPTION: &str = "General help";

/// Default test category emoji.
pub const DEFAULT_EMOJI: &str = "🛠️";

/// Creates a ticket category with default values.
///
/// # Default Values
/// - id: `"support"`
/// - label: `"Support"`
/// - description: `"General help"`
/// - emoji: `"🛠️"`
///
/// # Returns
/// - `TicketCategory` - In-memory category record
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::fixture;
///
/// let category = fixture::ticket_category::entity();
/// assert_eq!(category.id, "support");
/// ```
pub fn entity() -> TicketCategory {
    TicketCategory {
        id: DEFAULT_ID.to_string(),
        label: DEFAULT_LABEL.to_string(),
        description: DEFAULT_DESCRIPTION.to_string(),
        emoji: DEFAULT_EMOJI.to_string(),
    }
}

/// Creates a ticket category builder for customization.
///
/// # Returns
/// - `TicketCategoryEntityBuilder` - Builder instance with default values
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::fixture;
///
/// let category = fixture::ticket_category::entity_builder()
///     .id("billing")
///     .label("Billing")
///     .build();
/// ```
pub fn entity_builder() -> TicketCategoryEntityBuilder {
    TicketCategoryEntityBuilder { entity: entity() }
}

/// Builder for ticket category records with custom values.
pub struct TicketCategoryEntityBuilder {
    entity: TicketCategory,
}

impl TicketCategoryEntityBuilder {
    pub fn id(mut self, id: &str) -> Self {
        self.entity.id = id.to_string();
        self
    }

    pub fn label(mut self, label: &str) -> Self {
        self.entity.label = label.to_string();
        self
    }

    pub fn description(mut self, description: &str) -> Self {
        self.entity.description = description.to_string();
        self
    }

    pub fn emoji(mut self, emoji: &str) -> Self {
        self.entity.emoji = emoji.to_string();
        self
    }

    pub fn build(self) -> TicketCategory {
        self.entity
    }
}
