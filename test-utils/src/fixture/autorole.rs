//! Autorole fixtures for creating in-memory test data.

use entity::prelude::AutoRole;

/// Default test role id.
pub const DEFAULT_ROLE_ID: u64 = 555_000_111;

/// Default test autorole label.
pub const DEFAULT_LABEL: &str = "Announcements";

/// Creates an autorole entry with default values.
///
/// # Default Values
/// - role_id: `555000111`
/// - label: `"Announcements"`
/// - emoji: `None`
/// - description: `None`
///
/// # Returns
/// - `AutoRole` - In-memory autorole record
pub fn entity() -> AutoRole {
    AutoRole {
        role_id: DEFAULT_ROLE_ID,
        label: DEFAULT_LABEL.to_string(),
        emoji: None,
        description: None,
    }
}

/// Creates an autorole builder for customization.
///
/// # Returns
/// - `AutoRoleEntityBuilder` - Builder instance with default values
pub fn entity_builder() -> AutoRoleEntityBuilder {
    AutoRoleEntityBuilder { entity: entity() }
}

/// Builder for autorole records with custom values.
pub struct AutoRoleEntityBuilder {
    entity: AutoRole,
}

impl AutoRoleEntityBuilder {
    pub fn role_id(mut self, role_id: u64) -> Self {
        self.entity.role_id = role_id;
        self
    }

    pub fn label(mut self, label: &str) -> Self {
        self.entity.label = label.to_string();
        self
    }

    pub fn emoji(mut self, emoji: Option<&str>) -> Self {
        self.entity.emoji = emoji.map(str::to_string);
        self
    }

    pub fn description(mut self, description: Option<&str>) -> Self {
        self.entity.description = description.map(str::to_string);
        self
    }

    pub fn build(self) -> AutoRole {
        self.entity
    }
}
