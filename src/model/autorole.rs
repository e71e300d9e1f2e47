use entity::autorole::AutoRole;

/// Maximum number of autoroles, bounded by five rows of five buttons.
pub const MAX_AUTOROLES: usize = 25;

#[derive(Debug, Clone)]
pub struct CreateAutoRoleParams {
    pub role_id: u64,
    pub label: String,
    pub emoji: Option<String>,
    pub description: Option<String>,
}

impl From<CreateAutoRoleParams> for AutoRole {
    fn from(params: CreateAutoRoleParams) -> Self {
        Self {
            role_id: params.role_id,
            label: params.label,
            emoji: params.emoji,
            description: params.description,
        }
    }
}

/// What a click on an autorole button did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleToggle {
    Added,
    Removed,
}
