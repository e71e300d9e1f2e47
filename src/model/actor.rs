use serenity::all::{Member, Permissions, RoleId, User, UserId};

/// The guild member who triggered an interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    pub user_id: UserId,
    pub roles: Vec<RoleId>,
    pub is_admin: bool,
}

impl Actor {
    /// Builds an actor from interaction data.
    ///
    /// Interactions sent from guilds carry the member with resolved permissions, in
    /// DMs only the user is present and the actor has no roles.
    pub fn from_interaction(user: &User, member: Option<&Member>) -> Self {
        match member {
            Some(member) => Self {
                user_id: user.id,
                roles: member.roles.clone(),
                is_admin: member
                    .permissions
                    .is_some_and(|perms| perms.contains(Permissions::ADMINISTRATOR)),
            },
            None => Self {
                user_id: user.id,
                roles: Vec::new(),
                is_admin: false,
            },
        }
    }

    /// Whether the actor counts as support staff.
    ///
    /// Administrators always qualify. Otherwise the configured support role is
    /// required, and nobody qualifies while no support role is configured.
    pub fn is_support(&self, support_role_id: Option<u64>) -> bool {
        self.is_admin
            || support_role_id.is_some_and(|role_id| self.roles.contains(&RoleId::new(role_id)))
    }
}
