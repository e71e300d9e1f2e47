//! Permission overwrites for ticket channels.

use serenity::all::{
    GuildId, PermissionOverwrite, PermissionOverwriteType, Permissions, RoleId, UserId,
};

use super::MemberAccess;

/// Permissions of members allowed to participate in a ticket.
fn participant() -> Permissions {
    Permissions::VIEW_CHANNEL | Permissions::SEND_MESSAGES | Permissions::READ_MESSAGE_HISTORY
}

/// Permissions of support staff and the bot inside a ticket.
fn staff() -> Permissions {
    participant() | Permissions::MANAGE_MESSAGES
}

/// Builds the overwrite applied to a member for the given access level.
pub fn member_overwrite(user_id: UserId, access: MemberAccess) -> PermissionOverwrite {
    let (allow, deny) = match access {
        MemberAccess::Full => (participant(), Permissions::empty()),
        MemberAccess::ReadOnly => (
            Permissions::VIEW_CHANNEL | Permissions::READ_MESSAGE_HISTORY,
            Permissions::SEND_MESSAGES,
        ),
    };

    PermissionOverwrite {
        allow,
        deny,
        kind: PermissionOverwriteType::Member(user_id),
    }
}

/// Builds the overwrites for a new ticket channel.
///
/// The channel is hidden from `@everyone` (whose role id equals the guild id), and
/// opened to the creator, the bot and the support role if one is configured.
///
/// # Arguments
/// - `guild_id` - Guild the channel is created in
/// - `creator_id` - Member who opened the ticket
/// - `bot_user_id` - The bot's own user
/// - `support_role_id` - Configured support role, if any
///
/// # Returns
/// - `Vec<PermissionOverwrite>` - Overwrites in the order everyone, creator, bot, support
pub fn ticket_channel_overwrites(
    guild_id: GuildId,
    creator_id: UserId,
    bot_user_id: UserId,
    support_role_id: Option<RoleId>,
) -> Vec<PermissionOverwrite> {
    let mut overwrites = vec![
        PermissionOverwrite {
            allow: Permissions::empty(),
            deny: Permissions::VIEW_CHANNEL,
            kind: PermissionOverwriteType::Role(RoleId::new(guild_id.get())),
        },
        member_overwrite(creator_id, MemberAccess::Full),
        PermissionOverwrite {
            allow: staff(),
            deny: Permissions::empty(),
            kind: PermissionOverwriteType::Member(bot_user_id),
        },
    ];

    if let Some(role_id) = support_role_id {
        overwrites.push(PermissionOverwrite {
            allow: staff(),
            deny: Permissions::empty(),
            kind: PermissionOverwriteType::Role(role_id),
        });
    }

    overwrites
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_only_denies_sending() {
        let overwrite = member_overwrite(UserId::new(7), MemberAccess::ReadOnly);

        assert!(overwrite.deny.contains(Permissions::SEND_MESSAGES));
        assert!(overwrite.allow.contains(Permissions::VIEW_CHANNEL));
        assert!(!overwrite.allow.contains(Permissions::SEND_MESSAGES));
    }

    #[test]
    fn ticket_channel_is_hidden_from_everyone() {
        let overwrites =
            ticket_channel_overwrites(GuildId::new(1), UserId::new(7), UserId::new(2), None);

        assert_eq!(overwrites.len(), 3);
        assert_eq!(
            overwrites[0].kind,
            PermissionOverwriteType::Role(RoleId::new(1))
        );
        assert!(overwrites[0].deny.contains(Permissions::VIEW_CHANNEL));
    }

    #[test]
    fn support_role_gets_staff_permissions() {
        let overwrites = ticket_channel_overwrites(
            GuildId::new(1),
            UserId::new(7),
            UserId::new(2),
            Some(RoleId::new(40)),
        );

        let support = overwrites
            .iter()
            .find(|o| o.kind == PermissionOverwriteType::Role(RoleId::new(40)))
            .unwrap();
        assert!(support.allow.contains(Permissions::MANAGE_MESSAGES));
    }
}
