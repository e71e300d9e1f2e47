//! Test factory for creating Serenity Member objects.

use serenity::all::{Member, Permissions};

use super::user::user_json;

/// Creates a test Serenity guild Member.
///
/// Interaction payloads carry the member's resolved permissions; `admin` controls
/// whether those include `ADMINISTRATOR`.
///
/// # Arguments
/// - `user_id` - Discord user ID (snowflake)
/// - `name` - Username
/// - `role_ids` - Roles held by the member
/// - `admin` - Whether the member has administrator permission
///
/// # Returns
/// - `Member` - A valid Serenity Member struct for testing
///
/// # Panics
/// - If the JSON cannot be deserialized into a Member (indicates invalid test data)
pub fn create_test_member(user_id: u64, name: &str, role_ids: &[u64], admin: bool) -> Member {
    let permissions = if admin {
        Permissions::ADMINISTRATOR
    } else {
        Permissions::SEND_MESSAGES | Permissions::VIEW_CHANNEL
    };

    serde_json::from_value(serde_json::json!({
        "user": user_json(user_id, name, false),
        "nick": null,
        "avatar": null,
        "roles": role_ids.iter().map(u64::to_string).collect::<Vec<_>>(),
        "joined_at": "2024-01-01T00:00:00.000000+00:00",
        "premium_since": null,
        "deaf": false,
        "mute": false,
        "flags": 0,
        "pending": false,
        "permissions": permissions.bits().to_string(),
        "communication_disabled_until": null,
        "guild_id": "1",
    }))
    .expect("Failed to create test member - invalid JSON structure")
}
