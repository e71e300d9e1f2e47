use serde::{Deserialize, Serialize};

/// Greeting posted when a member joins the guild.
///
/// `title` and `message` accept the `{user}`, `{server}` and `{memberCount}`
/// placeholders. Nothing is posted while `channel_id` is unset.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WelcomeSettings {
    pub channel_id: Option<u64>,
    pub title: String,
    pub message: String,
    pub image: Option<String>,
}

impl Default for WelcomeSettings {
    fn default() -> Self {
        Self {
            channel_id: None,
            title: "Welcome to {server}!".to_string(),
            message: "Hey {user}, you are member number {memberCount}. Enjoy your stay!"
                .to_string(),
            image: None,
        }
    }
}
