use serde::{Deserialize, Serialize};

/// Customizable strings used by the ticket panel and new ticket channels.
///
/// `welcome_message`, `footer` and `response_time` accept the `{user}`,
/// `{server}` and `{memberCount}` placeholders.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TicketTexts {
    pub panel_title: String,
    pub panel_description: String,
    pub panel_image: Option<String>,
    pub button_label: String,
    pub button_emoji: String,
    /// Posted in the ticket channel right after the summary, if set.
    pub welcome_message: Option<String>,
    pub footer: String,
    pub response_time: String,
}

impl Default for TicketTexts {
    fn default() -> Self {
        Self {
            panel_title: "Support".to_string(),
            panel_description: "Need help? Press the button below to open a ticket and our \
                                support team will get back to you."
                .to_string(),
            panel_image: None,
            button_label: "Open ticket".to_string(),
            button_emoji: "🎫".to_string(),
            welcome_message: Some(
                "Hi {user}, thanks for contacting the {server} staff. Please describe your \
                 issue while you wait."
                    .to_string(),
            ),
            footer: "{server} support".to_string(),
            response_time: "We usually answer within 24 hours.".to_string(),
        }
    }
}
