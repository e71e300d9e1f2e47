use serde::{Deserialize, Serialize};

use crate::{
    autorole::AutoRole, ticket_category::TicketCategory, ticket_texts::TicketTexts,
    welcome::WelcomeSettings,
};

/// Root of the settings document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BotSettings {
    /// Prefix for message commands such as `!hug`.
    pub prefix: String,
    pub tickets: TicketSettings,
    pub welcome: WelcomeSettings,
    pub autoroles: Vec<AutoRole>,
}

impl Default for BotSettings {
    fn default() -> Self {
        Self {
            prefix: "!".to_string(),
            tickets: TicketSettings::default(),
            welcome: WelcomeSettings::default(),
            autoroles: Vec::new(),
        }
    }
}

/// Ticket system configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TicketSettings {
    /// Channel category new ticket channels are created under.
    pub parent_category_id: Option<u64>,
    /// Role allowed to claim tickets and change their priority.
    pub support_role_id: Option<u64>,
    /// Channel receiving one audit message per ticket transition.
    pub log_channel_id: Option<u64>,
    /// Intake categories in display order.
    pub categories: Vec<TicketCategory>,
    pub texts: TicketTexts,
}

impl Default for TicketSettings {
    fn default() -> Self {
        Self {
            parent_category_id: None,
            support_role_id: None,
            log_channel_id: None,
            categories: vec![
                TicketCategory {
                    id: "soporte".to_string(),
                    label: "Support".to_string(),
                    description: "General help with the server or its services".to_string(),
                    emoji: "🛠️".to_string(),
                },
                TicketCategory {
                    id: "reportes".to_string(),
                    label: "Reports".to_string(),
                    description: "Report a member or a rule violation".to_string(),
                    emoji: "🚨".to_string(),
                },
            ],
            texts: TicketTexts::default(),
        }
    }
}
