//! Component custom ids.
//!
//! Buttons, select menus and modals carry a custom id that routes the resulting
//! interaction back to a controller. Ids are `:` separated, with an optional trailing
//! parameter, e.g. `ticket:priority:high` or `autorole:1234`.

use serenity::all::RoleId;

use crate::model::ticket::Priority;

/// A parsed component or modal custom id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComponentAction {
    /// Panel button starting the intake flow.
    OpenTicket,
    /// Category select menu.
    ChooseCategory,
    /// Intake modal for the chosen category.
    SubmitTicket { category: String },
    Close,
    Claim,
    /// Priority button, carrying the priority it displayed when rendered.
    Priority(Priority),
    Reopen,
    Delete,
    Transcript,
    ToggleAutoRole(RoleId),
    /// Embed builder modal.
    SubmitEmbed,
}

impl ComponentAction {
    pub fn custom_id(&self) -> String {
        match self {
            Self::OpenTicket => "ticket:open".to_string(),
            Self::ChooseCategory => "ticket:category".to_string(),
            Self::SubmitTicket { category } => format!("ticket:modal:{}", category),
            Self::Close => "ticket:close".to_string(),
            Self::Claim => "ticket:claim".to_string(),
            Self::Priority(priority) => format!("ticket:priority:{}", priority.as_str()),
            Self::Reopen => "ticket:reopen".to_string(),
            Self::Delete => "ticket:delete".to_string(),
            Self::Transcript => "ticket:transcript".to_string(),
            Self::ToggleAutoRole(role_id) => format!("autorole:{}", role_id),
            Self::SubmitEmbed => "embed:modal".to_string(),
        }
    }

    /// Parses a custom id, returning `None` for ids this bot did not produce.
    pub fn parse(custom_id: &str) -> Option<Self> {
        let mut parts = custom_id.splitn(3, ':');
        let scope = parts.next()?;
        let name = parts.next()?;
        let param = parts.next();

        let action = match (scope, name, param) {
            ("ticket", "open", None) => Self::OpenTicket,
            ("ticket", "category", None) => Self::ChooseCategory,
            ("ticket", "modal", Some(category)) if !category.is_empty() => Self::SubmitTicket {
                category: category.to_string(),
            },
            ("ticket", "close", None) => Self::Close,
            ("ticket", "claim", None) => Self::Claim,
            ("ticket", "priority", Some(priority)) => Self::Priority(priority.parse().ok()?),
            ("ticket", "reopen", None) => Self::Reopen,
            ("ticket", "delete", None) => Self::Delete,
            ("ticket", "transcript", None) => Self::Transcript,
            ("autorole", role_id, None) => {
                Self::ToggleAutoRole(RoleId::new(role_id.parse().ok().filter(|id| *id != 0)?))
            }
            ("embed", "modal", None) => Self::SubmitEmbed,
            _ => return None,
        };

        Some(action)
    }
}
