//! Parameters for the ticket configuration commands.

use std::str::FromStr;

/// Partial update of the ticket channel settings. Only provided fields overwrite.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TicketConfigParams {
    pub parent_category_id: Option<u64>,
    pub support_role_id: Option<u64>,
    pub log_channel_id: Option<u64>,
}

impl TicketConfigParams {
    pub fn is_empty(&self) -> bool {
        self.parent_category_id.is_none()
            && self.support_role_id.is_none()
            && self.log_channel_id.is_none()
    }
}

/// An editable ticket text template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TicketTextField {
    PanelTitle,
    PanelDescription,
    PanelImage,
    ButtonLabel,
    ButtonEmoji,
    WelcomeMessage,
    Footer,
    ResponseTime,
}

impl TicketTextField {
    pub const ALL: [TicketTextField; 8] = [
        Self::PanelTitle,
        Self::PanelDescription,
        Self::PanelImage,
        Self::ButtonLabel,
        Self::ButtonEmoji,
        Self::WelcomeMessage,
        Self::Footer,
        Self::ResponseTime,
    ];

    /// Name used as the slash command choice value.
    pub fn name(self) -> &'static str {
        match self {
            Self::PanelTitle => "panel_title",
            Self::PanelDescription => "panel_description",
            Self::PanelImage => "panel_image",
            Self::ButtonLabel => "button_label",
            Self::ButtonEmoji => "button_emoji",
            Self::WelcomeMessage => "welcome_message",
            Self::Footer => "footer",
            Self::ResponseTime => "response_time",
        }
    }

    /// Whether the field may be cleared by setting it to `none`.
    pub fn is_optional(self) -> bool {
        matches!(self, Self::PanelImage | Self::WelcomeMessage)
    }
}

impl FromStr for TicketTextField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.name() == s)
            .ok_or_else(|| format!("Unknown text field '{}'", s))
    }
}
