pub use super::autorole::AutoRole;
pub use super::settings::{BotSettings, TicketSettings};
pub use super::ticket_category::TicketCategory;
pub use super::ticket_texts::TicketTexts;
pub use super::welcome::WelcomeSettings;
