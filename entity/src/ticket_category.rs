use serde::{Deserialize, Serialize};

/// A ticket intake classification shown in the category chooser.
///
/// Categories are kept in insertion order, which is also the order they are
/// presented to users. The `id` is the unique key and is what gets stored on a
/// ticket; the remaining fields are display only.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketCategory {
    /// Slug used as the select menu value and stored on tickets.
    pub id: String,
    /// Human readable name shown in menus and embeds.
    pub label: String,
    /// Short explanation shown under the label in the chooser.
    pub description: String,
    /// Unicode emoji shown next to the label.
    pub emoji: String,
}
