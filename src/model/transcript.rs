use chrono::{DateTime, Utc};
use serenity::all::Message;

/// Maximum number of messages included in a transcript.
pub const TRANSCRIPT_MESSAGE_LIMIT: u8 = 100;

/// One message as it appears in a ticket transcript.
#[derive(Debug, Clone, PartialEq)]
pub struct TranscriptEntry {
    pub author_name: String,
    pub author_id: u64,
    pub is_bot: bool,
    pub content: String,
    /// Title of the first embed, if the message carried any.
    pub embed_title: Option<String>,
    pub attachment_urls: Vec<String>,
    pub timestamp: DateTime<Utc>,
}

impl From<&Message> for TranscriptEntry {
    fn from(message: &Message) -> Self {
        Self {
            author_name: message.author.name.clone(),
            author_id: message.author.id.get(),
            is_bot: message.author.bot,
            content: message.content.clone(),
            embed_title: message.embeds.first().and_then(|embed| embed.title.clone()),
            attachment_urls: message
                .attachments
                .iter()
                .map(|attachment| attachment.url.clone())
                .collect(),
            timestamp: message.timestamp.to_utc(),
        }
    }
}

/// Rendered transcript ready to be attached and saved.
#[derive(Debug, Clone)]
pub struct Transcript {
    pub file_name: String,
    pub html: String,
    pub message_count: usize,
}
