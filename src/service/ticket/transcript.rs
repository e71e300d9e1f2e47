//! HTML transcripts of ticket channels.

use chrono::{DateTime, Utc};
use serenity::all::{ChannelId, CreateAttachment};
use std::fmt::Write;

use super::{
    audit::{AuditAction, AuditEntry},
    TicketService,
};
use crate::{
    error::{ticket::TicketError, AppError},
    model::{
        actor::Actor,
        ticket::Ticket,
        transcript::{Transcript, TranscriptEntry, TRANSCRIPT_MESSAGE_LIMIT},
    },
    util::html::escape,
};

const STYLE: &str = "body{font-family:sans-serif;background:#313338;color:#dbdee1;margin:2em}\
.message{margin:0 0 1em}.author{font-weight:bold;color:#f2f3f5}\
.bot{color:#5865f2}.time{font-size:.8em;color:#949ba4;margin-left:.5em}\
.content{white-space:pre-wrap}.embed{border-left:4px solid #5865f2;padding-left:.5em}";

/// Renders the transcript document for a ticket.
///
/// Message text is HTML escaped. Bot messages that carry an embed are reduced to the
/// embed title, attachments are listed as links below the message.
///
/// # Arguments
/// - `ticket` - Ticket the messages belong to
/// - `entries` - Channel messages, oldest first
/// - `generated_at` - Generation time shown in the header
///
/// # Returns
/// - `String` - Complete HTML document
pub fn render_transcript(
    ticket: &Ticket,
    entries: &[TranscriptEntry],
    generated_at: DateTime<Utc>,
) -> String {
    let mut html = String::new();

    let _ = write!(
        html,
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n\
         <title>Ticket #{number}</title>\n<style>{STYLE}</style>\n</head>\n<body>\n\
         <h1>Ticket #{number}: {subject}</h1>\n\
         <p>Category: {category} · Opened by {creator} · Generated {generated}</p>\n<hr>\n",
        number = ticket.number,
        subject = escape(&ticket.subject),
        category = escape(&ticket.category),
        creator = ticket.creator_id,
        generated = generated_at.format("%Y-%m-%d %H:%M UTC"),
    );

    for entry in entries {
        let author_class = if entry.is_bot { "author bot" } else { "author" };
        let _ = write!(
            html,
            "<div class=\"message\">\n<span class=\"{}\">{}</span>\
             <span class=\"time\">{}</span>\n",
            author_class,
            escape(&entry.author_name),
            entry.timestamp.format("%Y-%m-%d %H:%M:%S"),
        );

        match (&entry.embed_title, entry.is_bot) {
            (Some(title), true) => {
                let _ = writeln!(html, "<div class=\"embed\">{}</div>", escape(title));
            }
            _ => {
                if !entry.content.is_empty() {
                    let _ = writeln!(
                        html,
                        "<div class=\"content\">{}</div>",
                        escape(&entry.content)
                    );
                }
            }
        }

        for url in &entry.attachment_urls {
            let url = escape(url);
            let _ = writeln!(html, "<div class=\"attachment\"><a href=\"{url}\">{url}</a></div>");
        }

        html.push_str("</div>\n");
    }

    let _ = write!(
        html,
        "<hr>\n<p>{} message(s)</p>\n</body>\n</html>\n",
        entries.len()
    );

    html
}

impl<'a> TicketService<'a> {
    /// Generates an HTML transcript of the ticket channel.
    ///
    /// Covers the most recent messages up to the transcript limit. The file is written to
    /// the transcript directory and posted to the audit log channel as an attachment.
    ///
    /// # Returns
    /// - `Ok(Transcript)` - The rendered transcript
    /// - `Err(TicketError::NotTicketChannel)` - Channel is not named like a ticket
    /// - `Err(TicketError::MissingRecord)` - No record for the channel
    /// - `Err(AppError::IoErr)` - Transcript file could not be written
    pub async fn generate_transcript(
        &self,
        channel_id: ChannelId,
        actor: &Actor,
    ) -> Result<Transcript, AppError> {
        self.require_ticket_channel(channel_id).await?;

        let ticket = self
            .state
            .tickets
            .get(channel_id)
            .await
            .ok_or(TicketError::MissingRecord)?;

        let entries = self
            .state
            .messenger
            .recent_messages(channel_id, TRANSCRIPT_MESSAGE_LIMIT)
            .await?;

        let generated_at = Utc::now();
        let transcript = Transcript {
            file_name: format!(
                "ticket-{}-{}.html",
                ticket.number,
                generated_at.timestamp_millis()
            ),
            html: render_transcript(&ticket, &entries, generated_at),
            message_count: entries.len(),
        };

        let dir = self.state.transcript_dir.as_path();
        tokio::fs::create_dir_all(dir).await?;
        tokio::fs::write(dir.join(&transcript.file_name), &transcript.html).await?;

        self.audit(
            AuditEntry::for_ticket(AuditAction::Transcript, &ticket, actor.user_id),
            Some(CreateAttachment::bytes(
                transcript.html.clone().into_bytes(),
                transcript.file_name.clone(),
            )),
        )
        .await;

        tracing::info!(
            "Transcript {} of ticket {} generated by {} ({} messages)",
            transcript.file_name,
            ticket.number,
            actor.user_id,
            transcript.message_count
        );

        Ok(transcript)
    }
}
