//! Prefix commands typed as plain messages, e.g. `!ping` or `!hug @someone`.

use serenity::all::UserId;

use crate::{model::social::SocialAction, util::parse::parse_user_mention};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrefixCommand {
    Ping,
    Help,
    /// A social interaction. `target` is `None` when the argument is missing or is not
    /// a user mention, the caller answers with usage help.
    Social {
        action: SocialAction,
        target: Option<UserId>,
    },
}

/// Parses a message into a prefix command.
///
/// Command names are matched case-insensitively, anything after the first argument is
/// ignored.
///
/// # Arguments
/// - `prefix` - Configured command prefix, e.g. `!`
/// - `content` - Raw message content
///
/// # Returns
/// - `Some(PrefixCommand)` - The message is a known command
/// - `None` - No prefix, an empty prefix or an unknown command
pub fn parse_prefix_command(prefix: &str, content: &str) -> Option<PrefixCommand> {
    if prefix.is_empty() {
        return None;
    }

    let rest = content.trim().strip_prefix(prefix)?;
    let mut parts = rest.split_whitespace();
    let name = parts.next()?.to_lowercase();

    let command = match name.as_str() {
        "ping" => PrefixCommand::Ping,
        "help" => PrefixCommand::Help,
        other => PrefixCommand::Social {
            action: other.parse().ok()?,
            target: parts
                .next()
                .and_then(parse_user_mention)
                .map(UserId::new),
        },
    };

    Some(command)
}

/// Text listing every prefix and slash command.
pub fn help_text(prefix: &str) -> String {
    let social = SocialAction::ALL
        .iter()
        .map(|action| format!("`{}{} @user`", prefix, action.name()))
        .collect::<Vec<_>>()
        .join(" ");

    format!(
        "**Commands**\n\
         • `{prefix}ping` - Check that the bot is alive\n\
         • `{prefix}help` - Show this message\n\
         • {social} - Social interactions, also as slash commands\n\
         \n\
         **Slash commands**\n\
         • `/embed` - Compose a custom embed\n\
         • `/ticket panel|config|text` - Support ticket setup\n\
         • `/category add|edit|remove|list` - Ticket categories\n\
         • `/autorole add|remove|panel` - Self-assignable roles\n\
         • `/welcome channel|message|test` - Welcome messages"
    )
}
