//! Slash command definitions registered in the managed guild on ready.
//!
//! Option names here are the ones controllers read back, keep both sides in sync.

use serenity::all::{
    ChannelType, CommandOptionType, CreateCommand, CreateCommandOption, Permissions,
};

use crate::model::{social::SocialAction, ticket_config::TicketTextField};

pub const TICKET: &str = "ticket";
pub const CATEGORY: &str = "category";
pub const AUTOROLE: &str = "autorole";
pub const WELCOME: &str = "welcome";
pub const EMBED: &str = "embed";

/// Every slash command the bot handles.
pub fn commands() -> Vec<CreateCommand> {
    let mut commands = vec![
        ticket_command(),
        category_command(),
        autorole_command(),
        welcome_command(),
        CreateCommand::new(EMBED)
            .description("Compose and post a custom embed")
            .default_member_permissions(Permissions::MANAGE_MESSAGES),
    ];

    commands.extend(SocialAction::ALL.into_iter().map(|action| {
        CreateCommand::new(action.name())
            .description(action.description())
            .add_option(
                CreateCommandOption::new(CommandOptionType::User, "user", "Who to interact with")
                    .required(true),
            )
    }));

    commands
}

fn subcommand(name: &str, description: &str) -> CreateCommandOption {
    CreateCommandOption::new(CommandOptionType::SubCommand, name, description)
}

fn string(name: &str, description: &str, required: bool) -> CreateCommandOption {
    CreateCommandOption::new(CommandOptionType::String, name, description).required(required)
}

/// `/ticket panel|config|text`. Not restricted by default: the panel is open to
/// support staff, the other subcommands check for administrators.
fn ticket_command() -> CreateCommand {
    let field = TicketTextField::ALL.into_iter().fold(
        string("field", "Text to change", true),
        |option, field| option.add_string_choice(field.name(), field.name()),
    );

    CreateCommand::new(TICKET)
        .description("Support ticket setup")
        .add_option(subcommand("panel", "Post the ticket panel in this channel"))
        .add_option(
            subcommand("config", "Configure ticket channels")
                .add_sub_option(
                    CreateCommandOption::new(
                        CommandOptionType::Channel,
                        "category",
                        "Channel category new tickets are created in",
                    )
                    .channel_types(vec![ChannelType::Category]),
                )
                .add_sub_option(CreateCommandOption::new(
                    CommandOptionType::Role,
                    "support_role",
                    "Role that handles tickets",
                ))
                .add_sub_option(
                    CreateCommandOption::new(
                        CommandOptionType::Channel,
                        "log_channel",
                        "Channel receiving the ticket audit log",
                    )
                    .channel_types(vec![ChannelType::Text]),
                ),
        )
        .add_option(
            subcommand("text", "Change a ticket text, use 'none' to clear optional ones")
                .add_sub_option(field)
                .add_sub_option(
                    string("value", "New text, may use {user}, {server}, {memberCount}", true)
                        .max_length(4000),
                ),
        )
}

fn category_command() -> CreateCommand {
    CreateCommand::new(CATEGORY)
        .description("Manage ticket categories")
        .default_member_permissions(Permissions::ADMINISTRATOR)
        .add_option(
            subcommand("add", "Add a ticket category")
                .add_sub_option(string("id", "Unique id, e.g. billing", true).max_length(50))
                .add_sub_option(string("label", "Name shown in the menu", true).max_length(100))
                .add_sub_option(string("description", "Short description", false).max_length(100))
                .add_sub_option(string("emoji", "Emoji shown in the menu", false)),
        )
        .add_option(
            subcommand("edit", "Edit a ticket category")
                .add_sub_option(string("id", "Category to edit", true))
                .add_sub_option(string("label", "New name", false).max_length(100))
                .add_sub_option(string("description", "New description", false).max_length(100))
                .add_sub_option(string("emoji", "New emoji", false)),
        )
        .add_option(
            subcommand("remove", "Remove a ticket category")
                .add_sub_option(string("id", "Category to remove", true)),
        )
        .add_option(subcommand("list", "List ticket categories"))
}

fn autorole_command() -> CreateCommand {
    let role = |description: &str| {
        CreateCommandOption::new(CommandOptionType::Role, "role", description).required(true)
    };

    CreateCommand::new(AUTOROLE)
        .description("Manage self-assignable roles")
        .default_member_permissions(Permissions::ADMINISTRATOR)
        .add_option(
            subcommand("add", "Make a role self-assignable")
                .add_sub_option(role("Role to offer"))
                .add_sub_option(string("label", "Button label", true).max_length(80))
                .add_sub_option(string("emoji", "Button emoji", false))
                .add_sub_option(
                    string("description", "Shown in the panel", false).max_length(100),
                ),
        )
        .add_option(
            subcommand("remove", "Stop offering a role").add_sub_option(role("Role to remove")),
        )
        .add_option(subcommand("panel", "Post the autorole panel in this channel"))
}

fn welcome_command() -> CreateCommand {
    CreateCommand::new(WELCOME)
        .description("Configure welcome messages")
        .default_member_permissions(Permissions::ADMINISTRATOR)
        .add_option(
            subcommand("channel", "Set the welcome channel, leave empty to disable")
                .add_sub_option(
                    CreateCommandOption::new(
                        CommandOptionType::Channel,
                        "channel",
                        "Channel new members are greeted in",
                    )
                    .channel_types(vec![ChannelType::Text]),
                ),
        )
        .add_option(
            subcommand("message", "Change the welcome message")
                .add_sub_option(
                    string("title", "Title, may use {user}, {server}, {memberCount}", false)
                        .max_length(256),
                )
                .add_sub_option(
                    string("message", "Text, may use {user}, {server}, {memberCount}", false)
                        .max_length(4000),
                )
                .add_sub_option(string("image", "Image URL, 'none' to remove", false)),
        )
        .add_option(subcommand("test", "Preview the welcome message on yourself"))
}
