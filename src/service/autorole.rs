//! Self-assignable roles.
//!
//! Administrators register roles with a label; the panel renders one button per role
//! and a click toggles the role on the clicking member.

use entity::autorole::AutoRole;
use serenity::all::{
    ButtonStyle, ChannelId, CreateActionRow, CreateButton, CreateEmbed, CreateMessage, MessageId,
    ReactionType, RoleId,
};

use crate::{
    error::AppError,
    model::{
        action::ComponentAction,
        actor::Actor,
        autorole::{CreateAutoRoleParams, RoleToggle, MAX_AUTOROLES},
    },
    state::AppState,
};

const BUTTONS_PER_ROW: usize = 5;
const PANEL_COLOR: u32 = 0x5865f2;

pub struct AutoRoleService<'a> {
    state: &'a AppState,
}

impl<'a> AutoRoleService<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    /// Registers a self-assignable role.
    ///
    /// # Returns
    /// - `Ok(AutoRole)` - The stored autorole
    /// - `Err(AppError::BadRequest)` - Role already registered, limit reached or empty label
    pub async fn add(&self, params: CreateAutoRoleParams) -> Result<AutoRole, AppError> {
        let mut autorole = AutoRole::from(params);
        autorole.label = autorole.label.trim().to_string();
        if autorole.label.is_empty() {
            return Err(AppError::BadRequest("Label must not be empty.".to_string()));
        }

        let stored = self
            .state
            .settings
            .update(|settings| {
                if settings
                    .autoroles
                    .iter()
                    .any(|existing| existing.role_id == autorole.role_id)
                {
                    return Err(AppError::BadRequest(format!(
                        "<@&{}> is already an autorole.",
                        autorole.role_id
                    )));
                }
                if settings.autoroles.len() >= MAX_AUTOROLES {
                    return Err(AppError::BadRequest(format!(
                        "Autoroles are limited to {}.",
                        MAX_AUTOROLES
                    )));
                }

                settings.autoroles.push(autorole.clone());
                Ok(autorole)
            })
            .await?;

        tracing::info!("Added autorole {} ({})", stored.role_id, stored.label);

        Ok(stored)
    }

    /// Unregisters a role. Members keep the role.
    ///
    /// # Returns
    /// - `Ok(AutoRole)` - The removed autorole
    /// - `Err(AppError::NotFound)` - The role is not an autorole
    pub async fn remove(&self, role_id: RoleId) -> Result<AutoRole, AppError> {
        let removed = self
            .state
            .settings
            .update(|settings| {
                let index = settings
                    .autoroles
                    .iter()
                    .position(|autorole| autorole.role_id == role_id.get())
                    .ok_or_else(|| {
                        AppError::NotFound(format!("<@&{}> is not an autorole.", role_id))
                    })?;

                Ok::<_, AppError>(settings.autoroles.remove(index))
            })
            .await?;

        tracing::info!("Removed autorole {}", removed.role_id);

        Ok(removed)
    }

    /// Posts the autorole panel into `channel_id`.
    ///
    /// # Returns
    /// - `Ok(MessageId)` - The posted panel
    /// - `Err(AppError::BadRequest)` - No autoroles are registered
    pub async fn post_panel(&self, channel_id: ChannelId) -> Result<MessageId, AppError> {
        let autoroles = self.state.settings.read(|s| s.autoroles.clone()).await;
        if autoroles.is_empty() {
            return Err(AppError::BadRequest(
                "Add an autorole before posting the panel.".to_string(),
            ));
        }

        let message_id = self
            .state
            .messenger
            .send_message(channel_id, panel_message(&autoroles))
            .await?;

        tracing::info!("Autorole panel posted in {}", channel_id);

        Ok(message_id)
    }

    /// Adds the role to the actor if missing, removes it otherwise.
    ///
    /// # Returns
    /// - `Ok(RoleToggle)` - Whether the role was added or removed
    /// - `Err(AppError::NotFound)` - The role is no longer an autorole
    pub async fn toggle(&self, actor: &Actor, role_id: RoleId) -> Result<RoleToggle, AppError> {
        let registered = self
            .state
            .settings
            .read(|s| s.autoroles.iter().any(|a| a.role_id == role_id.get()))
            .await;
        if !registered {
            return Err(AppError::NotFound(
                "This role is no longer self-assignable.".to_string(),
            ));
        }

        let messenger = &self.state.messenger;
        let toggle = if actor.roles.contains(&role_id) {
            messenger.remove_member_role(actor.user_id, role_id).await?;
            RoleToggle::Removed
        } else {
            messenger.add_member_role(actor.user_id, role_id).await?;
            RoleToggle::Added
        };

        tracing::debug!("Autorole {} {:?} for {}", role_id, toggle, actor.user_id);

        Ok(toggle)
    }
}

/// Builds the panel message, five buttons per row.
pub fn panel_message(autoroles: &[AutoRole]) -> CreateMessage {
    let description = autoroles
        .iter()
        .map(|autorole| {
            let emoji = autorole.emoji.as_deref().unwrap_or("•");
            match &autorole.description {
                Some(description) => format!(
                    "{} <@&{}> {}",
                    emoji, autorole.role_id, description
                ),
                None => format!("{} <@&{}>", emoji, autorole.role_id),
            }
        })
        .collect::<Vec<_>>()
        .join("\n");

    let rows = autoroles
        .chunks(BUTTONS_PER_ROW)
        .map(|chunk| {
            CreateActionRow::Buttons(
                chunk
                    .iter()
                    .map(|autorole| {
                        let mut button = CreateButton::new(
                            ComponentAction::ToggleAutoRole(RoleId::new(autorole.role_id))
                                .custom_id(),
                        )
                        .label(&autorole.label)
                        .style(ButtonStyle::Secondary);
                        if let Some(emoji) = &autorole.emoji {
                            button = button.emoji(ReactionType::Unicode(emoji.clone()));
                        }
                        button
                    })
                    .collect(),
            )
        })
        .collect();

    CreateMessage::new()
        .embed(
            CreateEmbed::new()
                .title("Pick your roles")
                .description(description)
                .color(PANEL_COLOR),
        )
        .components(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::{
        discord::fake::{FakeMessenger, MessengerCall},
        harness::{member, TestBot},
    };
    use serenity::all::UserId;
    use test_utils::{builder::TestBuilder, fixture};

    fn params(role_id: u64) -> CreateAutoRoleParams {
        CreateAutoRoleParams {
            role_id,
            label: "News".to_string(),
            emoji: Some("📰".to_string()),
            description: None,
        }
    }

    /// Tests registering autoroles.
    ///
    /// Expected: stored and persisted, duplicates rejected
    #[tokio::test]
    async fn add_rejects_duplicates() {
        let bot = TestBot::new(TestBuilder::new(), FakeMessenger::new()).await;
        let service = AutoRoleService::new(&bot.state);

        service.add(params(55)).await.unwrap();
        let duplicate = service.add(params(55)).await;

        assert!(matches!(duplicate, Err(AppError::BadRequest(_))));
        assert_eq!(bot.test.read_settings_file().autoroles.len(), 1);
    }

    #[tokio::test]
    async fn add_respects_limit() {
        let bot = TestBot::new(
            TestBuilder::new().with_settings(|settings| {
                settings.autoroles = (0..MAX_AUTOROLES as u64)
                    .map(|i| fixture::autorole::entity_builder().role_id(i + 1).build())
                    .collect();
            }),
            FakeMessenger::new(),
        )
        .await;

        let result = AutoRoleService::new(&bot.state).add(params(999)).await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    #[tokio::test]
    async fn remove_unknown_role_is_not_found() {
        let bot = TestBot::new(TestBuilder::new(), FakeMessenger::new()).await;

        let result = AutoRoleService::new(&bot.state).remove(RoleId::new(5)).await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    /// Tests toggling a role twice.
    ///
    /// Expected: added for a member without it, removed for a member with it
    #[tokio::test]
    async fn toggle_adds_then_removes() {
        let role = fixture::autorole::DEFAULT_ROLE_ID;
        let bot = TestBot::new(
            TestBuilder::new().with_settings(|s| s.autoroles = vec![fixture::autorole::entity()]),
            FakeMessenger::new(),
        )
        .await;
        let service = AutoRoleService::new(&bot.state);
        let mut actor = member(42);

        let first = service.toggle(&actor, RoleId::new(role)).await.unwrap();
        actor.roles.push(RoleId::new(role));
        let second = service.toggle(&actor, RoleId::new(role)).await.unwrap();

        assert_eq!(first, RoleToggle::Added);
        assert_eq!(second, RoleToggle::Removed);
        assert_eq!(
            bot.messenger.calls(),
            vec![
                MessengerCall::AddRole {
                    user_id: UserId::new(42),
                    role_id: RoleId::new(role)
                },
                MessengerCall::RemoveRole {
                    user_id: UserId::new(42),
                    role_id: RoleId::new(role)
                },
            ]
        );
    }

    /// Tests clicking a button of a role that was unregistered.
    ///
    /// Expected: Err(NotFound) and no role change
    #[tokio::test]
    async fn toggle_unregistered_role_is_rejected() {
        let bot = TestBot::new(TestBuilder::new(), FakeMessenger::new()).await;

        let result = AutoRoleService::new(&bot.state)
            .toggle(&member(42), RoleId::new(77))
            .await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
        assert!(bot.messenger.calls().is_empty());
    }

    /// Tests the panel layout.
    ///
    /// Expected: 7 roles spread over two rows of five and two
    #[test]
    fn panel_wraps_buttons_in_rows_of_five() {
        let autoroles: Vec<_> = (1..=7)
            .map(|i| fixture::autorole::entity_builder().role_id(i).build())
            .collect();

        let message = serde_json::to_value(panel_message(&autoroles)).unwrap();

        let rows = message["components"].as_array().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["components"].as_array().unwrap().len(), 5);
        assert_eq!(rows[1]["components"].as_array().unwrap().len(), 2);
        assert_eq!(rows[1]["components"][1]["custom_id"], "autorole:7");
    }
}
