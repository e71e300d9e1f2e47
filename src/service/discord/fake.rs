//! Recording `GuildMessenger` used by tests.

use serenity::all::{
    ChannelId, CreateMessage, EditMessage, MessageId, PermissionOverwrite, RoleId, UserId,
};
use serenity::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use super::{GuildMessenger, MemberAccess, TicketChannelRequest};
use crate::{error::AppError, model::transcript::TranscriptEntry};

/// One call made against the fake, with builders serialized to JSON.
#[derive(Debug, Clone, PartialEq)]
pub enum MessengerCall {
    CreateChannel {
        channel_id: ChannelId,
        name: String,
        parent_id: Option<ChannelId>,
        overwrites: Vec<PermissionOverwrite>,
    },
    Rename {
        channel_id: ChannelId,
        name: String,
    },
    SetAccess {
        channel_id: ChannelId,
        user_id: UserId,
        access: MemberAccess,
    },
    DeleteChannel {
        channel_id: ChannelId,
    },
    Send {
        channel_id: ChannelId,
        message_id: MessageId,
        payload: serde_json::Value,
    },
    Edit {
        channel_id: ChannelId,
        message_id: MessageId,
        payload: serde_json::Value,
    },
    DirectMessage {
        user_id: UserId,
        payload: serde_json::Value,
    },
    AddRole {
        user_id: UserId,
        role_id: RoleId,
    },
    RemoveRole {
        user_id: UserId,
        role_id: RoleId,
    },
}

#[derive(Default)]
struct FakeState {
    calls: Vec<MessengerCall>,
    channels: HashMap<ChannelId, String>,
    history: HashMap<ChannelId, Vec<TranscriptEntry>>,
    failing_channels: HashSet<ChannelId>,
    next_id: u64,
    name_lookups: usize,
    fail_direct_messages: bool,
}

/// In-memory guild that records every call.
///
/// Channels created through it get ids starting at 10 000 and keep their current name
/// so channel name checks behave like the real guild.
pub struct FakeMessenger {
    state: Mutex<FakeState>,
}

impl FakeMessenger {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(FakeState {
                next_id: 10_000,
                ..Default::default()
            }),
        }
    }

    /// Registers an existing channel.
    pub fn with_channel(self, channel_id: u64, name: &str) -> Self {
        self.lock()
            .channels
            .insert(ChannelId::new(channel_id), name.to_string());
        self
    }

    /// Makes every direct message fail as if the user blocked DMs.
    pub fn failing_direct_messages(self) -> Self {
        self.lock().fail_direct_messages = true;
        self
    }

    /// Makes sends and edits in `channel_id` fail.
    pub fn failing_channel(self, channel_id: u64) -> Self {
        self.lock()
            .failing_channels
            .insert(ChannelId::new(channel_id));
        self
    }

    /// Sets the history returned by `recent_messages`, oldest first.
    pub fn set_history(&self, channel_id: ChannelId, entries: Vec<TranscriptEntry>) {
        self.lock().history.insert(channel_id, entries);
    }

    pub fn calls(&self) -> Vec<MessengerCall> {
        self.lock().calls.clone()
    }

    /// Number of `channel_name` calls made so far.
    pub fn name_lookups(&self) -> usize {
        self.lock().name_lookups
    }

    pub fn channel(&self, channel_id: ChannelId) -> Option<String> {
        self.lock().channels.get(&channel_id).cloned()
    }

    /// Payloads of all messages sent to `channel_id`, in order.
    pub fn sent_to(&self, channel_id: ChannelId) -> Vec<serde_json::Value> {
        self.lock()
            .calls
            .iter()
            .filter_map(|call| match call {
                MessengerCall::Send {
                    channel_id: target,
                    payload,
                    ..
                } if *target == channel_id => Some(payload.clone()),
                _ => None,
            })
            .collect()
    }

    /// Payloads of all edits to messages in `channel_id`, in order.
    pub fn edits_in(&self, channel_id: ChannelId) -> Vec<(MessageId, serde_json::Value)> {
        self.lock()
            .calls
            .iter()
            .filter_map(|call| match call {
                MessengerCall::Edit {
                    channel_id: target,
                    message_id,
                    payload,
                } if *target == channel_id => Some((*message_id, payload.clone())),
                _ => None,
            })
            .collect()
    }

    /// Last access level set for `user_id` in `channel_id`.
    pub fn access_of(&self, channel_id: ChannelId, user_id: UserId) -> Option<MemberAccess> {
        self.lock().calls.iter().rev().find_map(|call| match call {
            MessengerCall::SetAccess {
                channel_id: c,
                user_id: u,
                access,
            } if *c == channel_id && *u == user_id => Some(*access),
            _ => None,
        })
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, FakeState> {
        self.state.lock().expect("fake messenger lock poisoned")
    }

    fn unknown_channel(channel_id: ChannelId) -> AppError {
        AppError::NotFound(format!("Unknown channel {}", channel_id))
    }

    fn check_channel(state: &FakeState, channel_id: ChannelId) -> Result<(), AppError> {
        if state.failing_channels.contains(&channel_id) {
            return Err(AppError::InternalError(format!(
                "Missing access to channel {}",
                channel_id
            )));
        }
        Ok(())
    }
}

impl Default for FakeMessenger {
    fn default() -> Self {
        Self::new()
    }
}

fn to_json<T: serde::Serialize>(value: &T) -> serde_json::Value {
    serde_json::to_value(value).expect("builder serializes")
}

#[async_trait]
impl GuildMessenger for FakeMessenger {
    async fn create_ticket_channel(
        &self,
        request: TicketChannelRequest,
    ) -> Result<ChannelId, AppError> {
        let mut state = self.lock();
        state.next_id += 1;
        let channel_id = ChannelId::new(state.next_id);

        state.channels.insert(channel_id, request.name.clone());
        state.calls.push(MessengerCall::CreateChannel {
            channel_id,
            name: request.name,
            parent_id: request.parent_id,
            overwrites: request.overwrites,
        });

        Ok(channel_id)
    }

    async fn channel_name(&self, channel_id: ChannelId) -> Result<String, AppError> {
        let mut state = self.lock();
        state.name_lookups += 1;
        state
            .channels
            .get(&channel_id)
            .cloned()
            .ok_or_else(|| Self::unknown_channel(channel_id))
    }

    async fn rename_channel(&self, channel_id: ChannelId, name: &str) -> Result<(), AppError> {
        let mut state = self.lock();
        let current = state
            .channels
            .get_mut(&channel_id)
            .ok_or_else(|| Self::unknown_channel(channel_id))?;
        *current = name.to_string();

        state.calls.push(MessengerCall::Rename {
            channel_id,
            name: name.to_string(),
        });
        Ok(())
    }

    async fn set_member_access(
        &self,
        channel_id: ChannelId,
        user_id: UserId,
        access: MemberAccess,
    ) -> Result<(), AppError> {
        self.lock().calls.push(MessengerCall::SetAccess {
            channel_id,
            user_id,
            access,
        });
        Ok(())
    }

    async fn delete_channel(&self, channel_id: ChannelId) -> Result<(), AppError> {
        let mut state = self.lock();
        state
            .channels
            .remove(&channel_id)
            .ok_or_else(|| Self::unknown_channel(channel_id))?;

        state
            .calls
            .push(MessengerCall::DeleteChannel { channel_id });
        Ok(())
    }

    async fn send_message(
        &self,
        channel_id: ChannelId,
        message: CreateMessage,
    ) -> Result<MessageId, AppError> {
        let mut state = self.lock();
        Self::check_channel(&state, channel_id)?;

        state.next_id += 1;
        let message_id = MessageId::new(state.next_id);
        state.calls.push(MessengerCall::Send {
            channel_id,
            message_id,
            payload: to_json(&message),
        });

        Ok(message_id)
    }

    async fn edit_message(
        &self,
        channel_id: ChannelId,
        message_id: MessageId,
        message: EditMessage,
    ) -> Result<(), AppError> {
        let mut state = self.lock();
        Self::check_channel(&state, channel_id)?;

        state.calls.push(MessengerCall::Edit {
            channel_id,
            message_id,
            payload: to_json(&message),
        });
        Ok(())
    }

    async fn recent_messages(
        &self,
        channel_id: ChannelId,
        limit: u8,
    ) -> Result<Vec<TranscriptEntry>, AppError> {
        let state = self.lock();
        let history = state.history.get(&channel_id).cloned().unwrap_or_default();
        let skip = history.len().saturating_sub(limit as usize);

        Ok(history.into_iter().skip(skip).collect())
    }

    async fn direct_message(
        &self,
        user_id: UserId,
        message: CreateMessage,
    ) -> Result<(), AppError> {
        let mut state = self.lock();
        if state.fail_direct_messages {
            return Err(AppError::BadRequest(
                "Cannot send messages to this user".to_string(),
            ));
        }

        state.calls.push(MessengerCall::DirectMessage {
            user_id,
            payload: to_json(&message),
        });
        Ok(())
    }

    async fn add_member_role(&self, user_id: UserId, role_id: RoleId) -> Result<(), AppError> {
        self.lock()
            .calls
            .push(MessengerCall::AddRole { user_id, role_id });
        Ok(())
    }

    async fn remove_member_role(&self, user_id: UserId, role_id: RoleId) -> Result<(), AppError> {
        self.lock()
            .calls
            .push(MessengerCall::RemoveRole { user_id, role_id });
        Ok(())
    }
}
