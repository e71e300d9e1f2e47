//! Shared setup for service tests.
//!
//! Wires an `AppState` around a `FakeMessenger` and a settings file written by
//! `TestBuilder`, so service tests exercise the real stores and settings repository.

use serenity::all::{GuildId, RoleId, UserId};
use std::sync::Arc;
use std::time::Duration;
use test_utils::{builder::TestBuilder, context::TestContext};

use crate::{
    data::{cooldown::CooldownGuard, settings::SettingsRepository, ticket::TicketRepository},
    model::actor::Actor,
    scheduler::deletion::{DeletionScheduler, DELETION_DELAY},
    service::discord::fake::FakeMessenger,
    state::AppState,
};

pub const GUILD_ID: u64 = 1_000;
pub const GUILD_NAME: &str = "Rustaceans";
pub const BOT_ID: u64 = 2_000;
pub const SUPPORT_ROLE_ID: u64 = 3_000;
pub const LOG_CHANNEL_ID: u64 = 900;

/// A wired application state plus handles to inspect it.
pub struct TestBot {
    /// Keeps the temporary directory alive.
    pub test: TestContext,
    pub state: AppState,
    pub messenger: Arc<FakeMessenger>,
}

impl TestBot {
    /// Builds the state from the settings of `builder`.
    pub async fn new(builder: TestBuilder, messenger: FakeMessenger) -> Self {
        let test = builder.build().expect("Failed to build test context");
        let settings = SettingsRepository::load(&test.settings_path)
            .await
            .expect("Failed to load test settings");
        let messenger = Arc::new(messenger);

        let state = AppState {
            guild_id: GuildId::new(GUILD_ID),
            guild_name: GUILD_NAME.to_string(),
            bot_user_id: UserId::new(BOT_ID),
            settings,
            tickets: TicketRepository::new(),
            cooldowns: CooldownGuard::new(Duration::from_secs(60)),
            deletions: DeletionScheduler::new(messenger.clone(), DELETION_DELAY),
            messenger: messenger.clone(),
            transcript_dir: Arc::new(test.transcript_dir.clone()),
            expose_error_details: false,
        };

        Self {
            test,
            state,
            messenger,
        }
    }

    /// Bot with a support role and an audit log channel configured.
    pub async fn with_support() -> Self {
        Self::new(
            TestBuilder::new()
                .with_support_role(SUPPORT_ROLE_ID)
                .with_log_channel(LOG_CHANNEL_ID),
            FakeMessenger::new(),
        )
        .await
    }
}

/// A regular member without roles.
pub fn member(user_id: u64) -> Actor {
    Actor {
        user_id: UserId::new(user_id),
        roles: Vec::new(),
        is_admin: false,
    }
}

/// A member holding the support role.
pub fn support(user_id: u64) -> Actor {
    Actor {
        user_id: UserId::new(user_id),
        roles: vec![RoleId::new(SUPPORT_ROLE_ID)],
        is_admin: false,
    }
}

pub fn admin(user_id: u64) -> Actor {
    Actor {
        user_id: UserId::new(user_id),
        roles: Vec::new(),
        is_admin: true,
    }
}
