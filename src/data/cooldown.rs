use serenity::all::UserId;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::time::Instant;

/// Window between two ticket intakes by the same user.
pub const TICKET_INTAKE_COOLDOWN: Duration = Duration::from_secs(60);

/// Per-user fixed-window cooldown.
///
/// Each entry expires a fixed window after it was recorded; later attempts inside the
/// window do not extend it. Expired entries are dropped lazily when touched and by
/// `prune_expired`, which the scheduler runs periodically.
#[derive(Clone)]
pub struct CooldownGuard {
    window: Duration,
    entries: Arc<RwLock<HashMap<UserId, Instant>>>,
}

impl CooldownGuard {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            entries: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Records an attempt for `user_id` unless one is still inside the window.
    ///
    /// # Returns
    /// - `Ok(())` - No active cooldown, the attempt is recorded now
    /// - `Err(Duration)` - Time remaining until the active cooldown expires
    pub async fn try_acquire(&self, user_id: UserId) -> Result<(), Duration> {
        self.try_acquire_at(user_id, Instant::now()).await
    }

    pub async fn try_acquire_at(&self, user_id: UserId, now: Instant) -> Result<(), Duration> {
        let mut entries = self.entries.write().await;

        if let Some(recorded_at) = entries.get(&user_id) {
            let expires_at = *recorded_at + self.window;
            if now < expires_at {
                return Err(expires_at - now);
            }
        }

        entries.insert(user_id, now);
        Ok(())
    }

    /// Time left on the user's cooldown, if one is active.
    pub async fn remaining(&self, user_id: UserId) -> Option<Duration> {
        let entries = self.entries.read().await;
        let expires_at = *entries.get(&user_id)? + self.window;

        expires_at
            .checked_duration_since(Instant::now())
            .filter(|remaining| !remaining.is_zero())
    }

    /// Drops every expired entry.
    ///
    /// # Returns
    /// - `usize` - Number of entries removed
    pub async fn prune_expired(&self) -> usize {
        let now = Instant::now();
        let mut entries = self.entries.write().await;
        let before = entries.len();

        entries.retain(|_, recorded_at| *recorded_at + self.window > now);

        before - entries.len()
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }
}

impl Default for CooldownGuard {
    fn default() -> Self {
        Self::new(TICKET_INTAKE_COOLDOWN)
    }
}

/// Whole seconds left on a cooldown, rounded up so a pending cooldown never shows 0.
pub fn remaining_secs(remaining: Duration) -> u64 {
    let secs = remaining.as_secs();
    if remaining.subsec_nanos() > 0 {
        secs + 1
    } else {
        secs
    }
}
