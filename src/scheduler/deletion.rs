use serenity::all::ChannelId;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;

use crate::service::discord::GuildMessenger;

/// Delay between a delete request and the channel actually being removed.
pub const DELETION_DELAY: Duration = Duration::from_secs(5);

/// Delayed channel deletions keyed by channel.
///
/// Each scheduled deletion is a spawned task that sleeps for the configured delay and
/// then deletes the channel. Pending deletions can be cancelled individually, e.g.
/// when the channel was removed by hand in the meantime, or all at once on shutdown.
#[derive(Clone)]
pub struct DeletionScheduler {
    messenger: Arc<dyn GuildMessenger>,
    delay: Duration,
    pending: Arc<Mutex<HashMap<ChannelId, JoinHandle<()>>>>,
}

impl DeletionScheduler {
    pub fn new(messenger: Arc<dyn GuildMessenger>, delay: Duration) -> Self {
        Self {
            messenger,
            delay,
            pending: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Schedules deletion of `channel_id` after the configured delay.
    ///
    /// Scheduling a channel that already has a pending deletion keeps the earlier one.
    ///
    /// # Returns
    /// - `true` - A new deletion was scheduled
    /// - `false` - A deletion was already pending for the channel
    pub async fn schedule(&self, channel_id: ChannelId) -> bool {
        let mut pending = self.pending.lock().await;

        if pending
            .get(&channel_id)
            .is_some_and(|handle| !handle.is_finished())
        {
            return false;
        }

        let messenger = self.messenger.clone();
        let registry = self.pending.clone();
        let delay = self.delay;

        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;

            match messenger.delete_channel(channel_id).await {
                Ok(()) => tracing::info!("Deleted ticket channel {}", channel_id),
                Err(e) => tracing::error!("Failed to delete channel {}: {}", channel_id, e),
            }

            registry.lock().await.remove(&channel_id);
        });

        pending.insert(channel_id, handle);
        tracing::debug!(
            "Scheduled deletion of channel {} in {:?}",
            channel_id,
            delay
        );

        true
    }

    /// Cancels the pending deletion of `channel_id`, if any.
    ///
    /// # Returns
    /// - `true` - A pending deletion was aborted
    /// - `false` - Nothing was pending for the channel
    pub async fn cancel(&self, channel_id: ChannelId) -> bool {
        match self.pending.lock().await.remove(&channel_id) {
            Some(handle) if !handle.is_finished() => {
                handle.abort();
                tracing::debug!("Cancelled deletion of channel {}", channel_id);
                true
            }
            _ => false,
        }
    }

    #[cfg(test)]
    pub async fn is_pending(&self, channel_id: ChannelId) -> bool {
        self.pending
            .lock()
            .await
            .get(&channel_id)
            .is_some_and(|handle| !handle.is_finished())
    }

    /// Aborts every pending deletion.
    ///
    /// # Returns
    /// - `usize` - Number of deletions that were still pending
    pub async fn shutdown(&self) -> usize {
        let mut pending = self.pending.lock().await;
        let mut aborted = 0;

        for (_, handle) in pending.drain() {
            if !handle.is_finished() {
                handle.abort();
                aborted += 1;
            }
        }

        if aborted > 0 {
            tracing::info!("Aborted {} pending channel deletion(s)", aborted);
        }

        aborted
    }
}
