use tokio_cron_scheduler::{Job, JobScheduler};

use crate::{data::cooldown::CooldownGuard, error::AppError};

/// Cron expression for the sweep, every 30 seconds.
const SWEEP_SCHEDULE: &str = "*/30 * * * * *";

/// Starts the cooldown sweep scheduler
///
/// Expired entries are already ignored on access; the sweep only keeps the map from
/// growing with users who never come back.
///
/// # Arguments
/// - `cooldowns`: Cooldown guard shared with the ticket service
///
/// # Returns
/// - `Ok(JobScheduler)` - Running scheduler, kept so it can be shut down on exit
/// - `Err(AppError::SchedulerErr)` - Job could not be created or the scheduler failed to start
pub async fn start_scheduler(cooldowns: CooldownGuard) -> Result<JobScheduler, AppError> {
    let scheduler = JobScheduler::new().await?;

    let job = Job::new_async(SWEEP_SCHEDULE, move |_uuid, _lock| {
        let cooldowns = cooldowns.clone();

        Box::pin(async move {
            let removed = cooldowns.prune_expired().await;
            if removed > 0 {
                tracing::debug!(
                    "Evicted {} expired ticket cooldown(s), {} still active",
                    removed,
                    cooldowns.len().await
                );
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Cooldown sweep scheduler started");

    Ok(scheduler)
}
