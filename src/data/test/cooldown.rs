use crate::data::cooldown::{remaining_secs, CooldownGuard, TICKET_INTAKE_COOLDOWN};
use serenity::all::UserId;
use std::time::Duration;
use tokio::time::Instant;

/// Tests the first attempt of a user.
///
/// Expected: Ok and an entry recorded
#[tokio::test(start_paused = true)]
async fn first_attempt_is_allowed() {
    let guard = CooldownGuard::default();

    assert!(guard.try_acquire(UserId::new(1)).await.is_ok());
    assert_eq!(guard.len().await, 1);
}

/// Tests a second attempt inside the window.
///
/// Expected: Err with the time left, 45s after 15s elapsed
#[tokio::test(start_paused = true)]
async fn second_attempt_within_window_is_rejected() {
    let guard = CooldownGuard::default();
    guard.try_acquire(UserId::new(1)).await.unwrap();

    tokio::time::advance(Duration::from_secs(15)).await;

    let remaining = guard.try_acquire(UserId::new(1)).await.unwrap_err();
    assert_eq!(remaining, Duration::from_secs(45));
}

/// Tests that a rejected attempt does not extend the cooldown.
///
/// Expected: allowed once the original window has elapsed
#[tokio::test(start_paused = true)]
async fn rejected_attempt_does_not_reset_window() {
    let guard = CooldownGuard::default();
    guard.try_acquire(UserId::new(1)).await.unwrap();

    tokio::time::advance(Duration::from_secs(30)).await;
    assert!(guard.try_acquire(UserId::new(1)).await.is_err());

    tokio::time::advance(Duration::from_secs(30)).await;
    assert!(guard.try_acquire(UserId::new(1)).await.is_ok());
}

/// Tests that cooldowns are tracked per user.
///
/// Expected: a different user is not affected
#[tokio::test(start_paused = true)]
async fn cooldowns_are_per_user() {
    let guard = CooldownGuard::default();
    guard.try_acquire(UserId::new(1)).await.unwrap();

    assert!(guard.try_acquire(UserId::new(2)).await.is_ok());
}

/// Tests the window boundary with explicit instants.
///
/// Expected: rejected one nanosecond before expiry, allowed exactly at expiry
#[tokio::test]
async fn window_boundary_is_exclusive() {
    let guard = CooldownGuard::new(Duration::from_secs(10));
    let start = Instant::now();
    guard.try_acquire_at(UserId::new(1), start).await.unwrap();

    let almost = start + Duration::from_secs(10) - Duration::from_nanos(1);
    assert!(guard.try_acquire_at(UserId::new(1), almost).await.is_err());

    let expiry = start + Duration::from_secs(10);
    assert!(guard.try_acquire_at(UserId::new(1), expiry).await.is_ok());
}

/// Tests remaining time reporting.
///
/// Expected: Some while active, None after expiry or for unknown users
#[tokio::test(start_paused = true)]
async fn reports_remaining_time() {
    let guard = CooldownGuard::default();
    guard.try_acquire(UserId::new(1)).await.unwrap();

    tokio::time::advance(Duration::from_secs(20)).await;
    assert_eq!(
        guard.remaining(UserId::new(1)).await,
        Some(Duration::from_secs(40))
    );

    tokio::time::advance(TICKET_INTAKE_COOLDOWN).await;
    assert_eq!(guard.remaining(UserId::new(1)).await, None);
    assert_eq!(guard.remaining(UserId::new(2)).await, None);
}

/// Tests pruning of expired entries.
///
/// Expected: only the expired entry is dropped
#[tokio::test(start_paused = true)]
async fn prunes_only_expired_entries() {
    let guard = CooldownGuard::default();
    guard.try_acquire(UserId::new(1)).await.unwrap();

    tokio::time::advance(Duration::from_secs(50)).await;
    guard.try_acquire(UserId::new(2)).await.unwrap();

    tokio::time::advance(Duration::from_secs(15)).await;
    let removed = guard.prune_expired().await;

    assert_eq!(removed, 1);
    assert_eq!(guard.len().await, 1);
    assert!(guard.remaining(UserId::new(2)).await.is_some());
}

/// Tests rounding of remaining seconds.
///
/// Expected: partial seconds round up, whole seconds are kept
#[test]
fn remaining_secs_rounds_up() {
    assert_eq!(remaining_secs(Duration::from_millis(44_100)), 45);
    assert_eq!(remaining_secs(Duration::from_secs(45)), 45);
    assert_eq!(remaining_secs(Duration::from_millis(1)), 1);
}
