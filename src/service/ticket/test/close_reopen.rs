use super::*;
use crate::error::{ticket::TicketError, AppError};
use crate::model::ticket::{Priority, TicketStatus};
use crate::service::discord::{
    fake::{FakeMessenger, MessengerCall},
    MemberAccess,
};
use crate::service::harness::{member, support};
use test_utils::builder::TestBuilder;

/// Tests closing an open ticket.
///
/// Expected: renamed to the closed prefix, creator read only, closed buttons posted
#[tokio::test]
async fn close_renames_and_locks() {
    let bot = TestBot::with_support().await;
    let ticket = open_ticket(&bot, 42).await;

    let closed = TicketService::new(&bot.state)
        .close(ticket.channel_id, &member(42))
        .await
        .unwrap();

    assert_eq!(closed.status, TicketStatus::Closed);
    assert_eq!(closed.closed_by, Some(UserId::new(42)));
    assert!(closed.closed_at.is_some());
    assert_eq!(
        channel_name(&bot, ticket.channel_id).as_deref(),
        Some("cerrado-0001-42")
    );
    assert_eq!(
        bot.messenger.access_of(ticket.channel_id, UserId::new(42)),
        Some(MemberAccess::ReadOnly)
    );

    let sent = bot.messenger.sent_to(ticket.channel_id);
    let last = sent.last().unwrap();
    assert_eq!(last["components"][0]["components"][0]["custom_id"], "ticket:delete");
    assert_eq!(last["components"][0]["components"][2]["custom_id"], "ticket:reopen");
}

/// Tests closing twice.
///
/// Expected: second close fails with NotTicketChannel
#[tokio::test]
async fn closing_closed_ticket_fails() {
    let bot = TestBot::with_support().await;
    let ticket = open_ticket(&bot, 42).await;
    let service = TicketService::new(&bot.state);
    service.close(ticket.channel_id, &member(42)).await.unwrap();

    assert!(matches!(
        service.close(ticket.channel_id, &member(42)).await,
        Err(AppError::TicketErr(TicketError::NotTicketChannel))
    ));
}

/// Tests closing outside a ticket channel.
///
/// Expected: Err(NotTicketChannel)
#[tokio::test]
async fn close_outside_ticket_channel_fails() {
    let bot = TestBot::new(
        TestBuilder::new(),
        FakeMessenger::new().with_channel(500, "general"),
    )
    .await;

    assert!(matches!(
        TicketService::new(&bot.state)
            .close(ChannelId::new(500), &member(42))
            .await,
        Err(AppError::TicketErr(TicketError::NotTicketChannel))
    ));
}

/// Tests closing a ticket channel whose record is gone, e.g. after a restart.
///
/// Expected: Err(MissingRecord) and the channel is left untouched
#[tokio::test]
async fn close_without_record_fails() {
    let bot = TestBot::new(
        TestBuilder::new(),
        FakeMessenger::new().with_channel(500, "ticket-0003-0042"),
    )
    .await;

    assert!(matches!(
        TicketService::new(&bot.state)
            .close(ChannelId::new(500), &member(42))
            .await,
        Err(AppError::TicketErr(TicketError::MissingRecord))
    ));
    assert!(bot.messenger.calls().is_empty());
}

/// Tests that a closed ticket frees the creator to open another one.
///
/// Expected: a second ticket can be created after closing the first
#[tokio::test]
async fn closed_ticket_allows_new_one() {
    let bot = TestBot::with_support().await;
    let first = open_ticket(&bot, 42).await;
    TicketService::new(&bot.state)
        .close(first.channel_id, &member(42))
        .await
        .unwrap();

    let second = open_ticket(&bot, 42).await;

    assert_ne!(first.channel_id, second.channel_id);
}

/// Tests reopening a closed ticket.
///
/// Expected: open prefix restored, creator full access, stored priority kept, creator notified
#[tokio::test]
async fn reopen_restores_ticket() {
    let bot = TestBot::with_support().await;
    let ticket = open_ticket(&bot, 42).await;
    let service = TicketService::new(&bot.state);
    service
        .change_priority(ticket.channel_id, &support(7), Priority::Normal)
        .await
        .unwrap();
    service.close(ticket.channel_id, &member(42)).await.unwrap();

    let reopened = service
        .reopen(ticket.channel_id, &support(7))
        .await
        .unwrap();

    assert_eq!(reopened.status, TicketStatus::Open);
    assert_eq!(reopened.priority, Priority::High);
    assert!(reopened.reopened_at.is_some());
    assert_eq!(reopened.closed_by, Some(UserId::new(42)));
    assert_eq!(
        channel_name(&bot, ticket.channel_id).as_deref(),
        Some("ticket-0001-42")
    );
    assert_eq!(
        bot.messenger.access_of(ticket.channel_id, UserId::new(42)),
        Some(MemberAccess::Full)
    );

    let last = bot.messenger.sent_to(ticket.channel_id).pop().unwrap();
    assert_eq!(
        last["components"][0]["components"][2]["custom_id"],
        "ticket:priority:high"
    );
    assert!(bot.messenger.calls().iter().any(|call| matches!(
        call,
        MessengerCall::DirectMessage { user_id, .. } if *user_id == UserId::new(42)
    )));
}

/// Tests reopening an open ticket.
///
/// Expected: Err(NotTicketChannel)
#[tokio::test]
async fn reopening_open_ticket_fails() {
    let bot = TestBot::with_support().await;
    let ticket = open_ticket(&bot, 42).await;

    assert!(matches!(
        TicketService::new(&bot.state)
            .reopen(ticket.channel_id, &member(42))
            .await,
        Err(AppError::TicketErr(TicketError::NotTicketChannel))
    ));
}

/// Tests that a refused direct message does not fail the reopen.
///
/// Expected: Ok, ticket reopened
#[tokio::test]
async fn reopen_survives_blocked_direct_messages() {
    let bot = TestBot::new(TestBuilder::new(), FakeMessenger::new().failing_direct_messages()).await;
    let ticket = open_ticket(&bot, 42).await;
    let service = TicketService::new(&bot.state);
    service.close(ticket.channel_id, &member(42)).await.unwrap();

    let reopened = service.reopen(ticket.channel_id, &member(42)).await;

    assert!(reopened.is_ok());
    assert_eq!(
        bot.state.tickets.get(ticket.channel_id).await.unwrap().status,
        TicketStatus::Open
    );
}

/// Tests a full close / reopen cycle twice over.
///
/// Expected: the channel name alternates and the number never changes
#[tokio::test]
async fn close_reopen_cycle_is_repeatable() {
    let bot = TestBot::with_support().await;
    let ticket = open_ticket(&bot, 42).await;
    let service = TicketService::new(&bot.state);

    for _ in 0..2 {
        service.close(ticket.channel_id, &member(42)).await.unwrap();
        assert_eq!(
            channel_name(&bot, ticket.channel_id).as_deref(),
            Some("cerrado-0001-42")
        );
        service.reopen(ticket.channel_id, &member(42)).await.unwrap();
        assert_eq!(
            channel_name(&bot, ticket.channel_id).as_deref(),
            Some("ticket-0001-42")
        );
    }
}
