use super::*;
use crate::service::discord::fake::{FakeMessenger, MessengerCall};
use crate::service::harness::member;
use test_utils::builder::TestBuilder;

/// Tests that nothing is logged without a log channel.
///
/// Expected: only the summary is sent
#[tokio::test]
async fn no_log_channel_means_no_audit() {
    let bot = TestBot::new(TestBuilder::new(), FakeMessenger::new()).await;

    let ticket = open_ticket(&bot, 42).await;

    let sends = bot
        .messenger
        .calls()
        .into_iter()
        .filter(|call| matches!(call, MessengerCall::Send { .. }))
        .count();
    assert_eq!(sends, 1);
    assert_eq!(bot.messenger.sent_to(ticket.channel_id).len(), 1);
}

/// Tests that an unreachable log channel does not fail the operation.
///
/// Expected: ticket created and closed despite the audit failures
#[tokio::test]
async fn audit_failure_is_swallowed() {
    let bot = TestBot::new(
        TestBuilder::new().with_log_channel(900),
        FakeMessenger::new().failing_channel(900),
    )
    .await;

    let ticket = open_ticket(&bot, 42).await;
    let closed = TicketService::new(&bot.state)
        .close(ticket.channel_id, &member(42))
        .await;

    assert!(closed.is_ok());
}
