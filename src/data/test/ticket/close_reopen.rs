use super::*;

/// Tests closing an open ticket.
///
/// Expected: status closed with closer and timestamp recorded
#[tokio::test]
async fn close_records_closer() {
    let repo = TicketRepository::new();
    repo.insert(open_ticket(1, 100, 7)).await;
    let closed_at = Utc::now();

    let ticket = repo
        .close(ChannelId::new(100), UserId::new(9), closed_at)
        .await
        .unwrap();

    assert_eq!(ticket.status, TicketStatus::Closed);
    assert_eq!(ticket.closed_by, Some(UserId::new(9)));
    assert_eq!(ticket.closed_at, Some(closed_at));
}

/// Tests closing a ticket twice.
///
/// Expected: Err(NotTicketChannel) and the first closer kept
#[tokio::test]
async fn double_close_is_rejected() {
    let repo = TicketRepository::new();
    repo.insert(open_ticket(1, 100, 7)).await;
    repo.close(ChannelId::new(100), UserId::new(9), Utc::now())
        .await
        .unwrap();

    let result = repo
        .close(ChannelId::new(100), UserId::new(10), Utc::now())
        .await;

    assert_eq!(result, Err(TicketError::NotTicketChannel));
    assert_eq!(
        repo.get(ChannelId::new(100)).await.unwrap().closed_by,
        Some(UserId::new(9))
    );
}

/// Tests reopening keeps the close history and the assignee.
///
/// Expected: status open, reopened_at set, closed_by and assigned_to kept
#[tokio::test]
async fn reopen_keeps_history() {
    let repo = TicketRepository::new();
    repo.insert(open_ticket(1, 100, 7)).await;
    repo.claim(ChannelId::new(100), UserId::new(50)).await.unwrap();
    repo.close(ChannelId::new(100), UserId::new(9), Utc::now())
        .await
        .unwrap();

    let ticket = repo.reopen(ChannelId::new(100), Utc::now()).await.unwrap();

    assert_eq!(ticket.status, TicketStatus::Open);
    assert!(ticket.reopened_at.is_some());
    assert_eq!(ticket.closed_by, Some(UserId::new(9)));
    assert_eq!(ticket.assigned_to, Some(UserId::new(50)));
}

/// Tests reopening an open ticket.
///
/// Expected: Err(NotTicketChannel)
#[tokio::test]
async fn reopening_open_ticket_is_rejected() {
    let repo = TicketRepository::new();
    repo.insert(open_ticket(1, 100, 7)).await;

    let result = repo.reopen(ChannelId::new(100), Utc::now()).await;

    assert_eq!(result, Err(TicketError::NotTicketChannel));
}

/// Tests closing a channel with no record.
///
/// Expected: Err(MissingRecord)
#[tokio::test]
async fn close_without_record_fails() {
    let repo = TicketRepository::new();

    let result = repo
        .close(ChannelId::new(100), UserId::new(9), Utc::now())
        .await;

    assert_eq!(result, Err(TicketError::MissingRecord));
}
