use super::*;

/// Tests finding the open ticket of a creator.
///
/// Expected: Some with the creator's ticket
#[tokio::test]
async fn finds_open_ticket() {
    let repo = TicketRepository::new();
    repo.insert(open_ticket(1, 100, 7)).await;
    repo.insert(open_ticket(2, 200, 8)).await;

    let found = repo.find_open_by_creator(UserId::new(7)).await.unwrap();

    assert_eq!(found.channel_id, ChannelId::new(100));
}

/// Tests that closed tickets do not count as open.
///
/// Expected: None once the only ticket is closed, Some again after reopening
#[tokio::test]
async fn ignores_closed_tickets() {
    let repo = TicketRepository::new();
    repo.insert(open_ticket(1, 100, 7)).await;

    repo.close(ChannelId::new(100), UserId::new(9), Utc::now())
        .await
        .unwrap();
    assert!(repo.find_open_by_creator(UserId::new(7)).await.is_none());

    repo.reopen(ChannelId::new(100), Utc::now()).await.unwrap();
    assert!(repo.find_open_by_creator(UserId::new(7)).await.is_some());
}

/// Tests that a closed ticket does not hide a later open one.
///
/// Expected: the open ticket in the second channel
#[tokio::test]
async fn finds_open_ticket_among_closed_ones() {
    let repo = TicketRepository::new();
    repo.insert(open_ticket(1, 100, 7)).await;
    repo.close(ChannelId::new(100), UserId::new(7), Utc::now())
        .await
        .unwrap();
    repo.insert(open_ticket(2, 200, 7)).await;

    let found = repo.find_open_by_creator(UserId::new(7)).await.unwrap();

    assert_eq!(found.number, TicketNumber(2));
}

/// Tests a creator without tickets.
///
/// Expected: None
#[tokio::test]
async fn returns_none_for_unknown_creator() {
    let repo = TicketRepository::new();

    assert!(repo.find_open_by_creator(UserId::new(7)).await.is_none());
}
