use super::*;

/// Tests removing a ticket.
///
/// Expected: the removed ticket returned, store empty, creator index cleared
#[tokio::test]
async fn removes_ticket_and_index_entry() {
    let repo = TicketRepository::new();
    repo.insert(open_ticket(1, 100, 7)).await;

    let removed = repo.remove(ChannelId::new(100)).await;

    assert_eq!(removed.map(|t| t.number), Some(TicketNumber(1)));
    assert_eq!(repo.len().await, 0);
    assert!(repo.find_open_by_creator(UserId::new(7)).await.is_none());
}

/// Tests removing an unknown channel.
///
/// Expected: None
#[tokio::test]
async fn removing_unknown_channel_is_noop() {
    let repo = TicketRepository::new();
    repo.insert(open_ticket(1, 100, 7)).await;

    assert!(repo.remove(ChannelId::new(999)).await.is_none());
    assert_eq!(repo.len().await, 1);
}

/// Tests that removing one of a creator's tickets keeps the others indexed.
///
/// Expected: the remaining open ticket is still found
#[tokio::test]
async fn keeps_other_tickets_of_creator() {
    let repo = TicketRepository::new();
    repo.insert(open_ticket(1, 100, 7)).await;
    repo.close(ChannelId::new(100), UserId::new(7), Utc::now())
        .await
        .unwrap();
    repo.insert(open_ticket(2, 200, 7)).await;

    repo.remove(ChannelId::new(100)).await;

    let found = repo.find_open_by_creator(UserId::new(7)).await.unwrap();
    assert_eq!(found.channel_id, ChannelId::new(200));
}
