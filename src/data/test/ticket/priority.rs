use super::*;

/// Tests the full priority cycle from the default.
///
/// Expected: normal -> high -> low -> normal
#[tokio::test]
async fn cycles_through_all_priorities() {
    let repo = TicketRepository::new();
    repo.insert(open_ticket(1, 100, 7)).await;
    let channel = ChannelId::new(100);

    assert_eq!(repo.cycle_priority(channel).await.unwrap().priority, Priority::High);
    assert_eq!(repo.cycle_priority(channel).await.unwrap().priority, Priority::Low);
    assert_eq!(repo.cycle_priority(channel).await.unwrap().priority, Priority::Normal);
}

/// Tests that priority cannot change on a closed ticket.
///
/// Expected: Err(NotTicketChannel) and priority unchanged
#[tokio::test]
async fn closed_ticket_priority_is_frozen() {
    let repo = TicketRepository::new();
    repo.insert(open_ticket(1, 100, 7)).await;
    repo.close(ChannelId::new(100), UserId::new(7), Utc::now())
        .await
        .unwrap();

    let result = repo.cycle_priority(ChannelId::new(100)).await;

    assert_eq!(result, Err(TicketError::NotTicketChannel));
    assert_eq!(
        repo.get(ChannelId::new(100)).await.unwrap().priority,
        Priority::Normal
    );
}
