use super::*;

/// Tests claiming an unassigned ticket.
///
/// Expected: Claimed with the actor assigned
#[tokio::test]
async fn claims_unassigned_ticket() {
    let repo = TicketRepository::new();
    repo.insert(open_ticket(1, 100, 7)).await;

    let outcome = repo.claim(ChannelId::new(100), UserId::new(50)).await;

    match outcome {
        Ok(ClaimOutcome::Claimed(ticket)) => {
            assert_eq!(ticket.assigned_to, Some(UserId::new(50)))
        }
        other => panic!("Expected Claimed, got {:?}", other),
    }
}

/// Tests claiming a ticket the actor already holds.
///
/// Expected: AlreadyYours and no change
#[tokio::test]
async fn reclaiming_own_ticket_is_idempotent() {
    let repo = TicketRepository::new();
    repo.insert(open_ticket(1, 100, 7)).await;
    repo.claim(ChannelId::new(100), UserId::new(50)).await.unwrap();

    let outcome = repo.claim(ChannelId::new(100), UserId::new(50)).await;

    assert!(matches!(outcome, Ok(ClaimOutcome::AlreadyYours(_))));
}

/// Tests claiming a ticket held by someone else.
///
/// Expected: Err(Conflict) naming the current assignee, assignee unchanged
#[tokio::test]
async fn conflicting_claim_is_rejected() {
    let repo = TicketRepository::new();
    repo.insert(open_ticket(1, 100, 7)).await;
    repo.claim(ChannelId::new(100), UserId::new(50)).await.unwrap();

    let result = repo.claim(ChannelId::new(100), UserId::new(51)).await;

    assert_eq!(
        result,
        Err(TicketError::Conflict {
            assignee: UserId::new(50)
        })
    );
    let stored = repo.get(ChannelId::new(100)).await.unwrap();
    assert_eq!(stored.assigned_to, Some(UserId::new(50)));
}

/// Tests that exactly one of many concurrent claims wins.
///
/// Expected: one Claimed, the rest Conflict with the winner as assignee
#[tokio::test]
async fn concurrent_claims_have_single_winner() {
    let repo = TicketRepository::new();
    repo.insert(open_ticket(1, 100, 7)).await;

    let handles: Vec<_> = (1..=20)
        .map(|actor| {
            let repo = repo.clone();
            tokio::spawn(async move { repo.claim(ChannelId::new(100), UserId::new(actor)).await })
        })
        .collect();

    let mut winners = Vec::new();
    let mut conflicts = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(ClaimOutcome::Claimed(ticket)) => winners.push(ticket.assigned_to),
            Err(TicketError::Conflict { .. }) => conflicts += 1,
            other => panic!("Unexpected claim result {:?}", other),
        }
    }

    assert_eq!(winners.len(), 1);
    assert_eq!(conflicts, 19);
    let stored = repo.get(ChannelId::new(100)).await.unwrap();
    assert_eq!(stored.assigned_to, winners[0]);
}

/// Tests claiming a closed ticket.
///
/// Expected: Err(NotTicketChannel)
#[tokio::test]
async fn closed_ticket_cannot_be_claimed() {
    let repo = TicketRepository::new();
    repo.insert(open_ticket(1, 100, 7)).await;
    repo.close(ChannelId::new(100), UserId::new(7), Utc::now())
        .await
        .unwrap();

    let result = repo.claim(ChannelId::new(100), UserId::new(50)).await;

    assert_eq!(result, Err(TicketError::NotTicketChannel));
}

/// Tests claiming in a channel with no record.
///
/// Expected: Err(MissingRecord)
#[tokio::test]
async fn missing_record_cannot_be_claimed() {
    let repo = TicketRepository::new();

    let result = repo.claim(ChannelId::new(100), UserId::new(50)).await;

    assert_eq!(result, Err(TicketError::MissingRecord));
}
