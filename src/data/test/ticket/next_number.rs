use super::*;

/// Tests that display numbers are handed out sequentially from 1.
///
/// Expected: 1, 2, 3 in call order
#[tokio::test]
async fn allocates_sequential_numbers() {
    let repo = TicketRepository::new();

    assert_eq!(repo.next_number().await, TicketNumber(1));
    assert_eq!(repo.next_number().await, TicketNumber(2));
    assert_eq!(repo.next_number().await, TicketNumber(3));
}

/// Tests that removing a ticket does not free its number.
///
/// Expected: the number after a removal continues the sequence
#[tokio::test]
async fn numbers_are_not_reused_after_removal() {
    let repo = TicketRepository::new();

    let number = repo.next_number().await;
    repo.insert(open_ticket(number.0, 100, 1)).await;
    repo.remove(ChannelId::new(100)).await;

    assert_eq!(repo.next_number().await, TicketNumber(2));
}

/// Tests that concurrent allocations never hand out the same number twice.
///
/// Expected: 50 distinct numbers covering 1..=50
#[tokio::test]
async fn concurrent_allocations_are_unique() {
    let repo = TicketRepository::new();

    let handles: Vec<_> = (0..50)
        .map(|_| {
            let repo = repo.clone();
            tokio::spawn(async move { repo.next_number().await })
        })
        .collect();

    let mut numbers = Vec::new();
    for handle in handles {
        numbers.push(handle.await.unwrap().0);
    }
    numbers.sort_unstable();

    assert_eq!(numbers, (1..=50).collect::<Vec<_>>());
}
