use chrono::{DateTime, Utc};
use serenity::all::{ChannelId, UserId};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::ticket::TicketError;
use crate::model::ticket::{Ticket, TicketNumber, TicketStatus};

#[derive(Default)]
struct TicketStoreState {
    tickets: HashMap<ChannelId, Ticket>,
    /// Channels of every stored ticket per creator, open or closed.
    by_creator: HashMap<UserId, Vec<ChannelId>>,
    /// Last display number handed out. Never decremented.
    last_number: u64,
}

/// Result of a claim attempt that did not conflict.
#[derive(Debug, Clone, PartialEq)]
pub enum ClaimOutcome {
    /// The ticket was unassigned and now belongs to the actor.
    Claimed(Ticket),
    /// The actor already owned the ticket; nothing changed.
    AlreadyYours(Ticket),
}

/// In-memory ticket store keyed by channel.
///
/// Clones share the same underlying state. Nothing is persisted, so a restart drops
/// every ticket and resets the display number counter.
#[derive(Clone, Default)]
pub struct TicketRepository {
    state: Arc<RwLock<TicketStoreState>>,
}

impl TicketRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocates the next sequential display number.
    ///
    /// Numbers are handed out even if the ticket creation later fails, and are never
    /// reused after a ticket is deleted.
    pub async fn next_number(&self) -> TicketNumber {
        let mut state = self.state.write().await;
        state.last_number += 1;
        TicketNumber(state.last_number)
    }

    /// Inserts a ticket, replacing any record already stored for the same channel.
    pub async fn insert(&self, ticket: Ticket) {
        let mut state = self.state.write().await;

        let channels = state.by_creator.entry(ticket.creator_id).or_default();
        if !channels.contains(&ticket.channel_id) {
            channels.push(ticket.channel_id);
        }

        state.tickets.insert(ticket.channel_id, ticket);
    }

    pub async fn get(&self, channel_id: ChannelId) -> Option<Ticket> {
        self.state.read().await.tickets.get(&channel_id).cloned()
    }

    /// Finds an open ticket created by `creator_id`.
    pub async fn find_open_by_creator(&self, creator_id: UserId) -> Option<Ticket> {
        let state = self.state.read().await;

        state
            .by_creator
            .get(&creator_id)?
            .iter()
            .filter_map(|channel_id| state.tickets.get(channel_id))
            .find(|ticket| ticket.status == TicketStatus::Open)
            .cloned()
    }

    /// Assigns the ticket to `actor_id` unless somebody else already holds it.
    ///
    /// The read of the current assignee and the write happen under one lock, so two
    /// concurrent claims cannot both succeed.
    ///
    /// # Returns
    /// - `Ok(ClaimOutcome::Claimed)` - The ticket was unassigned and is now the actor's
    /// - `Ok(ClaimOutcome::AlreadyYours)` - The actor already held the ticket
    /// - `Err(TicketError::Conflict)` - Another member holds the ticket
    /// - `Err(TicketError::MissingRecord)` - No ticket for the channel
    /// - `Err(TicketError::NotTicketChannel)` - The ticket is closed
    pub async fn claim(
        &self,
        channel_id: ChannelId,
        actor_id: UserId,
    ) -> Result<ClaimOutcome, TicketError> {
        let mut state = self.state.write().await;
        let ticket = state
            .tickets
            .get_mut(&channel_id)
            .ok_or(TicketError::MissingRecord)?;

        if ticket.status != TicketStatus::Open {
            return Err(TicketError::NotTicketChannel);
        }

        match ticket.assigned_to {
            Some(assignee) if assignee == actor_id => {
                Ok(ClaimOutcome::AlreadyYours(ticket.clone()))
            }
            Some(assignee) => Err(TicketError::Conflict { assignee }),
            None => {
                ticket.assigned_to = Some(actor_id);
                Ok(ClaimOutcome::Claimed(ticket.clone()))
            }
        }
    }

    /// Moves the stored priority one step along the normal → high → low cycle.
    pub async fn cycle_priority(&self, channel_id: ChannelId) -> Result<Ticket, TicketError> {
        self.modify(channel_id, |ticket| {
            if ticket.status != TicketStatus::Open {
                return Err(TicketError::NotTicketChannel);
            }
            ticket.priority = ticket.priority.next();
            Ok(())
        })
        .await
    }

    /// Marks an open ticket as closed.
    ///
    /// # Returns
    /// - `Ok(Ticket)` - The updated ticket
    /// - `Err(TicketError::NotTicketChannel)` - The ticket was already closed
    /// - `Err(TicketError::MissingRecord)` - No ticket for the channel
    pub async fn close(
        &self,
        channel_id: ChannelId,
        closed_by: UserId,
        closed_at: DateTime<Utc>,
    ) -> Result<Ticket, TicketError> {
        self.modify(channel_id, |ticket| {
            if ticket.status != TicketStatus::Open {
                return Err(TicketError::NotTicketChannel);
            }
            ticket.status = TicketStatus::Closed;
            ticket.closed_by = Some(closed_by);
            ticket.closed_at = Some(closed_at);
            Ok(())
        })
        .await
    }

    /// Marks a closed ticket as open again, keeping its close history.
    pub async fn reopen(
        &self,
        channel_id: ChannelId,
        reopened_at: DateTime<Utc>,
    ) -> Result<Ticket, TicketError> {
        self.modify(channel_id, |ticket| {
            if ticket.status != TicketStatus::Closed {
                return Err(TicketError::NotTicketChannel);
            }
            ticket.status = TicketStatus::Open;
            ticket.reopened_at = Some(reopened_at);
            Ok(())
        })
        .await
    }

    /// Removes the ticket stored for `channel_id`, if any.
    pub async fn remove(&self, channel_id: ChannelId) -> Option<Ticket> {
        let mut state = self.state.write().await;
        let ticket = state.tickets.remove(&channel_id)?;

        if let Some(channels) = state.by_creator.get_mut(&ticket.creator_id) {
            channels.retain(|id| *id != channel_id);
            if channels.is_empty() {
                state.by_creator.remove(&ticket.creator_id);
            }
        }

        Some(ticket)
    }

    pub async fn len(&self) -> usize {
        self.state.read().await.tickets.len()
    }

    async fn modify<F>(&self, channel_id: ChannelId, f: F) -> Result<Ticket, TicketError>
    where
        F: FnOnce(&mut Ticket) -> Result<(), TicketError>,
    {
        let mut state = self.state.write().await;
        let ticket = state
            .tickets
            .get_mut(&channel_id)
            .ok_or(TicketError::MissingRecord)?;

        f(ticket)?;

        Ok(ticket.clone())
    }
}
