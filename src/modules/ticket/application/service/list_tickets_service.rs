use async_trait::async_trait;

use crate::modules::ticket::application::domain::Ticket;
use crate::modules::ticket::application::ports::incoming::use_cases::{
    ListTicketsError, ListTicketsUseCase,
};
use crate::modules::ticket::application::ports::outgoing::{TicketFilter, TicketRepository};

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

pub struct ListTicketsService<R>
where
    R: TicketRepository,
{
    ticket_repository: R,
}

impl<R> ListTicketsService<R>
where
    R: TicketRepository,
{
    pub fn new(ticket_repository: R) -> Self {
        Self { ticket_repository }
    }
}

#[async_trait]
impl<R> ListTicketsUseCase for ListTicketsService<R>
where
    R: TicketRepository + Send + Sync,
{
    async fn execute(&self, filter: TicketFilter) -> Result<Vec<Ticket>, ListTicketsError> {
        self.ticket_repository
            .list_tickets(filter)
            .await
            .map_err(|e| ListTicketsError::RepositoryError(e.to_string()))
    }
}
