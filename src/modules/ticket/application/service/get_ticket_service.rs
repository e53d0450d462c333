use async_trait::async_trait;

use crate::modules::ticket::application::domain::{Ticket, TicketId};
use crate::modules::ticket::application::ports::incoming::use_cases::{
    GetTicketError, GetTicketUseCase,
};
use crate::modules::ticket::application::ports::outgoing::TicketRepository;

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

pub struct GetTicketService<R>
where
    R: TicketRepository,
{
    ticket_repository: R,
}

impl<R> GetTicketService<R>
where
    R: TicketRepository,
{
    pub fn new(ticket_repository: R) -> Self {
        Self { ticket_repository }
    }
}

#[async_trait]
impl<R> GetTicketUseCase for GetTicketService<R>
where
    R: TicketRepository + Send + Sync,
{
    async fn execute(&self, ticket_id: TicketId) -> Result<Ticket, GetTicketError> {
        self.ticket_repository
            .find_by_id(ticket_id)
            .await
            .map_err(|e| GetTicketError::RepositoryError(e.to_string()))?
            .ok_or(GetTicketError::NotFound)
    }
}
