use async_trait::async_trait;

use crate::modules::ticket::application::domain::Ticket;
use crate::modules::ticket::application::ports::outgoing::TicketFilter;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListTicketsError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Use case trait
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait ListTicketsUseCase: Send + Sync {
    async fn execute(&self, filter: TicketFilter) -> Result<Vec<Ticket>, ListTicketsError>;
}
