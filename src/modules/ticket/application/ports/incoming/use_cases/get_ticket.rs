use async_trait::async_trait;

use crate::modules::ticket::application::domain::{Ticket, TicketId};

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetTicketError {
    #[error("Ticket not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Use case trait
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait GetTicketUseCase: Send + Sync {
    async fn execute(&self, ticket_id: TicketId) -> Result<Ticket, GetTicketError>;
}
