use async_trait::async_trait;

use crate::auth::application::domain::entities::Caller;
use crate::auth::application::domain::policy::PolicyViolation;
use crate::modules::ticket::application::domain::TicketId;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteTicketError {
    #[error("Ticket not found")]
    NotFound,

    #[error("Forbidden: {0}")]
    Forbidden(#[from] PolicyViolation),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Use case trait
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait DeleteTicketUseCase: Send + Sync {
    async fn execute(&self, caller: &Caller, ticket_id: TicketId) -> Result<(), DeleteTicketError>;
}
