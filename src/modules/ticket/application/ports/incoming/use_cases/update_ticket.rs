use async_trait::async_trait;

use crate::auth::application::domain::entities::Caller;
use crate::auth::application::domain::policy::PolicyViolation;
use crate::modules::ticket::application::domain::{
    Ticket, TicketId, TicketPriority, TicketStatus, TicketValidationError,
};

#[derive(Debug, Clone, Default)]
pub struct UpdateTicketCommand {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<TicketStatus>,
    pub priority: Option<TicketPriority>,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateTicketError {
    #[error("Ticket not found")]
    NotFound,

    #[error("Forbidden: {0}")]
    Forbidden(#[from] PolicyViolation),

    #[error("{0}")]
    InvalidInput(#[from] TicketValidationError),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Use case trait
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait UpdateTicketUseCase: Send + Sync {
    async fn execute(
        &self,
        caller: &Caller,
        ticket_id: TicketId,
        command: UpdateTicketCommand,
    ) -> Result<Ticket, UpdateTicketError>;
}
