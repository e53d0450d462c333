use async_trait::async_trait;

use crate::auth::application::domain::entities::Caller;
use crate::modules::ticket::application::domain::{Ticket, TicketPriority, TicketValidationError};

/// Tickets always start `open`; there is no status field to set here.
#[derive(Debug, Clone)]
pub struct CreateTicketCommand {
    pub title: String,
    pub description: String,
    pub priority: Option<TicketPriority>,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateTicketError {
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
pub trait CreateTicketUseCase: Send + Sync {
    async fn execute(
        &self,
        caller: &Caller,
        command: CreateTicketCommand,
    ) -> Result<Ticket, CreateTicketError>;
}
