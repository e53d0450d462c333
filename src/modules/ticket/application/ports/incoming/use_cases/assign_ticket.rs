use async_trait::async_trait;

use crate::auth::application::domain::entities::{Caller, UserId};
use crate::auth::application::domain::policy::PolicyViolation;
use crate::modules::ticket::application::domain::{Ticket, TicketId};

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum AssignTicketError {
    #[error("Forbidden: {0}")]
    Forbidden(#[from] PolicyViolation),

    #[error("Ticket not found")]
    TicketNotFound,

    #[error("Agent not found")]
    AgentNotFound,

    #[error("Tickets can only be assigned to agents")]
    AssigneeNotAgent,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Use case trait
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait AssignTicketUseCase: Send + Sync {
    async fn execute(
        &self,
        caller: &Caller,
        ticket_id: TicketId,
        agent_id: UserId,
    ) -> Result<Ticket, AssignTicketError>;
}
