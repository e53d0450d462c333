use async_trait::async_trait;

use crate::auth::application::domain::entities::Caller;
use crate::auth::application::domain::policy::PolicyViolation;
use crate::modules::message::application::domain::Conversation;
use crate::modules::ticket::application::domain::TicketId;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum OpenConversationError {
    #[error("Ticket not found")]
    TicketNotFound,

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
pub trait OpenConversationUseCase: Send + Sync {
    async fn execute(
        &self,
        caller: &Caller,
        ticket_id: TicketId,
    ) -> Result<Conversation, OpenConversationError>;
}
