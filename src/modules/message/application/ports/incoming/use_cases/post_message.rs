use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::Caller;
use crate::auth::application::domain::policy::PolicyViolation;
use crate::modules::message::application::domain::{Message, MessageValidationError};
use crate::modules::ticket::application::domain::TicketId;

#[derive(Debug, Clone)]
pub struct PostMessageCommand {
    pub content: String,
    pub conversation_id: Option<Uuid>,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum PostMessageError {
    #[error("Ticket not found")]
    TicketNotFound,

    #[error("Forbidden: {0}")]
    Forbidden(#[from] PolicyViolation),

    #[error("{0}")]
    InvalidInput(#[from] MessageValidationError),

    #[error("Conversation does not belong to this ticket")]
    InvalidConversation,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Use case trait
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait PostMessageUseCase: Send + Sync {
    async fn execute(
        &self,
        caller: &Caller,
        ticket_id: TicketId,
        command: PostMessageCommand,
    ) -> Result<Message, PostMessageError>;
}
