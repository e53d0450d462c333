use async_trait::async_trait;

use crate::modules::message::application::domain::Message;
use crate::modules::ticket::application::domain::TicketId;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListMessagesError {
    #[error("Ticket not found")]
    TicketNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Use case trait
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait ListMessagesUseCase: Send + Sync {
    async fn execute(&self, ticket_id: TicketId) -> Result<Vec<Message>, ListMessagesError>;
}
