use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::message::application::domain::{Conversation, Message};
use crate::modules::ticket::application::domain::TicketId;

#[derive(Debug, Clone)]
pub struct CreateMessageData {
    pub ticket_id: TicketId,
    pub author_id: UserId,
    pub conversation_id: Option<Uuid>,
    pub content: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum MessageRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait MessageRepository: Send + Sync {
    async fn create_message(&self, data: CreateMessageData) -> Result<Message, MessageRepositoryError>;

    /// Oldest first.
    async fn list_messages(&self, ticket_id: TicketId) -> Result<Vec<Message>, MessageRepositoryError>;

    async fn create_conversation(
        &self,
        ticket_id: TicketId,
        opened_by: UserId,
    ) -> Result<Conversation, MessageRepositoryError>;

    async fn find_conversation(
        &self,
        conversation_id: Uuid,
    ) -> Result<Option<Conversation>, MessageRepositoryError>;
}
