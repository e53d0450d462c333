use async_trait::async_trait;

use crate::modules::message::application::domain::Message;
use crate::modules::message::application::ports::incoming::use_cases::{
    ListMessagesError, ListMessagesUseCase,
};
use crate::modules::message::application::ports::outgoing::MessageRepository;
use crate::modules::ticket::application::domain::TicketId;
use crate::modules::ticket::application::ports::outgoing::TicketRepository;

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

pub struct ListMessagesService<T, M>
where
    T: TicketRepository,
    M: MessageRepository,
{
    ticket_repository: T,
    message_repository: M,
}

impl<T, M> ListMessagesService<T, M>
where
    T: TicketRepository,
    M: MessageRepository,
{
    pub fn new(ticket_repository: T, message_repository: M) -> Self {
        Self {
            ticket_repository,
            message_repository,
        }
    }
}

#[async_trait]
impl<T, M> ListMessagesUseCase for ListMessagesService<T, M>
where
    T: TicketRepository + Send + Sync,
    M: MessageRepository + Send + Sync,
{
    async fn execute(&self, ticket_id: TicketId) -> Result<Vec<Message>, ListMessagesError> {
        self.ticket_repository
            .find_by_id(ticket_id)
            .await
            .map_err(|e| ListMessagesError::RepositoryError(e.to_string()))?
            .ok_or(ListMessagesError::TicketNotFound)?;

        self.message_repository
            .list_messages(ticket_id)
            .await
            .map_err(|e| ListMessagesError::RepositoryError(e.to_string()))
    }
}
