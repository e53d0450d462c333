use async_trait::async_trait;
use tracing::{error, info, warn};

use crate::auth::application::domain::entities::Caller;
use crate::auth::application::domain::policy::can_post_to_ticket;
use crate::modules::message::application::domain::Conversation;
use crate::modules::message::application::ports::incoming::use_cases::{
    OpenConversationError, OpenConversationUseCase,
};
use crate::modules::message::application::ports::outgoing::MessageRepository;
use crate::modules::ticket::application::domain::TicketId;
use crate::modules::ticket::application::ports::outgoing::TicketRepository;

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

pub struct OpenConversationService<T, M>
where
    T: TicketRepository,
    M: MessageRepository,
{
    ticket_repository: T,
    message_repository: M,
}

impl<T, M> OpenConversationService<T, M>
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
impl<T, M> OpenConversationUseCase for OpenConversationService<T, M>
where
    T: TicketRepository + Send + Sync,
    M: MessageRepository + Send + Sync,
{
    async fn execute(
        &self,
        caller: &Caller,
        ticket_id: TicketId,
    ) -> Result<Conversation, OpenConversationError> {
        let ticket = self
            .ticket_repository
            .find_by_id(ticket_id)
            .await
            .map_err(|e| OpenConversationError::RepositoryError(e.to_string()))?
            .ok_or(OpenConversationError::TicketNotFound)?;

        if let Err(violation) = can_post_to_ticket(caller, &ticket.ownership()) {
            warn!(ticket_id = %ticket_id, user_id = %caller.id, "Conversation open denied");
            return Err(violation.into());
        }

        let conversation = self
            .message_repository
            .create_conversation(ticket_id, caller.id)
            .await
            .map_err(|e| {
                error!(ticket_id = %ticket_id, error = %e, "Failed to open conversation");
                OpenConversationError::RepositoryError(e.to_string())
            })?;

        info!(ticket_id = %ticket_id, conversation_id = %conversation.id, "Conversation opened");
        Ok(conversation)
    }
}
