use async_trait::async_trait;
use tracing::{error, info, warn};

use crate::auth::application::domain::entities::Caller;
use crate::auth::application::domain::policy::can_post_to_ticket;
use crate::modules::message::application::domain::{validate_content, Message};
use crate::modules::message::application::ports::incoming::use_cases::{
    PostMessageCommand, PostMessageError, PostMessageUseCase,
};
use crate::modules::message::application::ports::outgoing::{
    CreateMessageData, MessageRepository,
};
use crate::modules::ticket::application::domain::TicketId;
use crate::modules::ticket::application::ports::outgoing::TicketRepository;

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

pub struct PostMessageService<T, M>
where
    T: TicketRepository,
    M: MessageRepository,
{
    ticket_repository: T,
    message_repository: M,
}

impl<T, M> PostMessageService<T, M>
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
impl<T, M> PostMessageUseCase for PostMessageService<T, M>
where
    T: TicketRepository + Send + Sync,
    M: MessageRepository + Send + Sync,
{
    async fn execute(
        &self,
        caller: &Caller,
        ticket_id: TicketId,
        command: PostMessageCommand,
    ) -> Result<Message, PostMessageError> {
        let ticket = self
            .ticket_repository
            .find_by_id(ticket_id)
            .await
            .map_err(|e| PostMessageError::RepositoryError(e.to_string()))?
            .ok_or(PostMessageError::TicketNotFound)?;

        if let Err(violation) = can_post_to_ticket(caller, &ticket.ownership()) {
            warn!(ticket_id = %ticket_id, user_id = %caller.id, "Message post denied");
            return Err(violation.into());
        }

        let content = validate_content(&command.content)?;

        if let Some(conversation_id) = command.conversation_id {
            let conversation = self
                .message_repository
                .find_conversation(conversation_id)
                .await
                .map_err(|e| PostMessageError::RepositoryError(e.to_string()))?;

            if !conversation.is_some_and(|c| c.belongs_to(ticket_id)) {
                warn!(
                    ticket_id = %ticket_id,
                    conversation_id = %conversation_id,
                    "Message names a conversation outside its ticket"
                );
                return Err(PostMessageError::InvalidConversation);
            }
        }

        let message = self
            .message_repository
            .create_message(CreateMessageData {
                ticket_id,
                author_id: caller.id,
                conversation_id: command.conversation_id,
                content,
            })
            .await
            .map_err(|e| {
                error!(ticket_id = %ticket_id, error = %e, "Failed to store message");
                PostMessageError::RepositoryError(e.to_string())
            })?;

        info!(ticket_id = %ticket_id, message_id = %message.id, user_id = %caller.id, "Message posted");
        Ok(message)
    }
}
