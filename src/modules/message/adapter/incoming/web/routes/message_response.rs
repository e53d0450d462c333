use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::modules::message::application::domain::{Conversation, ConversationStatus, Message};

#[derive(Debug, Serialize, ToSchema)]
pub struct TicketMessageResponse {
    pub id: Uuid,
    pub ticket_id: Uuid,
    pub author_id: Uuid,
    pub conversation_id: Option<Uuid>,

    #[schema(example = "Restarting the router fixed it for an hour")]
    pub content: String,

    pub created_at: DateTime<Utc>,
}

impl From<Message> for TicketMessageResponse {
    fn from(message: Message) -> Self {
        Self {
            id: message.id,
            ticket_id: message.ticket_id.value(),
            author_id: message.author_id.value(),
            conversation_id: message.conversation_id,
            content: message.content,
            created_at: message.created_at,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ConversationResponse {
    pub id: Uuid,
    pub ticket_id: Uuid,
    pub opened_by: Uuid,
    pub status: ConversationStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Conversation> for ConversationResponse {
    fn from(conversation: Conversation) -> Self {
        Self {
            id: conversation.id,
            ticket_id: conversation.ticket_id.value(),
            opened_by: conversation.opened_by.value(),
            status: conversation.status,
            created_at: conversation.created_at,
            updated_at: conversation.updated_at,
        }
    }
}
