use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::ticket::application::domain::TicketId;

/// Messages are append-only: once stored they are never edited.
#[derive(Debug, Clone)]
pub struct Message {
    pub id: Uuid,
    pub ticket_id: TicketId,
    pub author_id: UserId,
    pub conversation_id: Option<Uuid>,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ConversationStatus {
    #[default]
    Active,
    Closed,
}

impl ConversationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConversationStatus::Active => "active",
            ConversationStatus::Closed => "closed",
        }
    }
}

impl fmt::Display for ConversationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown conversation status '{0}'")]
pub struct UnknownConversationStatus(pub String);

impl FromStr for ConversationStatus {
    type Err = UnknownConversationStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(ConversationStatus::Active),
            "closed" => Ok(ConversationStatus::Closed),
            other => Err(UnknownConversationStatus(other.to_string())),
        }
    }
}

/// Optional thread grouping messages under one ticket.
#[derive(Debug, Clone)]
pub struct Conversation {
    pub id: Uuid,
    pub ticket_id: TicketId,
    pub opened_by: UserId,
    pub status: ConversationStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Conversation {
    pub fn belongs_to(&self, ticket_id: TicketId) -> bool {
        self.ticket_id == ticket_id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MessageValidationError {
    #[error("Message content cannot be empty")]
    EmptyContent,
}

pub fn validate_content(content: &str) -> Result<String, MessageValidationError> {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return Err(MessageValidationError::EmptyContent);
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_content() {
        assert_eq!(validate_content(" hello \n"), Ok("hello".to_string()));
        assert_eq!(
            validate_content(" \t\n"),
            Err(MessageValidationError::EmptyContent)
        );
    }

    #[test]
    fn test_conversation_status_round_trip() {
        assert_eq!("active".parse(), Ok(ConversationStatus::Active));
        assert_eq!("closed".parse(), Ok(ConversationStatus::Closed));
        assert!("archived".parse::<ConversationStatus>().is_err());
    }

    #[test]
    fn test_conversation_belongs_to_its_ticket() {
        let ticket_id = TicketId::new();
        let conversation = Conversation {
            id: Uuid::new_v4(),
            ticket_id,
            opened_by: UserId::new(),
            status: ConversationStatus::Active,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        assert!(conversation.belongs_to(ticket_id));
        assert!(!conversation.belongs_to(TicketId::new()));
    }
}
