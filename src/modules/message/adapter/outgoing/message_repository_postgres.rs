use async_trait::async_trait;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::message::application::domain::{Conversation, ConversationStatus, Message};
use crate::modules::message::application::ports::outgoing::{
    CreateMessageData, MessageRepository, MessageRepositoryError,
};
use crate::modules::ticket::application::domain::TicketId;

use super::sea_orm_entity::conversations::{
    ActiveModel as ConversationActiveModel, Entity as ConversationEntity,
    Model as ConversationModel,
};
use super::sea_orm_entity::messages::{
    ActiveModel as MessageActiveModel, Column as MessageColumn, Entity as MessageEntity,
};

// ============================================================================
// Repository Implementation
// ============================================================================

#[derive(Clone, Debug)]
pub struct MessageRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl MessageRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl MessageRepository for MessageRepositoryPostgres {
    async fn create_message(&self, data: CreateMessageData) -> Result<Message, MessageRepositoryError> {
        let model = MessageActiveModel {
            id: Set(Uuid::new_v4()),
            content: Set(data.content),
            ticket_id: Set(data.ticket_id.value()),
            user_id: Set(data.author_id.value()),
            conversation_id: Set(data.conversation_id),
            created_at: NotSet,
        };

        let inserted = model.insert(&*self.db).await.map_err(map_db_err)?;
        Ok(inserted.into())
    }

    async fn list_messages(&self, ticket_id: TicketId) -> Result<Vec<Message>, MessageRepositoryError> {
        let rows = MessageEntity::find()
            .filter(MessageColumn::TicketId.eq(ticket_id.value()))
            .order_by_asc(MessageColumn::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows.into_iter().map(Message::from).collect())
    }

    async fn create_conversation(
        &self,
        ticket_id: TicketId,
        opened_by: UserId,
    ) -> Result<Conversation, MessageRepositoryError> {
        let model = ConversationActiveModel {
            id: Set(Uuid::new_v4()),
            ticket_id: Set(ticket_id.value()),
            user_id: Set(opened_by.value()),
            status: Set(ConversationStatus::Active.as_str().to_string()),
            created_at: NotSet,
            updated_at: NotSet,
        };

        let inserted = model.insert(&*self.db).await.map_err(map_db_err)?;
        conversation_to_domain(inserted)
    }

    async fn find_conversation(
        &self,
        conversation_id: Uuid,
    ) -> Result<Option<Conversation>, MessageRepositoryError> {
        ConversationEntity::find_by_id(conversation_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .map(conversation_to_domain)
            .transpose()
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn conversation_to_domain(model: ConversationModel) -> Result<Conversation, MessageRepositoryError> {
    model
        .into_domain()
        .map_err(|e| MessageRepositoryError::DatabaseError(e.to_string()))
}

fn map_db_err(e: DbErr) -> MessageRepositoryError {
    MessageRepositoryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================
