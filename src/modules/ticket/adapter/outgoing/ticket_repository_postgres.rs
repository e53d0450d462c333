use async_trait::async_trait;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::ticket::application::domain::{Ticket, TicketId, TicketStatus};
use crate::modules::ticket::application::ports::outgoing::{
    CreateTicketData, TicketFilter, TicketRepository, TicketRepositoryError, UpdateTicketData,
};

use super::sea_orm_entity::tickets::{
    ActiveModel as TicketActiveModel, Column, Entity as TicketEntity, Model as TicketModel,
};

// ============================================================================
// Repository Implementation
// ============================================================================

#[derive(Clone, Debug)]
pub struct TicketRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl TicketRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn load(&self, ticket_id: TicketId) -> Result<TicketActiveModel, TicketRepositoryError> {
        let ticket = TicketEntity::find_by_id(ticket_id.value())
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(TicketRepositoryError::NotFound)?;
        Ok(ticket.into())
    }
}

#[async_trait]
impl TicketRepository for TicketRepositoryPostgres {
    async fn create_ticket(&self, data: CreateTicketData) -> Result<Ticket, TicketRepositoryError> {
        let model = TicketActiveModel {
            id: Set(Uuid::new_v4()),
            title: Set(data.title),
            description: Set(data.description),
            status: Set(TicketStatus::Open.as_str().to_string()),
            priority: Set(data.priority.as_str().to_string()),
            created_by_id: Set(data.created_by.value()),
            assigned_to_id: Set(None),
            created_at: NotSet,
            updated_at: NotSet,
        };

        let inserted = model.insert(&*self.db).await.map_err(map_db_err)?;
        to_domain(inserted)
    }

    async fn find_by_id(&self, ticket_id: TicketId) -> Result<Option<Ticket>, TicketRepositoryError> {
        TicketEntity::find_by_id(ticket_id.value())
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .map(to_domain)
            .transpose()
    }

    async fn list_tickets(&self, filter: TicketFilter) -> Result<Vec<Ticket>, TicketRepositoryError> {
        let mut query = TicketEntity::find();

        if let Some(status) = filter.status {
            query = query.filter(Column::Status.eq(status.as_str()));
        }
        if let Some(priority) = filter.priority {
            query = query.filter(Column::Priority.eq(priority.as_str()));
        }
        if let Some(assignee) = filter.assigned_to {
            query = query.filter(Column::AssignedToId.eq(assignee.value()));
        }

        query
            .order_by_desc(Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?
            .into_iter()
            .map(to_domain)
            .collect()
    }

    async fn update_ticket(
        &self,
        ticket_id: TicketId,
        data: UpdateTicketData,
    ) -> Result<Ticket, TicketRepositoryError> {
        let mut model = self.load(ticket_id).await?;

        if let Some(title) = data.title {
            model.title = Set(title);
        }
        if let Some(description) = data.description {
            model.description = Set(description);
        }
        if let Some(status) = data.status {
            model.status = Set(status.as_str().to_string());
        }
        if let Some(priority) = data.priority {
            model.priority = Set(priority.as_str().to_string());
        }

        let updated = model.update(&*self.db).await.map_err(map_db_err)?;
        to_domain(updated)
    }

    async fn assign_ticket(
        &self,
        ticket_id: TicketId,
        assignee: UserId,
    ) -> Result<Ticket, TicketRepositoryError> {
        let mut model = self.load(ticket_id).await?;
        model.assigned_to_id = Set(Some(assignee.value()));

        let updated = model.update(&*self.db).await.map_err(map_db_err)?;
        to_domain(updated)
    }

    async fn delete_ticket(&self, ticket_id: TicketId) -> Result<(), TicketRepositoryError> {
        let result = TicketEntity::delete_by_id(ticket_id.value())
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(TicketRepositoryError::NotFound);
        }

        Ok(())
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn to_domain(model: TicketModel) -> Result<Ticket, TicketRepositoryError> {
    model
        .into_domain()
        .map_err(|e| TicketRepositoryError::DatabaseError(e.to_string()))
}

fn map_db_err(e: DbErr) -> TicketRepositoryError {
    TicketRepositoryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================
