use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::ticket::application::domain::{Ticket, TicketId, UnknownTicketValue};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "tickets")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    /// One of `open`, `in_progress`, `resolved`, `closed`
    pub status: String,
    /// One of `low`, `medium`, `high`, `urgent`
    pub priority: String,
    pub created_by_id: Uuid,
    #[sea_orm(nullable)]
    pub assigned_to_id: Option<Uuid>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::modules::auth::adapter::outgoing::sea_orm_entity::users::Entity",
        from = "Column::CreatedById",
        to = "crate::modules::auth::adapter::outgoing::sea_orm_entity::users::Column::Id",
        on_delete = "Restrict"
    )]
    Creator,

    #[sea_orm(
        belongs_to = "crate::modules::auth::adapter::outgoing::sea_orm_entity::users::Entity",
        from = "Column::AssignedToId",
        to = "crate::modules::auth::adapter::outgoing::sea_orm_entity::users::Column::Id",
        on_delete = "SetNull"
    )]
    Assignee,
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        use chrono::Utc;
        use sea_orm::ActiveValue::Set;

        if !insert {
            self.updated_at = Set(Utc::now().into());
        }

        Ok(self)
    }
}

impl Model {
    pub fn into_domain(self) -> Result<Ticket, UnknownTicketValue> {
        Ok(Ticket {
            id: TicketId::from(self.id),
            status: self.status.parse()?,
            priority: self.priority.parse()?,
            title: self.title,
            description: self.description,
            created_by: UserId::from(self.created_by_id),
            assigned_to: self.assigned_to_id.map(UserId::from),
            created_at: self.created_at.into(),
            updated_at: self.updated_at.into(),
        })
    }
}
