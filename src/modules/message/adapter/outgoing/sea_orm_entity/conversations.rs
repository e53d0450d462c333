use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::message::application::domain::{Conversation, UnknownConversationStatus};
use crate::modules::ticket::application::domain::TicketId;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "conversations")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub ticket_id: Uuid,
    pub user_id: Uuid,
    /// `active` or `closed`
    pub status: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::modules::ticket::adapter::outgoing::sea_orm_entity::tickets::Entity",
        from = "Column::TicketId",
        to = "crate::modules::ticket::adapter::outgoing::sea_orm_entity::tickets::Column::Id",
        on_delete = "Cascade"
    )]
    Ticket,

    #[sea_orm(has_many = "super::messages::Entity")]
    Messages,
}

impl Related<super::messages::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Messages.def()
    }
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
    pub fn into_domain(self) -> Result<Conversation, UnknownConversationStatus> {
        Ok(Conversation {
            id: self.id,
            ticket_id: TicketId::from(self.ticket_id),
            opened_by: UserId::from(self.user_id),
            status: self.status.parse()?,
            created_at: self.created_at.into(),
            updated_at: self.updated_at.into(),
        })
    }
}
