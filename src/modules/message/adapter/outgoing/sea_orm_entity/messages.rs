use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::message::application::domain::Message;
use crate::modules::ticket::application::domain::TicketId;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "messages")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub ticket_id: Uuid,
    pub user_id: Uuid,
    #[sea_orm(nullable)]
    pub conversation_id: Option<Uuid>,
    pub created_at: DateTimeWithTimeZone,
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

    #[sea_orm(
        belongs_to = "crate::modules::auth::adapter::outgoing::sea_orm_entity::users::Entity",
        from = "Column::UserId",
        to = "crate::modules::auth::adapter::outgoing::sea_orm_entity::users::Column::Id",
        on_delete = "Restrict"
    )]
    Author,

    #[sea_orm(
        belongs_to = "super::conversations::Entity",
        from = "Column::ConversationId",
        to = "super::conversations::Column::Id",
        on_delete = "SetNull"
    )]
    Conversation,
}

impl Related<super::conversations::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Conversation.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Message {
    fn from(model: Model) -> Self {
        Message {
            id: model.id,
            ticket_id: TicketId::from(model.ticket_id),
            author_id: UserId::from(model.user_id),
            conversation_id: model.conversation_id,
            content: model.content,
            created_at: model.created_at.into(),
        }
    }
}
