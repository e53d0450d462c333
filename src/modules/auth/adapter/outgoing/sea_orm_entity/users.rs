use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::auth::application::domain::entities::{UnknownRole, User, UserId};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub email: String,
    pub password_hash: String,
    pub name: String,
    /// One of `admin`, `agent`, `customer`
    pub role: String,
    pub is_suspended: bool,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        use chrono::Utc;
        use sea_orm::ActiveValue::Set;

        if !insert {
            // Only update updated_at on UPDATE, not INSERT
            self.updated_at = Set(Utc::now().into());
        }

        Ok(self)
    }
}

impl Model {
    pub fn into_domain(self) -> Result<User, UnknownRole> {
        Ok(User {
            id: UserId::from(self.id),
            role: self.role.parse()?,
            email: self.email,
            password_hash: self.password_hash,
            name: self.name,
            is_suspended: self.is_suspended,
            created_at: self.created_at.into(),
            updated_at: self.updated_at.into(),
        })
    }
}
