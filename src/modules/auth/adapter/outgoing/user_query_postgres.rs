use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use std::sync::Arc;

use crate::auth::application::domain::entities::{User, UserId};
use crate::auth::application::ports::outgoing::user_query::{UserQuery, UserQueryError};

use super::sea_orm_entity::users::{Column, Entity as UserEntity, Model as UserModel};

#[derive(Clone, Debug)]
pub struct UserQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn to_domain(model: UserModel) -> Result<User, UserQueryError> {
        model
            .into_domain()
            .map_err(|e| UserQueryError::CorruptRecord(e.to_string()))
    }
}

#[async_trait]
impl UserQuery for UserQueryPostgres {
    async fn find_by_id(&self, user_id: UserId) -> Result<Option<User>, UserQueryError> {
        UserEntity::find_by_id(user_id.value())
            .one(&*self.db)
            .await
            .map_err(|e| UserQueryError::DatabaseError(e.to_string()))?
            .map(Self::to_domain)
            .transpose()
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserQueryError> {
        UserEntity::find()
            .filter(Column::Email.eq(email))
            .one(&*self.db)
            .await
            .map_err(|e| UserQueryError::DatabaseError(e.to_string()))?
            .map(Self::to_domain)
            .transpose()
    }

    async fn list_users(&self) -> Result<Vec<User>, UserQueryError> {
        UserEntity::find()
            .order_by_asc(Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(|e| UserQueryError::DatabaseError(e.to_string()))?
            .into_iter()
            .map(Self::to_domain)
            .collect()
    }
}
