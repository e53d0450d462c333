use async_trait::async_trait;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::domain::entities::{User, UserId};
use crate::auth::application::ports::outgoing::user_repository::{
    CreateUserData, UpdateUserData, UserRepository, UserRepositoryError,
};
use crate::shared::persistence::{is_foreign_key_violation, is_unique_violation};

use super::sea_orm_entity::users::{
    ActiveModel as UserActiveModel, Entity as UserEntity, Model as UserModel,
};

#[derive(Clone, Debug)]
pub struct UserRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_db_err(e: DbErr) -> UserRepositoryError {
        UserRepositoryError::DatabaseError(e.to_string())
    }

    fn to_domain(model: UserModel) -> Result<User, UserRepositoryError> {
        model
            .into_domain()
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))
    }

    async fn load(&self, user_id: UserId) -> Result<UserActiveModel, UserRepositoryError> {
        let user = UserEntity::find_by_id(user_id.value())
            .one(&*self.db)
            .await
            .map_err(Self::map_db_err)?
            .ok_or(UserRepositoryError::UserNotFound)?;
        Ok(user.into())
    }
}

#[async_trait]
impl UserRepository for UserRepositoryPostgres {
    async fn create_user(&self, data: CreateUserData) -> Result<User, UserRepositoryError> {
        let active_user = UserActiveModel {
            id: Set(Uuid::new_v4()),
            email: Set(data.email),
            password_hash: Set(data.password_hash),
            name: Set(data.name),
            role: Set(data.role.as_str().to_string()),
            is_suspended: Set(false),
            created_at: NotSet,
            updated_at: NotSet,
        };

        let inserted = active_user.insert(&*self.db).await.map_err(|e| {
            if is_unique_violation(&e) {
                return UserRepositoryError::UserAlreadyExists;
            }
            Self::map_db_err(e)
        })?;

        Self::to_domain(inserted)
    }

    async fn update_user(
        &self,
        user_id: UserId,
        data: UpdateUserData,
    ) -> Result<User, UserRepositoryError> {
        let mut active_user = self.load(user_id).await?;

        if let Some(name) = data.name {
            active_user.name = Set(name);
        }
        if let Some(role) = data.role {
            active_user.role = Set(role.as_str().to_string());
        }

        let updated = active_user
            .update(&*self.db)
            .await
            .map_err(Self::map_db_err)?;

        Self::to_domain(updated)
    }

    async fn update_password(
        &self,
        user_id: UserId,
        new_password_hash: String,
    ) -> Result<(), UserRepositoryError> {
        let mut active_user = self.load(user_id).await?;
        active_user.password_hash = Set(new_password_hash);

        active_user
            .update(&*self.db)
            .await
            .map_err(Self::map_db_err)?;

        Ok(())
    }

    async fn set_suspended(
        &self,
        user_id: UserId,
        suspended: bool,
    ) -> Result<User, UserRepositoryError> {
        let mut active_user = self.load(user_id).await?;
        active_user.is_suspended = Set(suspended);

        let updated = active_user
            .update(&*self.db)
            .await
            .map_err(Self::map_db_err)?;

        Self::to_domain(updated)
    }

    async fn delete_user(&self, user_id: UserId) -> Result<(), UserRepositoryError> {
        let result = UserEntity::delete_by_id(user_id.value())
            .exec(&*self.db)
            .await
            .map_err(|e| {
                if is_foreign_key_violation(&e) {
                    return UserRepositoryError::UserInUse;
                }
                Self::map_db_err(e)
            })?;

        if result.rows_affected == 0 {
            return Err(UserRepositoryError::UserNotFound);
        }

        Ok(())
    }
}
