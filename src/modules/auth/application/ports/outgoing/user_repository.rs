use async_trait::async_trait;

use crate::auth::application::domain::entities::{User, UserId, UserRole};

#[derive(Debug, Clone)]
pub struct CreateUserData {
    pub email: String,
    pub password_hash: String,
    pub name: String,
    pub role: UserRole,
}

/// Fields an administrator may change. `None` keeps the stored value.
#[derive(Debug, Clone, Default)]
pub struct UpdateUserData {
    pub name: Option<String>,
    pub role: Option<UserRole>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UserRepositoryError {
    #[error("User already exists")]
    UserAlreadyExists,

    #[error("User not found")]
    UserNotFound,

    #[error("User is still referenced by tickets or messages")]
    UserInUse,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create_user(&self, data: CreateUserData) -> Result<User, UserRepositoryError>;

    async fn update_user(
        &self,
        user_id: UserId,
        data: UpdateUserData,
    ) -> Result<User, UserRepositoryError>;

    async fn update_password(
        &self,
        user_id: UserId,
        new_password_hash: String,
    ) -> Result<(), UserRepositoryError>;

    async fn set_suspended(
        &self,
        user_id: UserId,
        suspended: bool,
    ) -> Result<User, UserRepositoryError>;

    async fn delete_user(&self, user_id: UserId) -> Result<(), UserRepositoryError>;
}
