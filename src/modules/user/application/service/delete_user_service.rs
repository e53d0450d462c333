use async_trait::async_trait;
use tracing::{error, info};

use crate::auth::application::domain::entities::{Caller, UserId};
use crate::auth::application::domain::policy::require_admin;
use crate::auth::application::ports::outgoing::{UserRepository, UserRepositoryError};
use crate::modules::user::application::ports::incoming::use_cases::{
    DeleteUserError, DeleteUserUseCase,
};

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

pub struct DeleteUserService<R>
where
    R: UserRepository,
{
    user_repository: R,
}

impl<R> DeleteUserService<R>
where
    R: UserRepository,
{
    pub fn new(user_repository: R) -> Self {
        Self { user_repository }
    }
}

#[async_trait]
impl<R> DeleteUserUseCase for DeleteUserService<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, caller: &Caller, user_id: UserId) -> Result<(), DeleteUserError> {
        require_admin(caller)?;

        self.user_repository
            .delete_user(user_id)
            .await
            .map_err(|e| match e {
                UserRepositoryError::UserNotFound => DeleteUserError::NotFound,
                UserRepositoryError::UserInUse => DeleteUserError::UserInUse,
                other => {
                    error!(user_id = %user_id, error = %other, "Failed to delete user");
                    DeleteUserError::RepositoryError(other.to_string())
                }
            })?;

        info!(user_id = %user_id, deleted_by = %caller.id, "User deleted");
        Ok(())
    }
}
