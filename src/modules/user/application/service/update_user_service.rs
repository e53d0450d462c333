use async_trait::async_trait;
use tracing::{error, info};

use crate::auth::application::domain::entities::{Caller, User, UserId};
use crate::auth::application::domain::new_user::validate_name;
use crate::auth::application::domain::policy::require_admin;
use crate::auth::application::ports::outgoing::user_repository::UpdateUserData;
use crate::auth::application::ports::outgoing::{UserQuery, UserRepository, UserRepositoryError};
use crate::modules::user::application::ports::incoming::use_cases::{
    UpdateUserCommand, UpdateUserError, UpdateUserUseCase,
};

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

pub struct UpdateUserService<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    user_query: Q,
    user_repository: R,
}

impl<Q, R> UpdateUserService<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    pub fn new(user_query: Q, user_repository: R) -> Self {
        Self {
            user_query,
            user_repository,
        }
    }
}

#[async_trait]
impl<Q, R> UpdateUserUseCase for UpdateUserService<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    async fn execute(
        &self,
        caller: &Caller,
        user_id: UserId,
        command: UpdateUserCommand,
    ) -> Result<User, UpdateUserError> {
        require_admin(caller)?;

        self.user_query
            .find_by_id(user_id)
            .await
            .map_err(|e| {
                error!(user_id = %user_id, error = %e, "Failed to load user");
                UpdateUserError::RepositoryError(e.to_string())
            })?
            .ok_or(UpdateUserError::NotFound)?;

        let name = command.name.as_deref().map(validate_name).transpose()?;

        let user = self
            .user_repository
            .update_user(
                user_id,
                UpdateUserData {
                    name,
                    role: command.role,
                },
            )
            .await
            .map_err(|e| match e {
                UserRepositoryError::UserNotFound => UpdateUserError::NotFound,
                other => {
                    error!(user_id = %user_id, error = %other, "Failed to update user");
                    UpdateUserError::RepositoryError(other.to_string())
                }
            })?;

        info!(user_id = %user.id, role = %user.role, "User updated");
        Ok(user)
    }
}
