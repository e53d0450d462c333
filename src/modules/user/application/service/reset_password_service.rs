use async_trait::async_trait;
use std::sync::Arc;
use tracing::{error, info};

use crate::auth::application::domain::entities::{Caller, UserId};
use crate::auth::application::domain::new_user::validate_password;
use crate::auth::application::domain::policy::require_admin;
use crate::auth::application::ports::outgoing::{
    PasswordHasher, UserQuery, UserRepository, UserRepositoryError,
};
use crate::modules::user::application::ports::incoming::use_cases::{
    ResetPasswordError, ResetPasswordUseCase,
};

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

pub struct ResetPasswordService<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    user_query: Q,
    user_repository: R,
    password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
}

impl<Q, R> ResetPasswordService<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    pub fn new(
        user_query: Q,
        user_repository: R,
        password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
    ) -> Self {
        Self {
            user_query,
            user_repository,
            password_hasher,
        }
    }
}

#[async_trait]
impl<Q, R> ResetPasswordUseCase for ResetPasswordService<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    async fn execute(
        &self,
        caller: &Caller,
        user_id: UserId,
        new_password: String,
    ) -> Result<(), ResetPasswordError> {
        require_admin(caller)?;

        self.user_query
            .find_by_id(user_id)
            .await
            .map_err(|e| {
                error!(user_id = %user_id, error = %e, "Failed to load user");
                ResetPasswordError::RepositoryError(e.to_string())
            })?
            .ok_or(ResetPasswordError::NotFound)?;

        validate_password(&new_password)?;

        let password_hash = self
            .password_hasher
            .hash_password(&new_password)
            .await
            .map_err(|e| ResetPasswordError::HashingFailed(e.to_string()))?;

        self.user_repository
            .update_password(user_id, password_hash)
            .await
            .map_err(|e| match e {
                UserRepositoryError::UserNotFound => ResetPasswordError::NotFound,
                other => {
                    error!(user_id = %user_id, error = %other, "Failed to store new password");
                    ResetPasswordError::RepositoryError(other.to_string())
                }
            })?;

        info!(user_id = %user_id, reset_by = %caller.id, "Password reset");
        Ok(())
    }
}
