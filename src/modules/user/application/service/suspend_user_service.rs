use async_trait::async_trait;
use tracing::{error, info};

use crate::auth::application::domain::entities::{Caller, User, UserId};
use crate::auth::application::domain::policy::require_admin;
use crate::auth::application::ports::outgoing::{UserRepository, UserRepositoryError};
use crate::modules::user::application::ports::incoming::use_cases::{
    SuspendUserError, SuspendUserUseCase,
};

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

pub struct SuspendUserService<R>
where
    R: UserRepository,
{
    user_repository: R,
}

impl<R> SuspendUserService<R>
where
    R: UserRepository,
{
    pub fn new(user_repository: R) -> Self {
        Self { user_repository }
    }
}

#[async_trait]
impl<R> SuspendUserUseCase for SuspendUserService<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, caller: &Caller, user_id: UserId) -> Result<User, SuspendUserError> {
        require_admin(caller)?;

        let user = self
            .user_repository
            .set_suspended(user_id, true)
            .await
            .map_err(|e| match e {
                UserRepositoryError::UserNotFound => SuspendUserError::NotFound,
                other => {
                    error!(user_id = %user_id, error = %other, "Failed to suspend user");
                    SuspendUserError::RepositoryError(other.to_string())
                }
            })?;

        info!(user_id = %user_id, suspended_by = %caller.id, "User suspended");
        Ok(user)
    }
}
