use async_trait::async_trait;

use crate::auth::application::domain::entities::{Caller, User, UserId};
use crate::auth::application::domain::policy::require_admin;
use crate::auth::application::ports::outgoing::UserQuery;
use crate::modules::user::application::ports::incoming::use_cases::{
    GetUserError, GetUserUseCase,
};

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

pub struct GetUserService<Q>
where
    Q: UserQuery,
{
    user_query: Q,
}

impl<Q> GetUserService<Q>
where
    Q: UserQuery,
{
    pub fn new(user_query: Q) -> Self {
        Self { user_query }
    }
}

#[async_trait]
impl<Q> GetUserUseCase for GetUserService<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn execute(&self, caller: &Caller, user_id: UserId) -> Result<User, GetUserError> {
        require_admin(caller)?;

        self.user_query
            .find_by_id(user_id)
            .await
            .map_err(|e| GetUserError::RepositoryError(e.to_string()))?
            .ok_or(GetUserError::NotFound)
    }
}
