use async_trait::async_trait;

use crate::auth::application::domain::entities::{Caller, User};
use crate::auth::application::ports::outgoing::UserQuery;
use crate::modules::user::application::ports::incoming::use_cases::{
    GetCurrentUserError, GetCurrentUserUseCase,
};

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

pub struct GetCurrentUserService<Q>
where
    Q: UserQuery,
{
    user_query: Q,
}

impl<Q> GetCurrentUserService<Q>
where
    Q: UserQuery,
{
    pub fn new(user_query: Q) -> Self {
        Self { user_query }
    }
}

#[async_trait]
impl<Q> GetCurrentUserUseCase for GetCurrentUserService<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn execute(&self, caller: &Caller) -> Result<User, GetCurrentUserError> {
        self.user_query
            .find_by_id(caller.id)
            .await
            .map_err(|e| GetCurrentUserError::RepositoryError(e.to_string()))?
            .ok_or(GetCurrentUserError::NotFound)
    }
}
