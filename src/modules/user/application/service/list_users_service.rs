use async_trait::async_trait;
use tracing::error;

use crate::auth::application::domain::entities::{Caller, User};
use crate::auth::application::domain::policy::require_admin;
use crate::auth::application::ports::outgoing::UserQuery;
use crate::modules::user::application::ports::incoming::use_cases::{
    ListUsersError, ListUsersUseCase,
};

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

pub struct ListUsersService<Q>
where
    Q: UserQuery,
{
    user_query: Q,
}

impl<Q> ListUsersService<Q>
where
    Q: UserQuery,
{
    pub fn new(user_query: Q) -> Self {
        Self { user_query }
    }
}

#[async_trait]
impl<Q> ListUsersUseCase for ListUsersService<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn execute(&self, caller: &Caller) -> Result<Vec<User>, ListUsersError> {
        require_admin(caller)?;

        self.user_query.list_users().await.map_err(|e| {
            error!(error = %e, "Failed to list users");
            ListUsersError::RepositoryError(e.to_string())
        })
    }
}
