use async_trait::async_trait;

use crate::auth::application::domain::entities::{Caller, User, UserId};
use crate::auth::application::domain::policy::PolicyViolation;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum SuspendUserError {
    #[error("Forbidden: {0}")]
    Forbidden(#[from] PolicyViolation),

    #[error("User not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Use case trait
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait SuspendUserUseCase: Send + Sync {
    async fn execute(&self, caller: &Caller, user_id: UserId) -> Result<User, SuspendUserError>;
}
