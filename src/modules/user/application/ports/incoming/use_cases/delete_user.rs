use async_trait::async_trait;

use crate::auth::application::domain::entities::{Caller, UserId};
use crate::auth::application::domain::policy::PolicyViolation;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteUserError {
    #[error("Forbidden: {0}")]
    Forbidden(#[from] PolicyViolation),

    #[error("User not found")]
    NotFound,

    #[error("User is still referenced by tickets or messages")]
    UserInUse,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Use case trait
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait DeleteUserUseCase: Send + Sync {
    async fn execute(&self, caller: &Caller, user_id: UserId) -> Result<(), DeleteUserError>;
}
