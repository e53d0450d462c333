use async_trait::async_trait;

use crate::auth::application::domain::entities::{Caller, UserId};
use crate::auth::application::domain::new_user::NewUserError;
use crate::auth::application::domain::policy::PolicyViolation;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum ResetPasswordError {
    #[error("Forbidden: {0}")]
    Forbidden(#[from] PolicyViolation),

    #[error("{0}")]
    InvalidInput(#[from] NewUserError),

    #[error("User not found")]
    NotFound,

    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Use case trait
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait ResetPasswordUseCase: Send + Sync {
    async fn execute(
        &self,
        caller: &Caller,
        user_id: UserId,
        new_password: String,
    ) -> Result<(), ResetPasswordError>;
}
