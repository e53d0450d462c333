use async_trait::async_trait;

use crate::auth::application::domain::entities::{Caller, User, UserId, UserRole};
use crate::auth::application::domain::new_user::NewUserError;
use crate::auth::application::domain::policy::PolicyViolation;

/// Omitted fields keep their stored value.
#[derive(Debug, Clone, Default)]
pub struct UpdateUserCommand {
    pub name: Option<String>,
    pub role: Option<UserRole>,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateUserError {
    #[error("Forbidden: {0}")]
    Forbidden(#[from] PolicyViolation),

    #[error("{0}")]
    InvalidInput(#[from] NewUserError),

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
pub trait UpdateUserUseCase: Send + Sync {
    async fn execute(
        &self,
        caller: &Caller,
        user_id: UserId,
        command: UpdateUserCommand,
    ) -> Result<User, UpdateUserError>;
}
