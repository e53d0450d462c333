use async_trait::async_trait;

use crate::auth::application::domain::entities::{Caller, User, UserRole};
use crate::auth::application::domain::new_user::NewUserError;
use crate::auth::application::domain::policy::PolicyViolation;

#[derive(Debug, Clone)]
pub struct CreateUserCommand {
    pub email: String,
    pub password: String,
    pub name: String,
    pub role: Option<UserRole>,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateUserError {
    #[error("Forbidden: {0}")]
    Forbidden(#[from] PolicyViolation),

    #[error("{0}")]
    InvalidInput(#[from] NewUserError),

    #[error("A user with this email already exists")]
    UserAlreadyExists,

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
pub trait CreateUserUseCase: Send + Sync {
    async fn execute(
        &self,
        caller: &Caller,
        command: CreateUserCommand,
    ) -> Result<User, CreateUserError>;
}
