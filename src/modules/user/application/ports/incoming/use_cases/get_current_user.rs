use async_trait::async_trait;

use crate::auth::application::domain::entities::{Caller, User};

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetCurrentUserError {
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

/// Always permitted for an authenticated caller.
#[async_trait]
pub trait GetCurrentUserUseCase: Send + Sync {
    async fn execute(&self, caller: &Caller) -> Result<User, GetCurrentUserError>;
}
