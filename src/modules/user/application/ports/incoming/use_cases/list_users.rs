use async_trait::async_trait;

use crate::auth::application::domain::entities::{Caller, User};
use crate::auth::application::domain::policy::PolicyViolation;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListUsersError {
    #[error("Forbidden: {0}")]
    Forbidden(#[from] PolicyViolation),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Use case trait
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait ListUsersUseCase: Send + Sync {
    async fn execute(&self, caller: &Caller) -> Result<Vec<User>, ListUsersError>;
}
