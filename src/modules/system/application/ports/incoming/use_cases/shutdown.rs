use async_trait::async_trait;
use std::time::Duration;

use crate::auth::application::domain::entities::Caller;
use crate::auth::application::domain::policy::PolicyViolation;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum ShutdownError {
    #[error("Forbidden: {0}")]
    Forbidden(#[from] PolicyViolation),

    #[error("Shutdown unavailable: {0}")]
    Unavailable(String),
}

//
// ──────────────────────────────────────────────────────────
// Use case trait
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait ShutdownUseCase: Send + Sync {
    /// Returns the delay after which the server stops.
    async fn execute(&self, caller: &Caller) -> Result<Duration, ShutdownError>;
}
