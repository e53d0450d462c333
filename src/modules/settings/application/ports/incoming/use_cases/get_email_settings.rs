use async_trait::async_trait;

use crate::auth::application::domain::entities::Caller;
use crate::auth::application::domain::policy::PolicyViolation;
use crate::modules::settings::application::domain::EmailSettings;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetEmailSettingsError {
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
pub trait GetEmailSettingsUseCase: Send + Sync {
    /// Materializes and stores the defaults when nothing is stored yet.
    async fn execute(&self, caller: &Caller) -> Result<EmailSettings, GetEmailSettingsError>;
}
