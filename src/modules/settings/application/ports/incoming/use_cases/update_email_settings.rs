use async_trait::async_trait;

use crate::auth::application::domain::entities::Caller;
use crate::auth::application::domain::policy::PolicyViolation;
use crate::modules::settings::application::domain::{EmailSettings, SettingsValidationError};

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateEmailSettingsError {
    #[error("Forbidden: {0}")]
    Forbidden(#[from] PolicyViolation),

    #[error("{0}")]
    InvalidInput(#[from] SettingsValidationError),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Use case trait
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait UpdateEmailSettingsUseCase: Send + Sync {
    async fn execute(
        &self,
        caller: &Caller,
        settings: EmailSettings,
    ) -> Result<EmailSettings, UpdateEmailSettingsError>;
}
