use async_trait::async_trait;

use crate::modules::settings::application::domain::EmailSettings;

#[derive(Debug, Clone, thiserror::Error)]
pub enum SettingsRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait SettingsRepository: Send + Sync {
    async fn find_email_settings(&self) -> Result<Option<EmailSettings>, SettingsRepositoryError>;

    /// Overwrites the stored row in place, or inserts one when the store is empty.
    async fn save_email_settings(
        &self,
        settings: EmailSettings,
    ) -> Result<EmailSettings, SettingsRepositoryError>;
}
