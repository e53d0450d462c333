use async_trait::async_trait;
use tracing::{error, info, warn};

use crate::auth::application::domain::entities::Caller;
use crate::auth::application::domain::policy::require_admin;
use crate::modules::settings::application::domain::EmailSettings;
use crate::modules::settings::application::ports::incoming::use_cases::{
    UpdateEmailSettingsError, UpdateEmailSettingsUseCase,
};
use crate::modules::settings::application::ports::outgoing::SettingsRepository;

pub struct UpdateEmailSettingsService<R>
where
    R: SettingsRepository,
{
    repository: R,
}

impl<R> UpdateEmailSettingsService<R>
where
    R: SettingsRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> UpdateEmailSettingsUseCase for UpdateEmailSettingsService<R>
where
    R: SettingsRepository + Send + Sync,
{
    async fn execute(
        &self,
        caller: &Caller,
        settings: EmailSettings,
    ) -> Result<EmailSettings, UpdateEmailSettingsError> {
        if let Err(violation) = require_admin(caller) {
            warn!(user_id = %caller.id, "Email settings update denied");
            return Err(violation.into());
        }

        let settings = settings.validated()?;

        let saved = self
            .repository
            .save_email_settings(settings)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to save email settings");
                UpdateEmailSettingsError::RepositoryError(e.to_string())
            })?;

        info!(user_id = %caller.id, imap_host = %saved.imap_host, smtp_host = %saved.smtp_host, "Email settings updated");
        Ok(saved)
    }
}
