use async_trait::async_trait;
use tracing::{error, info, warn};

use crate::auth::application::domain::entities::Caller;
use crate::auth::application::domain::policy::require_admin;
use crate::modules::settings::application::domain::EmailSettings;
use crate::modules::settings::application::ports::incoming::use_cases::{
    GetEmailSettingsError, GetEmailSettingsUseCase,
};
use crate::modules::settings::application::ports::outgoing::SettingsRepository;

pub struct GetEmailSettingsService<R>
where
    R: SettingsRepository,
{
    repository: R,
}

impl<R> GetEmailSettingsService<R>
where
    R: SettingsRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> GetEmailSettingsUseCase for GetEmailSettingsService<R>
where
    R: SettingsRepository + Send + Sync,
{
    async fn execute(&self, caller: &Caller) -> Result<EmailSettings, GetEmailSettingsError> {
        if let Err(violation) = require_admin(caller) {
            warn!(user_id = %caller.id, "Email settings read denied");
            return Err(violation.into());
        }

        let stored = self
            .repository
            .find_email_settings()
            .await
            .map_err(|e| GetEmailSettingsError::RepositoryError(e.to_string()))?;

        if let Some(settings) = stored {
            return Ok(settings);
        }

        let settings = self
            .repository
            .save_email_settings(EmailSettings::default())
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to store default email settings");
                GetEmailSettingsError::RepositoryError(e.to_string())
            })?;

        info!("Default email settings created");
        Ok(settings)
    }
}
