use async_trait::async_trait;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::settings::application::domain::EmailSettings;
use crate::modules::settings::application::ports::outgoing::{
    SettingsRepository, SettingsRepositoryError,
};

use super::sea_orm_entity::email_settings::{
    ActiveModel as EmailSettingsActiveModel, Column, Entity as EmailSettingsEntity,
    Model as EmailSettingsModel,
};

// ============================================================================
// Repository Implementation
// ============================================================================

#[derive(Clone, Debug)]
pub struct SettingsRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl SettingsRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    // The table is expected to hold a single row; the oldest one wins.
    async fn first_row(&self) -> Result<Option<EmailSettingsModel>, SettingsRepositoryError> {
        EmailSettingsEntity::find()
            .order_by_asc(Column::CreatedAt)
            .one(&*self.db)
            .await
            .map_err(map_db_err)
    }
}

#[async_trait]
impl SettingsRepository for SettingsRepositoryPostgres {
    async fn find_email_settings(&self) -> Result<Option<EmailSettings>, SettingsRepositoryError> {
        self.first_row().await?.map(to_domain).transpose()
    }

    async fn save_email_settings(
        &self,
        settings: EmailSettings,
    ) -> Result<EmailSettings, SettingsRepositoryError> {
        let saved = match self.first_row().await? {
            Some(existing) => {
                let mut model: EmailSettingsActiveModel = existing.into();
                apply(&mut model, settings);
                model.update(&*self.db).await.map_err(map_db_err)?
            }
            None => {
                let mut model = EmailSettingsActiveModel {
                    id: Set(Uuid::new_v4()),
                    created_at: NotSet,
                    updated_at: NotSet,
                    ..Default::default()
                };
                apply(&mut model, settings);
                model.insert(&*self.db).await.map_err(map_db_err)?
            }
        };

        to_domain(saved)
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn apply(model: &mut EmailSettingsActiveModel, settings: EmailSettings) {
    model.imap_host = Set(settings.imap_host);
    model.imap_port = Set(i32::from(settings.imap_port));
    model.imap_username = Set(settings.imap_username);
    model.imap_password = Set(settings.imap_password);
    model.smtp_host = Set(settings.smtp_host);
    model.smtp_port = Set(i32::from(settings.smtp_port));
    model.smtp_username = Set(settings.smtp_username);
    model.smtp_password = Set(settings.smtp_password);
}

fn to_domain(model: EmailSettingsModel) -> Result<EmailSettings, SettingsRepositoryError> {
    model
        .into_domain()
        .map_err(|e| SettingsRepositoryError::DatabaseError(e.to_string()))
}

fn map_db_err(e: DbErr) -> SettingsRepositoryError {
    SettingsRepositoryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================
