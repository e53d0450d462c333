use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::modules::settings::application::domain::EmailSettings;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "email_settings")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub imap_host: String,
    pub imap_port: i32,
    pub imap_username: String,
    pub imap_password: String,
    pub smtp_host: String,
    pub smtp_port: i32,
    pub smtp_username: String,
    pub smtp_password: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        use chrono::Utc;
        use sea_orm::ActiveValue::Set;

        if !insert {
            self.updated_at = Set(Utc::now().into());
        }

        Ok(self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("stored {field} {value} is not a valid port")]
pub struct InvalidStoredPort {
    pub field: &'static str,
    pub value: i32,
}

fn port(field: &'static str, value: i32) -> Result<u16, InvalidStoredPort> {
    u16::try_from(value).map_err(|_| InvalidStoredPort { field, value })
}

impl Model {
    pub fn into_domain(self) -> Result<EmailSettings, InvalidStoredPort> {
        Ok(EmailSettings {
            imap_port: port("imap_port", self.imap_port)?,
            smtp_port: port("smtp_port", self.smtp_port)?,
            imap_host: self.imap_host,
            imap_username: self.imap_username,
            imap_password: self.imap_password,
            smtp_host: self.smtp_host,
            smtp_username: self.smtp_username,
            smtp_password: self.smtp_password,
        })
    }
}
