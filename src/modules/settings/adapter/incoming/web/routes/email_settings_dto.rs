use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::modules::settings::application::domain::EmailSettings;

/// Same shape for reads and writes. Ports outside 0..=65535 fail to deserialize.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct EmailSettingsDto {
    #[schema(example = "imap.example.com")]
    pub imap_host: String,

    #[schema(example = 993)]
    pub imap_port: u16,

    #[serde(default)]
    pub imap_username: String,

    #[serde(default)]
    pub imap_password: String,

    #[schema(example = "smtp.example.com")]
    pub smtp_host: String,

    #[schema(example = 587)]
    pub smtp_port: u16,

    #[serde(default)]
    pub smtp_username: String,

    #[serde(default)]
    pub smtp_password: String,
}

impl From<EmailSettings> for EmailSettingsDto {
    fn from(s: EmailSettings) -> Self {
        Self {
            imap_host: s.imap_host,
            imap_port: s.imap_port,
            imap_username: s.imap_username,
            imap_password: s.imap_password,
            smtp_host: s.smtp_host,
            smtp_port: s.smtp_port,
            smtp_username: s.smtp_username,
            smtp_password: s.smtp_password,
        }
    }
}

impl From<EmailSettingsDto> for EmailSettings {
    fn from(dto: EmailSettingsDto) -> Self {
        Self {
            imap_host: dto.imap_host,
            imap_port: dto.imap_port,
            imap_username: dto.imap_username,
            imap_password: dto.imap_password,
            smtp_host: dto.smtp_host,
            smtp_port: dto.smtp_port,
            smtp_username: dto.smtp_username,
            smtp_password: dto.smtp_password,
        }
    }
}
