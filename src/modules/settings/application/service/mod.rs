pub mod get_email_settings_service;
pub mod update_email_settings_service;

pub use get_email_settings_service::GetEmailSettingsService;
pub use update_email_settings_service::UpdateEmailSettingsService;
