mod get_email_settings;
mod update_email_settings;

pub use get_email_settings::{GetEmailSettingsError, GetEmailSettingsUseCase};
pub use update_email_settings::{UpdateEmailSettingsError, UpdateEmailSettingsUseCase};
