mod email_settings_dto;
mod get_email_settings;
mod update_email_settings;

pub use email_settings_dto::EmailSettingsDto;
pub use get_email_settings::get_email_settings_handler;
pub use update_email_settings::update_email_settings_handler;

// utoipa path structs
pub use get_email_settings::__path_get_email_settings_handler;
pub use update_email_settings::__path_update_email_settings_handler;
