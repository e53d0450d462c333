pub mod email_settings;

pub use email_settings::{EmailSettings, SettingsValidationError};
