pub mod email_settings;
