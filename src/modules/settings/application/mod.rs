pub mod domain;
pub mod ports;
pub mod service;
mod settings_use_cases;

pub use settings_use_cases::SettingsUseCases;
