use std::sync::Arc;

use crate::modules::settings::application::ports::incoming::use_cases::{
    GetEmailSettingsUseCase, UpdateEmailSettingsUseCase,
};

#[derive(Clone)]
pub struct SettingsUseCases {
    pub get_email: Arc<dyn GetEmailSettingsUseCase + Send + Sync>,
    pub update_email: Arc<dyn UpdateEmailSettingsUseCase + Send + Sync>,
}
