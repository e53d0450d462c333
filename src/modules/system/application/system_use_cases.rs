use std::sync::Arc;

use crate::modules::system::application::ports::incoming::use_cases::ShutdownUseCase;

#[derive(Clone)]
pub struct SystemUseCases {
    pub shutdown: Arc<dyn ShutdownUseCase + Send + Sync>,
}
