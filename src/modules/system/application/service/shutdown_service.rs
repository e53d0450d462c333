use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info, warn};

use crate::auth::application::domain::entities::Caller;
use crate::auth::application::domain::policy::require_admin;
use crate::modules::system::application::ports::incoming::use_cases::{
    ShutdownError, ShutdownUseCase,
};
use crate::modules::system::application::ports::outgoing::ServerControl;

pub struct ShutdownService {
    control: Arc<dyn ServerControl>,
    delay: Duration,
}

impl ShutdownService {
    pub fn new(control: Arc<dyn ServerControl>, delay: Duration) -> Self {
        Self { control, delay }
    }
}

#[async_trait]
impl ShutdownUseCase for ShutdownService {
    async fn execute(&self, caller: &Caller) -> Result<Duration, ShutdownError> {
        if let Err(violation) = require_admin(caller) {
            warn!(user_id = %caller.id, email = %caller.email, "Shutdown attempt by non-admin user");
            return Err(violation.into());
        }

        self.control.stop_after(self.delay).map_err(|e| {
            error!(error = %e, "Shutdown could not be scheduled");
            ShutdownError::Unavailable(e.to_string())
        })?;

        info!(
            user_id = %caller.id,
            email = %caller.email,
            delay_ms = self.delay.as_millis() as u64,
            "Shutdown initiated"
        );
        Ok(self.delay)
    }
}
