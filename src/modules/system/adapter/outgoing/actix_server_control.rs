use actix_web::dev::ServerHandle;
use std::sync::{Arc, OnceLock};
use std::time::Duration;
use tracing::{info, warn};

use crate::modules::system::application::ports::outgoing::{ServerControl, ServerControlError};

/// The handle only exists once the server is built, after `AppState` is
/// wired; `attach` fills it in.
#[derive(Clone, Default)]
pub struct ActixServerControl {
    handle: Arc<OnceLock<ServerHandle>>,
}

impl ActixServerControl {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attach(&self, handle: ServerHandle) {
        if self.handle.set(handle).is_err() {
            warn!("Server handle already attached; keeping the first one");
        }
    }
}

impl ServerControl for ActixServerControl {
    fn stop_after(&self, delay: Duration) -> Result<(), ServerControlError> {
        let handle = self
            .handle
            .get()
            .cloned()
            .ok_or(ServerControlError::NotAttached)?;

        actix_web::rt::spawn(async move {
            actix_web::rt::time::sleep(delay).await;
            info!("Executing application shutdown");
            handle.stop(true).await;
        });

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, HttpServer};

    #[test]
    fn test_stop_without_handle() {
        let control = ActixServerControl::new();
        assert_eq!(
            control.stop_after(Duration::from_millis(10)),
            Err(ServerControlError::NotAttached)
        );
    }

    #[actix_web::test]
    async fn test_stop_after_ends_running_server() {
        let server = HttpServer::new(|| App::new())
            .workers(1)
            .bind(("127.0.0.1", 0))
            .unwrap()
            .run();

        let control = ActixServerControl::new();
        control.attach(server.handle());
        control.stop_after(Duration::from_millis(20)).unwrap();

        let finished = actix_web::rt::time::timeout(Duration::from_secs(10), server).await;
        assert!(matches!(finished, Ok(Ok(()))));
    }
}
