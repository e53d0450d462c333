use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ServerControlError {
    #[error("Server handle is not attached")]
    NotAttached,
}

/// Stops the HTTP server. Implementations schedule the stop and return
/// immediately so the triggering request can still be answered.
pub trait ServerControl: Send + Sync {
    fn stop_after(&self, delay: Duration) -> Result<(), ServerControlError>;
}
