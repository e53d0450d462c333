mod shutdown;

pub use shutdown::{ShutdownError, ShutdownUseCase};
