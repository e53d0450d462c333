mod shutdown;

pub use shutdown::{shutdown_handler, ShutdownResponse};

// utoipa path structs
pub use shutdown::__path_shutdown_handler;
