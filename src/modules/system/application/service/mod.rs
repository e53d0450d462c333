pub mod shutdown_service;

pub use shutdown_service::ShutdownService;
