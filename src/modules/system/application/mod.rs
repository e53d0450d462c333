pub mod ports;
pub mod service;
mod system_use_cases;

pub use system_use_cases::SystemUseCases;
