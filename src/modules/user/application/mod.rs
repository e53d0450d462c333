pub mod ports;
pub mod service;
mod user_use_cases;

pub use user_use_cases::UserUseCases;
