pub mod domain;
pub mod ports;
pub mod service;
mod ticket_use_cases;

pub use ticket_use_cases::TicketUseCases;
