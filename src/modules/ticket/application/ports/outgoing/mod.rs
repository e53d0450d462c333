pub mod ticket_repository;

pub use ticket_repository::{
    CreateTicketData, TicketFilter, TicketRepository, TicketRepositoryError, UpdateTicketData,
};
