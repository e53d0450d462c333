pub mod ticket;

pub use ticket::{
    validate_title, Ticket, TicketId, TicketPriority, TicketStatus, TicketValidationError,
    UnknownTicketValue,
};
