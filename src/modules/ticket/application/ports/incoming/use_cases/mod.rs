mod assign_ticket;
mod create_ticket;
mod delete_ticket;
mod get_ticket;
mod list_tickets;
mod update_ticket;

pub use assign_ticket::{AssignTicketError, AssignTicketUseCase};
pub use create_ticket::{CreateTicketCommand, CreateTicketError, CreateTicketUseCase};
pub use delete_ticket::{DeleteTicketError, DeleteTicketUseCase};
pub use get_ticket::{GetTicketError, GetTicketUseCase};
pub use list_tickets::{ListTicketsError, ListTicketsUseCase};
pub use update_ticket::{UpdateTicketCommand, UpdateTicketError, UpdateTicketUseCase};
