mod assign_ticket;
mod create_ticket;
mod delete_ticket;
mod get_ticket;
mod list_tickets;
mod ticket_response;
mod update_ticket;

pub use assign_ticket::{assign_ticket_handler, AssignTicketRequest};
pub use create_ticket::{create_ticket_handler, CreateTicketRequest};
pub use delete_ticket::delete_ticket_handler;
pub use get_ticket::get_ticket_handler;
pub use list_tickets::{list_tickets_handler, TicketListQuery};
pub use ticket_response::TicketResponse;
pub use update_ticket::{update_ticket_handler, UpdateTicketRequest};

// utoipa path structs
pub use assign_ticket::__path_assign_ticket_handler;
pub use create_ticket::__path_create_ticket_handler;
pub use delete_ticket::__path_delete_ticket_handler;
pub use get_ticket::__path_get_ticket_handler;
pub use list_tickets::__path_list_tickets_handler;
pub use update_ticket::__path_update_ticket_handler;
