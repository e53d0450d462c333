pub mod assign_ticket_service;
pub mod create_ticket_service;
pub mod delete_ticket_service;
pub mod get_ticket_service;
pub mod list_tickets_service;
pub mod update_ticket_service;

pub use assign_ticket_service::AssignTicketService;
pub use create_ticket_service::CreateTicketService;
pub use delete_ticket_service::DeleteTicketService;
pub use get_ticket_service::GetTicketService;
pub use list_tickets_service::ListTicketsService;
pub use update_ticket_service::UpdateTicketService;
