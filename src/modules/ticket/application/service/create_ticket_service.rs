use async_trait::async_trait;
use tracing::{error, info};

use crate::auth::application::domain::entities::Caller;
use crate::modules::ticket::application::domain::{validate_title, Ticket};
use crate::modules::ticket::application::ports::incoming::use_cases::{
    CreateTicketCommand, CreateTicketError, CreateTicketUseCase,
};
use crate::modules::ticket::application::ports::outgoing::{CreateTicketData, TicketRepository};

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

pub struct CreateTicketService<R>
where
    R: TicketRepository,
{
    ticket_repository: R,
}

impl<R> CreateTicketService<R>
where
    R: TicketRepository,
{
    pub fn new(ticket_repository: R) -> Self {
        Self { ticket_repository }
    }
}

#[async_trait]
impl<R> CreateTicketUseCase for CreateTicketService<R>
where
    R: TicketRepository + Send + Sync,
{
    async fn execute(
        &self,
        caller: &Caller,
        command: CreateTicketCommand,
    ) -> Result<Ticket, CreateTicketError> {
        let title = validate_title(&command.title)?;

        let ticket = self
            .ticket_repository
            .create_ticket(CreateTicketData {
                title,
                description: command.description,
                priority: command.priority.unwrap_or_default(),
                created_by: caller.id,
            })
            .await
            .map_err(|e| {
                error!(user_id = %caller.id, error = %e, "Failed to create ticket");
                CreateTicketError::RepositoryError(e.to_string())
            })?;

        info!(ticket_id = %ticket.id, user_id = %caller.id, "Ticket created");
        Ok(ticket)
    }
}
