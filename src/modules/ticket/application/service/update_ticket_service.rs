use async_trait::async_trait;
use tracing::{error, info, warn};

use crate::auth::application::domain::entities::Caller;
use crate::auth::application::domain::policy::can_update_ticket;
use crate::modules::ticket::application::domain::{validate_title, Ticket, TicketId};
use crate::modules::ticket::application::ports::incoming::use_cases::{
    UpdateTicketCommand, UpdateTicketError, UpdateTicketUseCase,
};
use crate::modules::ticket::application::ports::outgoing::{
    TicketRepository, TicketRepositoryError, UpdateTicketData,
};

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

pub struct UpdateTicketService<R>
where
    R: TicketRepository,
{
    ticket_repository: R,
}

impl<R> UpdateTicketService<R>
where
    R: TicketRepository,
{
    pub fn new(ticket_repository: R) -> Self {
        Self { ticket_repository }
    }
}

fn map_repo_err(e: TicketRepositoryError) -> UpdateTicketError {
    match e {
        TicketRepositoryError::NotFound => UpdateTicketError::NotFound,
        TicketRepositoryError::DatabaseError(msg) => UpdateTicketError::RepositoryError(msg),
    }
}

#[async_trait]
impl<R> UpdateTicketUseCase for UpdateTicketService<R>
where
    R: TicketRepository + Send + Sync,
{
    async fn execute(
        &self,
        caller: &Caller,
        ticket_id: TicketId,
        command: UpdateTicketCommand,
    ) -> Result<Ticket, UpdateTicketError> {
        let ticket = self
            .ticket_repository
            .find_by_id(ticket_id)
            .await
            .map_err(map_repo_err)?
            .ok_or(UpdateTicketError::NotFound)?;

        if let Err(violation) = can_update_ticket(caller, &ticket.ownership()) {
            warn!(ticket_id = %ticket_id, user_id = %caller.id, "Ticket update denied");
            return Err(violation.into());
        }

        let title = command.title.as_deref().map(validate_title).transpose()?;

        let updated = self
            .ticket_repository
            .update_ticket(
                ticket_id,
                UpdateTicketData {
                    title,
                    description: command.description,
                    status: command.status,
                    priority: command.priority,
                },
            )
            .await
            .map_err(|e| {
                if let TicketRepositoryError::DatabaseError(ref msg) = e {
                    error!(ticket_id = %ticket_id, error = %msg, "Failed to update ticket");
                }
                map_repo_err(e)
            })?;

        info!(
            ticket_id = %ticket_id,
            user_id = %caller.id,
            status = %updated.status,
            "Ticket updated"
        );
        Ok(updated)
    }
}
