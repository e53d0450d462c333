use async_trait::async_trait;
use tracing::{error, info, warn};

use crate::auth::application::domain::entities::Caller;
use crate::auth::application::domain::policy::can_delete_ticket;
use crate::modules::ticket::application::domain::TicketId;
use crate::modules::ticket::application::ports::incoming::use_cases::{
    DeleteTicketError, DeleteTicketUseCase,
};
use crate::modules::ticket::application::ports::outgoing::{
    TicketRepository, TicketRepositoryError,
};

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

pub struct DeleteTicketService<R>
where
    R: TicketRepository,
{
    ticket_repository: R,
}

impl<R> DeleteTicketService<R>
where
    R: TicketRepository,
{
    pub fn new(ticket_repository: R) -> Self {
        Self { ticket_repository }
    }
}

impl From<TicketRepositoryError> for DeleteTicketError {
    fn from(e: TicketRepositoryError) -> Self {
        match e {
            TicketRepositoryError::NotFound => DeleteTicketError::NotFound,
            TicketRepositoryError::DatabaseError(msg) => DeleteTicketError::RepositoryError(msg),
        }
    }
}

#[async_trait]
impl<R> DeleteTicketUseCase for DeleteTicketService<R>
where
    R: TicketRepository + Send + Sync,
{
    async fn execute(&self, caller: &Caller, ticket_id: TicketId) -> Result<(), DeleteTicketError> {
        let ticket = self
            .ticket_repository
            .find_by_id(ticket_id)
            .await?
            .ok_or(DeleteTicketError::NotFound)?;

        if let Err(violation) = can_delete_ticket(caller, &ticket.ownership()) {
            warn!(ticket_id = %ticket_id, user_id = %caller.id, "Ticket deletion denied");
            return Err(violation.into());
        }

        self.ticket_repository
            .delete_ticket(ticket_id)
            .await
            .map_err(|e| {
                error!(ticket_id = %ticket_id, error = %e, "Failed to delete ticket");
                DeleteTicketError::from(e)
            })?;

        info!(ticket_id = %ticket_id, user_id = %caller.id, "Ticket deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::{UserId, UserRole};
    use crate::modules::ticket::application::ports::outgoing::TicketRepository;
    use crate::tests::support::in_memory::InMemoryTicketRepository;

    fn caller(id: UserId, role: UserRole) -> Caller {
        Caller {
            id,
            email: "someone@example.com".to_string(),
            role,
        }
    }

    #[tokio::test]
    async fn test_creator_deletes_own_ticket() {
        let repo = InMemoryTicketRepository::default();
        let creator = UserId::new();
        let ticket = repo.seed("Old request", creator);

        DeleteTicketService::new(repo.clone())
            .execute(&caller(creator, UserRole::Customer), ticket.id)
            .await
            .unwrap();

        assert!(repo.find_by_id(ticket.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_assignee_cannot_delete() {
        let repo = InMemoryTicketRepository::default();
        let agent = UserId::new();
        let ticket = repo.seed("Old request", UserId::new());
        repo.assign_ticket(ticket.id, agent).await.unwrap();

        let result = DeleteTicketService::new(repo.clone())
            .execute(&caller(agent, UserRole::Agent), ticket.id)
            .await;

        assert!(matches!(result, Err(DeleteTicketError::Forbidden(_))));
        assert_eq!(repo.len(), 1);
    }

    #[tokio::test]
    async fn test_missing_ticket() {
        let repo = InMemoryTicketRepository::default();

        let result = DeleteTicketService::new(repo.clone())
            .execute(&caller(UserId::new(), UserRole::Admin), TicketId::new())
            .await;

        assert!(matches!(result, Err(DeleteTicketError::NotFound)));
    }
}
