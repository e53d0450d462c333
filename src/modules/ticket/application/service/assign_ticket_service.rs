use async_trait::async_trait;
use tracing::{error, info, warn};

use crate::auth::application::domain::entities::{Caller, UserId};
use crate::auth::application::domain::policy::{can_assign_tickets, is_eligible_assignee};
use crate::auth::application::ports::outgoing::UserQuery;
use crate::modules::ticket::application::domain::{Ticket, TicketId};
use crate::modules::ticket::application::ports::incoming::use_cases::{
    AssignTicketError, AssignTicketUseCase,
};
use crate::modules::ticket::application::ports::outgoing::{
    TicketRepository, TicketRepositoryError,
};

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

pub struct AssignTicketService<R, Q>
where
    R: TicketRepository,
    Q: UserQuery,
{
    ticket_repository: R,
    user_query: Q,
}

impl<R, Q> AssignTicketService<R, Q>
where
    R: TicketRepository,
    Q: UserQuery,
{
    pub fn new(ticket_repository: R, user_query: Q) -> Self {
        Self {
            ticket_repository,
            user_query,
        }
    }
}

fn map_repo_err(e: TicketRepositoryError) -> AssignTicketError {
    match e {
        TicketRepositoryError::NotFound => AssignTicketError::TicketNotFound,
        TicketRepositoryError::DatabaseError(msg) => AssignTicketError::RepositoryError(msg),
    }
}

#[async_trait]
impl<R, Q> AssignTicketUseCase for AssignTicketService<R, Q>
where
    R: TicketRepository + Send + Sync,
    Q: UserQuery + Send + Sync,
{
    async fn execute(
        &self,
        caller: &Caller,
        ticket_id: TicketId,
        agent_id: UserId,
    ) -> Result<Ticket, AssignTicketError> {
        can_assign_tickets(caller)?;

        self.ticket_repository
            .find_by_id(ticket_id)
            .await
            .map_err(map_repo_err)?
            .ok_or(AssignTicketError::TicketNotFound)?;

        let agent = self
            .user_query
            .find_by_id(agent_id)
            .await
            .map_err(|e| AssignTicketError::RepositoryError(e.to_string()))?
            .ok_or(AssignTicketError::AgentNotFound)?;

        if !is_eligible_assignee(agent.role) {
            warn!(
                ticket_id = %ticket_id,
                assignee_id = %agent_id,
                role = %agent.role,
                "Rejected assignment to non-agent"
            );
            return Err(AssignTicketError::AssigneeNotAgent);
        }

        let ticket = self
            .ticket_repository
            .assign_ticket(ticket_id, agent.id)
            .await
            .map_err(|e| {
                error!(ticket_id = %ticket_id, error = %e, "Failed to assign ticket");
                map_repo_err(e)
            })?;

        info!(
            ticket_id = %ticket_id,
            assignee_id = %agent_id,
            assigned_by = %caller.id,
            "Ticket assigned"
        );
        Ok(ticket)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::UserRole;
    use crate::auth::application::domain::policy::PolicyViolation;
    use crate::tests::support::in_memory::{InMemoryTicketRepository, InMemoryUserStore};

    struct Fixture {
        users: InMemoryUserStore,
        tickets: InMemoryTicketRepository,
        service: AssignTicketService<InMemoryTicketRepository, InMemoryUserStore>,
    }

    fn fixture() -> Fixture {
        let users = InMemoryUserStore::default();
        let tickets = InMemoryTicketRepository::default();
        let service = AssignTicketService::new(tickets.clone(), users.clone());
        Fixture {
            users,
            tickets,
            service,
        }
    }

    #[tokio::test]
    async fn test_admin_assigns_agent() {
        let f = fixture();
        let admin = f.users.insert("admin@example.com", "password123", UserRole::Admin);
        let agent = f.users.insert("agent@example.com", "password123", UserRole::Agent);
        let ticket = f.tickets.seed("Email down", UserId::new());

        let assigned = f
            .service
            .execute(&Caller::from(&admin), ticket.id, agent.id)
            .await
            .unwrap();

        assert_eq!(assigned.assigned_to, Some(agent.id));
    }

    #[tokio::test]
    async fn test_non_agent_assignee_leaves_ticket_unchanged() {
        let f = fixture();
        let admin = f.users.insert("admin@example.com", "password123", UserRole::Admin);
        let customer = f.users.insert("c@example.com", "password123", UserRole::Customer);
        let ticket = f.tickets.seed("Email down", customer.id);

        let result = f
            .service
            .execute(&Caller::from(&admin), ticket.id, customer.id)
            .await;

        assert!(matches!(result, Err(AssignTicketError::AssigneeNotAgent)));
        let stored = f.tickets.find_by_id(ticket.id).await.unwrap().unwrap();
        assert_eq!(stored.assigned_to, None);
    }

    #[tokio::test]
    async fn test_customer_cannot_assign() {
        let f = fixture();
        let customer = f.users.insert("c@example.com", "password123", UserRole::Customer);
        let agent = f.users.insert("agent@example.com", "password123", UserRole::Agent);
        let ticket = f.tickets.seed("Email down", customer.id);

        let result = f
            .service
            .execute(&Caller::from(&customer), ticket.id, agent.id)
            .await;

        assert!(matches!(
            result,
            Err(AssignTicketError::Forbidden(PolicyViolation::StaffRequired))
        ));
    }

    #[tokio::test]
    async fn test_missing_ticket_then_missing_agent() {
        let f = fixture();
        let agent = f.users.insert("agent@example.com", "password123", UserRole::Agent);
        let ticket = f.tickets.seed("Email down", UserId::new());
        let caller = Caller::from(&agent);

        let no_ticket = f.service.execute(&caller, TicketId::new(), agent.id).await;
        assert!(matches!(no_ticket, Err(AssignTicketError::TicketNotFound)));

        let no_agent = f.service.execute(&caller, ticket.id, UserId::new()).await;
        assert!(matches!(no_agent, Err(AssignTicketError::AgentNotFound)));
    }
}
