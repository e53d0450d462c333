use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::modules::ticket::application::domain::{
    Ticket, TicketId, TicketPriority, TicketStatus,
};

#[derive(Debug, Clone)]
pub struct CreateTicketData {
    pub title: String,
    pub description: String,
    pub priority: TicketPriority,
    pub created_by: UserId,
}

/// `None` keeps the stored value. The assignee is changed only through
/// [`TicketRepository::assign_ticket`].
#[derive(Debug, Clone, Default)]
pub struct UpdateTicketData {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<TicketStatus>,
    pub priority: Option<TicketPriority>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TicketFilter {
    pub status: Option<TicketStatus>,
    pub priority: Option<TicketPriority>,
    pub assigned_to: Option<UserId>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum TicketRepositoryError {
    #[error("Ticket not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait TicketRepository: Send + Sync {
    async fn create_ticket(&self, data: CreateTicketData) -> Result<Ticket, TicketRepositoryError>;

    async fn find_by_id(&self, ticket_id: TicketId) -> Result<Option<Ticket>, TicketRepositoryError>;

    /// Newest first.
    async fn list_tickets(&self, filter: TicketFilter) -> Result<Vec<Ticket>, TicketRepositoryError>;

    async fn update_ticket(
        &self,
        ticket_id: TicketId,
        data: UpdateTicketData,
    ) -> Result<Ticket, TicketRepositoryError>;

    async fn assign_ticket(
        &self,
        ticket_id: TicketId,
        assignee: UserId,
    ) -> Result<Ticket, TicketRepositoryError>;

    async fn delete_ticket(&self, ticket_id: TicketId) -> Result<(), TicketRepositoryError>;
}
