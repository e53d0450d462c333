use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::modules::ticket::application::domain::{Ticket, TicketPriority, TicketStatus};

#[derive(Debug, Serialize, ToSchema)]
pub struct TicketResponse {
    #[schema(example = "6f1c2a8e-4b1d-4c36-9d5e-0f7d8f3e2a11")]
    pub id: Uuid,

    #[schema(example = "VPN disconnects every hour")]
    pub title: String,

    #[schema(example = "Started after the latest client update")]
    pub description: String,

    pub status: TicketStatus,
    pub priority: TicketPriority,
    pub created_by: Uuid,
    pub assigned_to: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Ticket> for TicketResponse {
    fn from(ticket: Ticket) -> Self {
        Self {
            id: ticket.id.value(),
            title: ticket.title,
            description: ticket.description,
            status: ticket.status,
            priority: ticket.priority,
            created_by: ticket.created_by.value(),
            assigned_to: ticket.assigned_to.map(|id| id.value()),
            created_at: ticket.created_at,
            updated_at: ticket.updated_at,
        }
    }
}
