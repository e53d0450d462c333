use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::IntoParams;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::auth::application::domain::entities::UserId;
use crate::modules::ticket::application::domain::{TicketPriority, TicketStatus};
use crate::modules::ticket::application::ports::incoming::use_cases::ListTicketsError;
use crate::modules::ticket::application::ports::outgoing::TicketFilter;
use crate::shared::api::ApiResponse;
use crate::AppState;

use super::ticket_response::TicketResponse;

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct TicketListQuery {
    pub status: Option<TicketStatus>,
    pub priority: Option<TicketPriority>,
    pub assigned_to: Option<Uuid>,
}

impl From<TicketListQuery> for TicketFilter {
    fn from(query: TicketListQuery) -> Self {
        TicketFilter {
            status: query.status,
            priority: query.priority,
            assigned_to: query.assigned_to.map(UserId::from),
        }
    }
}

/// List tickets
///
/// Newest first. All filters are optional and combine with AND.
#[utoipa::path(
    get,
    path = "/api/v1/tickets",
    tag = "tickets",
    security(("bearer_auth" = [])),
    params(TicketListQuery),
    responses(
        (status = 200, description = "Matching tickets", body = inline(SuccessResponse<Vec<TicketResponse>>)),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/v1/tickets")]
pub async fn list_tickets_handler(
    _user: AuthenticatedUser,
    query: web::Query<TicketListQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.tickets.list.execute(query.into_inner().into()).await {
        Ok(tickets) => ApiResponse::success(
            tickets
                .into_iter()
                .map(TicketResponse::from)
                .collect::<Vec<_>>(),
        ),
        Err(ListTicketsError::RepositoryError(e)) => {
            error!(error = %e, "Failed to list tickets");
            ApiResponse::internal_error()
        }
    }
}
