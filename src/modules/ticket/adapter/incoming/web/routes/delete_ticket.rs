use actix_web::{delete, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::{policy_violation_response, AuthenticatedUser};
use crate::modules::ticket::application::domain::TicketId;
use crate::modules::ticket::application::ports::incoming::use_cases::DeleteTicketError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Delete a ticket
///
/// Only the ticket's creator or an admin may delete it; being the assignee
/// is not enough.
#[utoipa::path(
    delete,
    path = "/api/v1/tickets/{id}",
    tag = "tickets",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Ticket id")),
    responses(
        (status = 204, description = "Ticket deleted"),
        (status = 403, description = "Not the ticket owner", body = ErrorResponse),
        (status = 404, description = "Ticket not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[delete("/api/v1/tickets/{id}")]
pub async fn delete_ticket_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let ticket_id = TicketId::from(path.into_inner());

    match data.tickets.delete.execute(user.caller(), ticket_id).await {
        Ok(()) => ApiResponse::no_content(),
        Err(DeleteTicketError::NotFound) => {
            ApiResponse::not_found("TICKET_NOT_FOUND", "Ticket not found")
        }
        Err(DeleteTicketError::Forbidden(v)) => policy_violation_response(&v),
        Err(DeleteTicketError::RepositoryError(e)) => {
            error!(ticket_id = %ticket_id, error = %e, "Ticket deletion failed");
            ApiResponse::internal_error()
        }
    }
}
