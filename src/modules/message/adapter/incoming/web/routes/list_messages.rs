use actix_web::{get, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::message::application::ports::incoming::use_cases::ListMessagesError;
use crate::modules::ticket::application::domain::TicketId;
use crate::shared::api::ApiResponse;
use crate::AppState;

use super::message_response::TicketMessageResponse;

/// List a ticket's messages, oldest first
#[utoipa::path(
    get,
    path = "/api/v1/tickets/{id}/messages",
    tag = "messages",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Ticket id")),
    responses(
        (status = 200, description = "Messages of the ticket", body = inline(SuccessResponse<Vec<TicketMessageResponse>>)),
        (status = 404, description = "Ticket not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/v1/tickets/{id}/messages")]
pub async fn list_messages_handler(
    _user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let ticket_id = TicketId::from(path.into_inner());

    match data.messages.list.execute(ticket_id).await {
        Ok(messages) => ApiResponse::success(
            messages
                .into_iter()
                .map(TicketMessageResponse::from)
                .collect::<Vec<_>>(),
        ),
        Err(ListMessagesError::TicketNotFound) => {
            ApiResponse::not_found("TICKET_NOT_FOUND", "Ticket not found")
        }
        Err(ListMessagesError::RepositoryError(e)) => {
            error!(ticket_id = %ticket_id, error = %e, "Failed to list messages");
            ApiResponse::internal_error()
        }
    }
}
