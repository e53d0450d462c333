use actix_web::{post, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::{
    policy_violation_response, AuthenticatedUser,
};
use crate::modules::message::application::ports::incoming::use_cases::OpenConversationError;
use crate::modules::ticket::application::domain::TicketId;
use crate::shared::api::ApiResponse;
use crate::AppState;

use super::message_response::ConversationResponse;

/// Open a conversation on a ticket
#[utoipa::path(
    post,
    path = "/api/v1/tickets/{id}/conversations",
    tag = "messages",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Ticket id")),
    responses(
        (status = 201, description = "Conversation opened", body = inline(SuccessResponse<ConversationResponse>)),
        (status = 403, description = "Caller may not post on this ticket", body = ErrorResponse),
        (status = 404, description = "Ticket not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/v1/tickets/{id}/conversations")]
pub async fn open_conversation_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let ticket_id = TicketId::from(path.into_inner());

    match data
        .messages
        .open_conversation
        .execute(user.caller(), ticket_id)
        .await
    {
        Ok(conversation) => ApiResponse::created(ConversationResponse::from(conversation)),
        Err(OpenConversationError::TicketNotFound) => {
            ApiResponse::not_found("TICKET_NOT_FOUND", "Ticket not found")
        }
        Err(OpenConversationError::Forbidden(v)) => policy_violation_response(&v),
        Err(OpenConversationError::RepositoryError(e)) => {
            error!(ticket_id = %ticket_id, error = %e, "Failed to open conversation");
            ApiResponse::internal_error()
        }
    }
}
