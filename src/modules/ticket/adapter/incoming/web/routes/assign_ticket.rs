use actix_web::{put, web, Responder};
use serde::Deserialize;
use tracing::{error, warn};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::{policy_violation_response, AuthenticatedUser};
use crate::auth::application::domain::entities::UserId;
use crate::modules::ticket::application::domain::TicketId;
use crate::modules::ticket::application::ports::incoming::use_cases::AssignTicketError;
use crate::shared::api::ApiResponse;
use crate::AppState;

use super::ticket_response::TicketResponse;

#[derive(Deserialize, ToSchema)]
pub struct AssignTicketRequest {
    #[serde(alias = "agentID")]
    #[schema(example = "0d6f6a55-3b0e-4b8c-9a53-9a0b5c1e7f42")]
    pub agent_id: Uuid,
}

/// Assign a ticket to an agent (admins and agents only)
#[utoipa::path(
    put,
    path = "/api/v1/tickets/{id}/assign",
    tag = "tickets",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Ticket id")),
    request_body = AssignTicketRequest,
    responses(
        (status = 200, description = "Ticket assigned", body = inline(SuccessResponse<TicketResponse>)),
        (
            status = 400,
            description = "Assignee is not an agent",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "ASSIGNEE_NOT_AGENT",
                    "message": "Tickets can only be assigned to agents"
                }
            })
        ),
        (status = 403, description = "Caller is not staff", body = ErrorResponse),
        (status = 404, description = "Ticket or agent not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[put("/api/v1/tickets/{id}/assign")]
pub async fn assign_ticket_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    req: web::Json<AssignTicketRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let ticket_id = TicketId::from(path.into_inner());
    let agent_id = UserId::from(req.into_inner().agent_id);

    match data
        .tickets
        .assign
        .execute(user.caller(), ticket_id, agent_id)
        .await
    {
        Ok(ticket) => ApiResponse::success(TicketResponse::from(ticket)),
        Err(AssignTicketError::Forbidden(v)) => {
            warn!(ticket_id = %ticket_id, user_id = %user.caller().id, "Assignment denied");
            policy_violation_response(&v)
        }
        Err(AssignTicketError::TicketNotFound) => {
            ApiResponse::not_found("TICKET_NOT_FOUND", "Ticket not found")
        }
        Err(AssignTicketError::AgentNotFound) => {
            ApiResponse::not_found("AGENT_NOT_FOUND", "Agent not found")
        }
        Err(AssignTicketError::AssigneeNotAgent) => ApiResponse::bad_request(
            "ASSIGNEE_NOT_AGENT",
            "Tickets can only be assigned to agents",
        ),
        Err(AssignTicketError::RepositoryError(e)) => {
            error!(ticket_id = %ticket_id, error = %e, "Ticket assignment failed");
            ApiResponse::internal_error()
        }
    }
}
