use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::{error, warn};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::ticket::application::domain::TicketPriority;
use crate::modules::ticket::application::ports::incoming::use_cases::{
    CreateTicketCommand, CreateTicketError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

use super::ticket_response::TicketResponse;

/// Unknown fields such as `status` are ignored; new tickets are always `open`.
#[derive(Deserialize, ToSchema)]
pub struct CreateTicketRequest {
    #[schema(example = "VPN disconnects every hour")]
    pub title: String,

    #[serde(default)]
    #[schema(example = "Started after the latest client update")]
    pub description: String,

    /// Defaults to `medium`
    pub priority: Option<TicketPriority>,
}

/// Open a ticket
#[utoipa::path(
    post,
    path = "/api/v1/tickets",
    tag = "tickets",
    security(("bearer_auth" = [])),
    request_body = CreateTicketRequest,
    responses(
        (status = 201, description = "Ticket created", body = inline(SuccessResponse<TicketResponse>)),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/v1/tickets")]
pub async fn create_ticket_handler(
    user: AuthenticatedUser,
    req: web::Json<CreateTicketRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();
    let command = CreateTicketCommand {
        title: dto.title,
        description: dto.description,
        priority: dto.priority,
    };

    match data.tickets.create.execute(user.caller(), command).await {
        Ok(ticket) => ApiResponse::created(TicketResponse::from(ticket)),
        Err(CreateTicketError::InvalidInput(e)) => {
            warn!(user_id = %user.caller().id, reason = %e, "Ticket creation rejected");
            ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string())
        }
        Err(CreateTicketError::RepositoryError(e)) => {
            error!(error = %e, "Ticket creation failed");
            ApiResponse::internal_error()
        }
    }
}
