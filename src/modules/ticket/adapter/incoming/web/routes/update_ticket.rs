use actix_web::{put, web, Responder};
use serde::Deserialize;
use tracing::{error, warn};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::{policy_violation_response, AuthenticatedUser};
use crate::modules::ticket::application::domain::{TicketId, TicketPriority, TicketStatus};
use crate::modules::ticket::application::ports::incoming::use_cases::{
    UpdateTicketCommand, UpdateTicketError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

use super::ticket_response::TicketResponse;

/// Omitted fields keep their stored value.
#[derive(Deserialize, ToSchema)]
pub struct UpdateTicketRequest {
    #[schema(example = "VPN disconnects every hour")]
    pub title: Option<String>,

    pub description: Option<String>,

    pub status: Option<TicketStatus>,

    pub priority: Option<TicketPriority>,
}

/// Update a ticket
///
/// Allowed for the ticket's creator, its assignee and admins. Any status
/// transition is permitted.
#[utoipa::path(
    put,
    path = "/api/v1/tickets/{id}",
    tag = "tickets",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Ticket id")),
    request_body = UpdateTicketRequest,
    responses(
        (status = 200, description = "Ticket updated", body = inline(SuccessResponse<TicketResponse>)),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 403, description = "Not a participant of this ticket", body = ErrorResponse),
        (status = 404, description = "Ticket not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[put("/api/v1/tickets/{id}")]
pub async fn update_ticket_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    req: web::Json<UpdateTicketRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let ticket_id = TicketId::from(path.into_inner());
    let dto = req.into_inner();
    let command = UpdateTicketCommand {
        title: dto.title,
        description: dto.description,
        status: dto.status,
        priority: dto.priority,
    };

    match data
        .tickets
        .update
        .execute(user.caller(), ticket_id, command)
        .await
    {
        Ok(ticket) => ApiResponse::success(TicketResponse::from(ticket)),
        Err(UpdateTicketError::NotFound) => {
            ApiResponse::not_found("TICKET_NOT_FOUND", "Ticket not found")
        }
        Err(UpdateTicketError::Forbidden(v)) => policy_violation_response(&v),
        Err(UpdateTicketError::InvalidInput(e)) => {
            warn!(ticket_id = %ticket_id, reason = %e, "Ticket update rejected");
            ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string())
        }
        Err(UpdateTicketError::RepositoryError(e)) => {
            error!(ticket_id = %ticket_id, error = %e, "Ticket update failed");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::UserRole;
    use crate::modules::ticket::application::ports::outgoing::TicketRepository;
    use crate::modules::ticket::application::service::UpdateTicketService;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::TestAuth;
    use crate::tests::support::in_memory::InMemoryTicketRepository;
    use actix_web::{test, App};
    use serde_json::{json, Value};

    #[actix_web::test]
    async fn test_assignee_updates_and_stranger_is_forbidden() {
        let auth = TestAuth::new();
        let customer = auth.add_user("c@example.com", UserRole::Customer);
        let agent = auth.add_user("agent@example.com", UserRole::Agent);
        let stranger = auth.add_user("s@example.com", UserRole::Customer);

        let repo = InMemoryTicketRepository::default();
        let ticket = repo.seed("Monitor flickers", customer.id);
        repo.assign_ticket(ticket.id, agent.id).await.unwrap();

        let app_state = TestAppStateBuilder::default()
            .with_update_ticket(UpdateTicketService::new(repo.clone()))
            .build();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(auth.authenticator.clone())
                .service(update_ticket_handler),
        )
        .await;

        let uri = format!("/api/v1/tickets/{}", ticket.id);

        let req = test::TestRequest::put()
            .uri(&uri)
            .insert_header(("Authorization", auth.bearer(&agent)))
            .set_json(json!({ "status": "in_progress" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["status"], "in_progress");
        assert_eq!(body["data"]["assigned_to"], agent.id.to_string());

        let req = test::TestRequest::put()
            .uri(&uri)
            .insert_header(("Authorization", auth.bearer(&stranger)))
            .set_json(json!({ "status": "closed" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 403);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "FORBIDDEN");
    }
}
