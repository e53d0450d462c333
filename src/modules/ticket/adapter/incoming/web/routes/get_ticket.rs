use actix_web::{get, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::ticket::application::domain::TicketId;
use crate::modules::ticket::application::ports::incoming::use_cases::GetTicketError;
use crate::shared::api::ApiResponse;
use crate::AppState;

use super::ticket_response::TicketResponse;

/// Get a ticket
#[utoipa::path(
    get,
    path = "/api/v1/tickets/{id}",
    tag = "tickets",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Ticket id")),
    responses(
        (status = 200, description = "Ticket found", body = inline(SuccessResponse<TicketResponse>)),
        (status = 404, description = "Ticket not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/v1/tickets/{id}")]
pub async fn get_ticket_handler(
    _user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let ticket_id = TicketId::from(path.into_inner());

    match data.tickets.get.execute(ticket_id).await {
        Ok(ticket) => ApiResponse::success(TicketResponse::from(ticket)),
        Err(GetTicketError::NotFound) => {
            ApiResponse::not_found("TICKET_NOT_FOUND", "Ticket not found")
        }
        Err(GetTicketError::RepositoryError(e)) => {
            error!(ticket_id = %ticket_id, error = %e, "Failed to load ticket");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::UserRole;
    use crate::modules::ticket::application::service::GetTicketService;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::TestAuth;
    use crate::tests::support::in_memory::InMemoryTicketRepository;
    use actix_web::{test, App};
    use serde_json::Value;

    #[actix_web::test]
    async fn test_any_caller_reads_any_ticket() {
        let auth = TestAuth::new();
        let owner = auth.add_user("owner@example.com", UserRole::Customer);
        let other = auth.add_user("other@example.com", UserRole::Customer);
        let repo = InMemoryTicketRepository::default();
        let ticket = repo.seed("Shared drive", owner.id);

        let app_state = TestAppStateBuilder::default()
            .with_get_ticket(GetTicketService::new(repo.clone()))
            .build();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(auth.authenticator.clone())
                .service(get_ticket_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri(&format!("/api/v1/tickets/{}", ticket.id))
            .insert_header(("Authorization", auth.bearer(&other)))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let req = test::TestRequest::get()
            .uri(&format!("/api/v1/tickets/{}", Uuid::new_v4()))
            .insert_header(("Authorization", auth.bearer(&other)))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 404);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "TICKET_NOT_FOUND");
    }

    #[actix_web::test]
    async fn test_malformed_id_is_validation_error() {
        let auth = TestAuth::new();
        let user = auth.add_user("user@example.com", UserRole::Customer);

        let app_state = TestAppStateBuilder::default()
            .with_get_ticket(GetTicketService::new(InMemoryTicketRepository::default()))
            .build();
        let app = test::init_service(
            App::new()
                .app_data(crate::shared::api::custom_path_config())
                .app_data(app_state)
                .app_data(auth.authenticator.clone())
                .service(get_ticket_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/v1/tickets/not-a-uuid")
            .insert_header(("Authorization", auth.bearer(&user)))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 400);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }
}
