use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::{error, warn};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::{
    policy_violation_response, AuthenticatedUser,
};
use crate::modules::message::application::ports::incoming::use_cases::{
    PostMessageCommand, PostMessageError,
};
use crate::modules::ticket::application::domain::TicketId;
use crate::shared::api::ApiResponse;
use crate::AppState;

use super::message_response::TicketMessageResponse;

#[derive(Deserialize, ToSchema)]
pub struct PostMessageRequest {
    #[schema(example = "Restarting the router fixed it for an hour")]
    pub content: String,

    /// Must belong to the same ticket
    pub conversation_id: Option<Uuid>,
}

/// Post a message on a ticket
///
/// Allowed for the ticket's creator, its assignee and admins.
#[utoipa::path(
    post,
    path = "/api/v1/tickets/{id}/messages",
    tag = "messages",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Ticket id")),
    request_body = PostMessageRequest,
    responses(
        (status = 201, description = "Message stored", body = inline(SuccessResponse<TicketMessageResponse>)),
        (
            status = 400,
            description = "Empty content or foreign conversation",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "EMPTY_CONTENT",
                    "message": "Message content cannot be empty"
                }
            })
        ),
        (status = 403, description = "Caller may not post on this ticket", body = ErrorResponse),
        (status = 404, description = "Ticket not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/v1/tickets/{id}/messages")]
pub async fn post_message_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    req: web::Json<PostMessageRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let ticket_id = TicketId::from(path.into_inner());
    let dto = req.into_inner();
    let command = PostMessageCommand {
        content: dto.content,
        conversation_id: dto.conversation_id,
    };

    match data.messages.post.execute(user.caller(), ticket_id, command).await {
        Ok(message) => ApiResponse::created(TicketMessageResponse::from(message)),
        Err(PostMessageError::TicketNotFound) => {
            ApiResponse::not_found("TICKET_NOT_FOUND", "Ticket not found")
        }
        Err(PostMessageError::Forbidden(v)) => policy_violation_response(&v),
        Err(PostMessageError::InvalidInput(e)) => {
            warn!(ticket_id = %ticket_id, reason = %e, "Message rejected");
            ApiResponse::bad_request("EMPTY_CONTENT", &e.to_string())
        }
        Err(e @ PostMessageError::InvalidConversation) => {
            ApiResponse::bad_request("INVALID_CONVERSATION", &e.to_string())
        }
        Err(PostMessageError::RepositoryError(e)) => {
            error!(ticket_id = %ticket_id, error = %e, "Failed to post message");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::UserRole;
    use crate::modules::message::application::service::PostMessageService;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::TestAuth;
    use crate::tests::support::in_memory::{InMemoryMessageRepository, InMemoryTicketRepository};
    use actix_web::{test, App};
    use serde_json::{json, Value};

    #[actix_web::test]
    async fn test_post_message_access_rules() {
        let auth = TestAuth::new();
        let creator = auth.add_user("creator@example.com", UserRole::Customer);
        let stranger = auth.add_user("stranger@example.com", UserRole::Customer);
        let admin = auth.add_user("admin@example.com", UserRole::Admin);
        let tickets = InMemoryTicketRepository::default();
        let messages = InMemoryMessageRepository::default();
        let ticket = tickets.seed("Wifi drops", creator.id);

        let app_state = TestAppStateBuilder::default()
            .with_post_message(PostMessageService::new(tickets.clone(), messages.clone()))
            .build();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(auth.authenticator.clone())
                .service(post_message_handler),
        )
        .await;
        let uri = format!("/api/v1/tickets/{}/messages", ticket.id);

        let req = test::TestRequest::post()
            .uri(&uri)
            .insert_header(("Authorization", auth.bearer(&stranger)))
            .set_json(json!({ "content": "me too" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 403);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "FORBIDDEN");

        for user in [&creator, &admin] {
            let req = test::TestRequest::post()
                .uri(&uri)
                .insert_header(("Authorization", auth.bearer(user)))
                .set_json(json!({ "content": "Still broken" }))
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), 201);
            let body: Value = test::read_body_json(resp).await;
            assert_eq!(body["data"]["author_id"], user.id.to_string());
            assert_eq!(body["data"]["ticket_id"], ticket.id.to_string());
        }

        assert_eq!(messages.len(), 2);
    }

    #[actix_web::test]
    async fn test_post_message_rejections() {
        let auth = TestAuth::new();
        let admin = auth.add_user("admin@example.com", UserRole::Admin);
        let tickets = InMemoryTicketRepository::default();
        let ticket = tickets.seed("Wifi drops", admin.id);

        let app_state = TestAppStateBuilder::default()
            .with_post_message(PostMessageService::new(
                tickets.clone(),
                InMemoryMessageRepository::default(),
            ))
            .build();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(auth.authenticator.clone())
                .service(post_message_handler),
        )
        .await;

        let cases = [
            (ticket.id.value(), json!({ "content": "  " }), 400, "EMPTY_CONTENT"),
            (
                ticket.id.value(),
                json!({ "content": "hi", "conversation_id": Uuid::new_v4() }),
                400,
                "INVALID_CONVERSATION",
            ),
            (Uuid::new_v4(), json!({ "content": "hi" }), 404, "TICKET_NOT_FOUND"),
        ];

        for (ticket_id, payload, status, code) in cases {
            let req = test::TestRequest::post()
                .uri(&format!("/api/v1/tickets/{}/messages", ticket_id))
                .insert_header(("Authorization", auth.bearer(&admin)))
                .set_json(payload)
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), status);
            let body: Value = test::read_body_json(resp).await;
            assert_eq!(body["error"]["code"], code);
        }
    }
}
