use actix_web::{post, web, Responder};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::{
    policy_violation_response, AuthenticatedUser,
};
use crate::modules::system::application::ports::incoming::use_cases::ShutdownError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Serialize, ToSchema)]
pub struct ShutdownResponse {
    #[schema(example = "System shutdown initiated")]
    pub message: String,

    #[schema(example = "The application will stop accepting new connections")]
    pub details: String,

    #[schema(example = "SHUTDOWN_INITIATED")]
    pub code: String,
}

/// Stop the server
///
/// Answers right away; the server stops after a short delay.
#[utoipa::path(
    post,
    path = "/system/shutdown",
    tag = "system",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Shutdown scheduled", body = inline(SuccessResponse<ShutdownResponse>)),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Administrator role required", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/system/shutdown")]
pub async fn shutdown_handler(user: AuthenticatedUser, data: web::Data<AppState>) -> impl Responder {
    match data.system.shutdown.execute(user.caller()).await {
        Ok(_) => ApiResponse::success(ShutdownResponse {
            message: "System shutdown initiated".to_string(),
            details: "The application will stop accepting new connections".to_string(),
            code: "SHUTDOWN_INITIATED".to_string(),
        }),
        Err(ShutdownError::Forbidden(v)) => policy_violation_response(&v),
        Err(ShutdownError::Unavailable(e)) => {
            error!(error = %e, "Shutdown request failed");
            ApiResponse::internal_error()
        }
    }
}
