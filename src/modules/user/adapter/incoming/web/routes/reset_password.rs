use actix_web::{put, web, Responder};
use serde::Deserialize;
use tracing::{error, warn};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, MessageResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::{policy_violation_response, AuthenticatedUser};
use crate::auth::application::domain::entities::UserId;
use crate::modules::user::application::ports::incoming::use_cases::ResetPasswordError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Deserialize, ToSchema)]
pub struct ResetPasswordRequest {
    /// At least 8 characters
    #[schema(example = "NewSecurePass123!")]
    pub password: String,
}

/// Reset a user's password (admin only)
#[utoipa::path(
    put,
    path = "/api/v1/users/{id}/reset-password",
    tag = "users",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "User id")),
    request_body = ResetPasswordRequest,
    responses(
        (status = 200, description = "Password reset", body = inline(SuccessResponse<MessageResponse>)),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 403, description = "Administrator role required", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[put("/api/v1/users/{id}/reset-password")]
pub async fn reset_password_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    req: web::Json<ResetPasswordRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let user_id = UserId::from(path.into_inner());
    let password = req.into_inner().password;

    match data
        .users
        .reset_password
        .execute(user.caller(), user_id, password)
        .await
    {
        Ok(()) => ApiResponse::success(MessageResponse::new("Password has been reset")),
        Err(ResetPasswordError::Forbidden(v)) => policy_violation_response(&v),
        Err(ResetPasswordError::InvalidInput(e)) => {
            warn!(user_id = %user_id, reason = %e, "Password reset rejected");
            ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string())
        }
        Err(ResetPasswordError::NotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }
        Err(e @ ResetPasswordError::HashingFailed(_))
        | Err(e @ ResetPasswordError::RepositoryError(_)) => {
            error!(user_id = %user_id, error = %e, "Password reset failed");
            ApiResponse::internal_error()
        }
    }
}
