use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::user::application::ports::incoming::use_cases::GetCurrentUserError;
use crate::shared::api::ApiResponse;
use crate::AppState;

use super::user_response::UserResponse;

/// Current user profile
#[utoipa::path(
    get,
    path = "/api/v1/users/me",
    tag = "users",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "The authenticated user", body = inline(SuccessResponse<UserResponse>)),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/v1/users/me")]
pub async fn get_current_user_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.users.me.execute(user.caller()).await {
        Ok(me) => ApiResponse::success(UserResponse::from(me)),
        Err(GetCurrentUserError::NotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }
        Err(GetCurrentUserError::RepositoryError(e)) => {
            error!(user_id = %user.caller().id, error = %e, "Failed to load current user");
            ApiResponse::internal_error()
        }
    }
}
