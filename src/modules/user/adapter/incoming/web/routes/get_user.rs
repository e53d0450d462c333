use actix_web::{get, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::{policy_violation_response, AuthenticatedUser};
use crate::auth::application::domain::entities::UserId;
use crate::modules::user::application::ports::incoming::use_cases::GetUserError;
use crate::shared::api::ApiResponse;
use crate::AppState;

use super::user_response::UserResponse;

/// Get a user by id (admin only)
#[utoipa::path(
    get,
    path = "/api/v1/users/{id}",
    tag = "users",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "User id")),
    responses(
        (status = 200, description = "User found", body = inline(SuccessResponse<UserResponse>)),
        (status = 403, description = "Administrator role required", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/v1/users/{id}")]
pub async fn get_user_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let user_id = UserId::from(path.into_inner());

    match data.users.get.execute(user.caller(), user_id).await {
        Ok(found) => ApiResponse::success(UserResponse::from(found)),
        Err(GetUserError::Forbidden(v)) => policy_violation_response(&v),
        Err(GetUserError::NotFound) => ApiResponse::not_found("USER_NOT_FOUND", "User not found"),
        Err(GetUserError::RepositoryError(e)) => {
            error!(user_id = %user_id, error = %e, "Failed to load user");
            ApiResponse::internal_error()
        }
    }
}
