use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::{policy_violation_response, AuthenticatedUser};
use crate::modules::user::application::ports::incoming::use_cases::ListUsersError;
use crate::shared::api::ApiResponse;
use crate::AppState;

use super::user_response::UserResponse;

/// List all users (admin only)
#[utoipa::path(
    get,
    path = "/api/v1/users",
    tag = "users",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All users, oldest first", body = inline(SuccessResponse<Vec<UserResponse>>)),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Administrator role required", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/v1/users")]
pub async fn list_users_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.users.list.execute(user.caller()).await {
        Ok(users) => ApiResponse::success(
            users
                .into_iter()
                .map(UserResponse::from)
                .collect::<Vec<_>>(),
        ),
        Err(ListUsersError::Forbidden(v)) => policy_violation_response(&v),
        Err(ListUsersError::RepositoryError(e)) => {
            error!(error = %e, "Failed to list users");
            ApiResponse::internal_error()
        }
    }
}
