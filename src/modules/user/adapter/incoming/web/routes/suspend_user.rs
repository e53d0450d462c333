use actix_web::{put, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::{policy_violation_response, AuthenticatedUser};
use crate::auth::application::domain::entities::UserId;
use crate::modules::user::application::ports::incoming::use_cases::SuspendUserError;
use crate::shared::api::ApiResponse;
use crate::AppState;

use super::user_response::UserResponse;

/// Suspend a user (admin only)
///
/// Suspended users cannot log in and their outstanding tokens are refused.
#[utoipa::path(
    put,
    path = "/api/v1/users/{id}/suspend",
    tag = "users",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "User id")),
    responses(
        (status = 200, description = "User suspended", body = inline(SuccessResponse<UserResponse>)),
        (status = 403, description = "Administrator role required", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[put("/api/v1/users/{id}/suspend")]
pub async fn suspend_user_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let user_id = UserId::from(path.into_inner());

    match data.users.suspend.execute(user.caller(), user_id).await {
        Ok(suspended) => ApiResponse::success(UserResponse::from(suspended)),
        Err(SuspendUserError::Forbidden(v)) => policy_violation_response(&v),
        Err(SuspendUserError::NotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }
        Err(SuspendUserError::RepositoryError(e)) => {
            error!(user_id = %user_id, error = %e, "Suspending user failed");
            ApiResponse::internal_error()
        }
    }
}
