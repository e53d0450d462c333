use actix_web::{delete, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::{policy_violation_response, AuthenticatedUser};
use crate::auth::application::domain::entities::UserId;
use crate::modules::user::application::ports::incoming::use_cases::DeleteUserError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Delete a user (admin only)
#[utoipa::path(
    delete,
    path = "/api/v1/users/{id}",
    tag = "users",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "User id")),
    responses(
        (status = 204, description = "User deleted"),
        (status = 403, description = "Administrator role required", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
        (
            status = 409,
            description = "User still owns tickets or messages",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "USER_IN_USE",
                    "message": "User is still referenced by tickets or messages"
                }
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[delete("/api/v1/users/{id}")]
pub async fn delete_user_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let user_id = UserId::from(path.into_inner());

    match data.users.delete.execute(user.caller(), user_id).await {
        Ok(()) => ApiResponse::no_content(),
        Err(DeleteUserError::Forbidden(v)) => policy_violation_response(&v),
        Err(DeleteUserError::NotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }
        Err(DeleteUserError::UserInUse) => ApiResponse::conflict(
            "USER_IN_USE",
            "User is still referenced by tickets or messages",
        ),
        Err(DeleteUserError::RepositoryError(e)) => {
            error!(user_id = %user_id, error = %e, "User deletion failed");
            ApiResponse::internal_error()
        }
    }
}
